use {
    anyhow::{Context, Result},
    serde::de::DeserializeOwned,
    std::path::Path,
};

/// Reads a JSON document, e.g. an application state snapshot or a subgraph
/// response.
pub async fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("invalid JSON in {}", path.display()))
}
