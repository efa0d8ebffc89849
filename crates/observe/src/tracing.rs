use {
    std::{io, sync::Once},
    tracing::level_filters::LevelFilter,
    tracing_subscriber::{EnvFilter, fmt, prelude::*},
};

/// Output format of the log lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

/// Initializes tracing with the given `env_filter` directives (same syntax as
/// `RUST_LOG`). Directives that fail to parse are reported and skipped.
///
/// Only the first call has an effect so tests may call this freely.
pub fn initialize(env_filter: &str, format: Format) {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| set_global_subscriber(env_filter, format));
}

fn set_global_subscriber(env_filter: &str, format: Format) {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(env_filter);

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        Format::Text => registry
            .with(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_ansi(atty::is(atty::Stream::Stderr)),
            )
            .try_init(),
        Format::Json => registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init(),
    };

    if let Err(err) = result {
        eprintln!("tracing subscriber already installed: {err}");
        return;
    }
    tracing::info!(%env_filter, ?format, "initialized tracing");
}
