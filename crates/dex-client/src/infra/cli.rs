//! Command line arguments.

use {
    crate::domain::analytics::Filter,
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Log filter directives, `RUST_LOG` syntax.
    #[clap(long, env, default_value = "warn,dex_client=debug")]
    pub log_filter: String,

    /// Emit log lines as JSON.
    #[clap(long, env)]
    pub log_json: bool,

    /// Path to the TOML chain configuration.
    #[clap(long, env)]
    pub config: PathBuf,

    /// Chain to derive views for.
    #[clap(long, env, default_value_t = 1)]
    pub chain_id: u64,

    /// JSON list of tokens the user imported by address, on top of the
    /// configured ones.
    #[clap(long, env)]
    pub imported_tokens: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Status of the add liquidity form for the given inputs.
    AddLiquidity {
        /// Token symbol or address. Defaults to the chain's native token.
        #[clap(long)]
        token_a: Option<String>,
        #[clap(long)]
        token_b: Option<String>,
        #[clap(long, default_value = "")]
        amount_a: String,
        #[clap(long, default_value = "")]
        amount_b: String,
    },

    /// Status, action and removal of the remove liquidity form.
    RemoveLiquidity {
        /// JSON snapshot of the application state.
        #[clap(long)]
        state: PathBuf,
        /// Defaults to the chain's default pool.
        #[clap(long, requires = "token_b")]
        token_a: Option<String>,
        #[clap(long, requires = "token_a")]
        token_b: Option<String>,
        /// Percentage of the LP position to remove.
        #[clap(long, default_value = "")]
        percent: String,
    },

    /// APR and controls of every configured farm.
    Farm {
        /// JSON snapshot of the application state.
        #[clap(long)]
        state: PathBuf,
        /// Only show the farm with this name, e.g. `PBR-ETH`.
        #[clap(long)]
        name: Option<String>,
    },

    /// One page of the analytics transactions table.
    Transactions {
        /// JSON file holding the subgraph's mints, burns and swaps.
        #[clap(long)]
        feed: PathBuf,
        #[clap(long, value_enum, default_value_t)]
        filter: Filter,
        /// 1-based page number, clamped to the last page.
        #[clap(long, default_value_t = 1)]
        page: usize,
        #[clap(long)]
        oldest_first: bool,
    },
}
