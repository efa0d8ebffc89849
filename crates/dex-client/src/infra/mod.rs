pub mod cli;
pub mod config;
pub mod dialog;
pub mod facts;
pub mod snapshot;
pub mod store;

pub use {
    facts::{FactSource, PairLoader},
    store::{Action, AppState, Store},
};
