//! Wallet extension bindings

pub mod concordium;

pub use concordium::{ConcordiumProvider, InjectedLocator};
