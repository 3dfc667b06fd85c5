//! # Wallet Connect Library
//!
//! The wallet-connection handshake used by the dapp front end: detect the
//! injected wallet, reuse the last selected account or ask the user to connect,
//! and hand back the provider together with the account.
//!
//! ## Structure
//!
//! - **[`connector`]**: [`WalletConnector`] and the [`Connection`] it produces
//! - **[`provider`]**: [`WalletProvider`] / [`ProviderLocator`] seams
//! - **[`account`]**: [`Account`] and address policies
//! - **[`config`]**: [`ConnectorConfig`]
//! - **[`error`]**: [`ConnectionError`], [`ProviderError`]

pub mod account;
pub mod config;
pub mod connector;
pub mod error;
pub mod provider;

// Re-export commonly used types
pub use account::{Account, AddressPolicy};
pub use config::ConnectorConfig;
pub use connector::{Connection, WalletConnector};
pub use error::{ConnectionError, ProviderError, Result};
pub use provider::{ProviderLocator, WalletProvider};
