//! # Connection Errors
//!
//! Error types for the wallet-connection handshake. Follows the `thiserror`
//! pattern used across the workspace libraries.
//!
//! ## Error Categories
//!
//! 1. **Handshake outcome** - raised by [`WalletConnector`](crate::WalletConnector)
//!    - [`NoAccount`](ConnectionError::NoAccount) - neither lookup produced an account
//!    - [`InvalidAddress`](ConnectionError::InvalidAddress) - address rejected by policy
//!    - [`InProgress`](ConnectionError::InProgress) - another attempt is still pending
//!
//! 2. **Provider failures** - raised by the wallet extension itself
//!    - [`Provider`](ConnectionError::Provider) wrapping a [`ProviderError`]
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_wallet::error::{ConnectionError, Result};
//!
//! fn require(account: Option<String>) -> Result<String> {
//!     account.ok_or(ConnectionError::NoAccount)
//! }
//!
//! assert!(require(None).is_err());
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, ConnectionError>`.
pub type Result<T> = std::result::Result<T, ConnectionError>;

/// Failure reported by a wallet provider or its locator.
///
/// The message is whatever the extension supplied, so it is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No wallet extension could be found in the host environment.
    #[error("Wallet provider not detected: {0}")]
    NotDetected(String),

    /// The provider rejected a request (user declined, locked wallet, ...).
    #[error("Wallet request rejected: {0}")]
    Rejected(String),
}

/// Error returned by [`WalletConnector::connect`](crate::WalletConnector::connect).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// Neither the passive lookup nor the interactive request yielded an account.
    #[error("Could not connect account: the wallet returned no account")]
    NoAccount,

    /// The wallet returned an address that does not satisfy the configured policy.
    #[error("Invalid account address: {0}")]
    InvalidAddress(String),

    /// A connect attempt on this connector is already pending.
    #[error("A wallet connection request is already in progress")]
    InProgress,

    /// Detection or the passive lookup failed inside the provider.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ConnectionError {
    /// Short, user-facing text for display next to the connect button.
    pub fn user_message(&self) -> String {
        match self {
            ConnectionError::NoAccount => {
                "Could not connect account. Approve the request in your wallet and try again.".to_string()
            }
            ConnectionError::InvalidAddress(_) => {
                "The wallet returned an address this page cannot use.".to_string()
            }
            ConnectionError::InProgress => {
                "A connection request is already open in your wallet.".to_string()
            }
            ConnectionError::Provider(ProviderError::NotDetected(_)) => {
                "No Concordium wallet was found. Install the browser extension and reload.".to_string()
            }
            ConnectionError::Provider(ProviderError::Rejected(msg)) => msg.clone(),
        }
    }
}
