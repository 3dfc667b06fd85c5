//! # Provider Traits
//!
//! Seams between the connector and the wallet extension, so the handshake can be
//! driven by the injected browser wallet in production and by fakes in tests.
//!
//! Futures produced by browser bindings are not `Send`, hence `?Send`.

use async_trait::async_trait;

use crate::error::ProviderError;

/// Wallet operations used by the connect handshake.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Passive lookup of the account the user last selected for this site.
    ///
    /// Must not prompt the user. `Ok(None)` means no account has been approved yet.
    async fn most_recently_selected_account(&self) -> Result<Option<String>, ProviderError>;

    /// Interactive connect request; may open the extension's consent popup.
    ///
    /// `Ok(None)` means the wallet closed the request without an account.
    async fn connect(&self) -> Result<Option<String>, ProviderError>;
}

/// Finds the wallet provider in the host environment.
#[async_trait(?Send)]
pub trait ProviderLocator {
    type Provider: WalletProvider;

    /// Resolve the provider. May wait for the extension to finish loading.
    async fn detect(&self) -> Result<Self::Provider, ProviderError>;
}
