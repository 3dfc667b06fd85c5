//! # Wallet Connector
//!
//! Runs the connect handshake against whatever [`ProviderLocator`] it was built
//! with.
//!
//! ## Flow
//!
//! ```text
//! detect() ──► most_recently_selected_account() ──Some──► Connection
//!                         │
//!                        None
//!                         ▼
//!                     connect() ──Some──► Connection
//!                         │
//!                    None / rejected
//!                         ▼
//!               ConnectionError::NoAccount
//! ```
//!
//! Each call is a single attempt; nothing is retried. Detection and the
//! interactive request may both suspend for as long as the extension (or the
//! user) takes.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lib_wallet::{ConnectorConfig, ProviderLocator, WalletConnector};
//!
//! # async fn example<L: ProviderLocator>(locator: L) -> lib_wallet::Result<()> {
//! let connector = WalletConnector::new(locator, ConnectorConfig::default());
//! let connection = connector.connect().await?;
//! println!("Address {}", connection.account);
//! # Ok(())
//! # }
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::{debug, info, instrument, warn};

use crate::account::Account;
use crate::config::ConnectorConfig;
use crate::error::{ConnectionError, ProviderError, Result};
use crate::provider::{ProviderLocator, WalletProvider};

/// A resolved provider handle together with its account.
#[derive(Clone, Debug)]
pub struct Connection<P> {
    pub provider: P,
    pub account: Account,
}

/// Drives the connect handshake.
pub struct WalletConnector<L> {
    locator: L,
    config: ConnectorConfig,
    // Number of pending `connect()` calls
    in_flight: AtomicUsize,
}

impl<L: ProviderLocator> WalletConnector<L> {
    pub fn new(locator: L, config: ConnectorConfig) -> Self {
        Self {
            locator,
            config,
            in_flight: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    /// Whether a `connect()` call is currently pending on this connector.
    pub fn is_connecting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Detect the wallet and resolve an account.
    ///
    /// # Errors
    ///
    /// - [`ConnectionError::NoAccount`] if neither the passive lookup nor the
    ///   interactive request yields an account
    /// - [`ConnectionError::Provider`] if detection or the passive lookup fails
    /// - [`ConnectionError::InvalidAddress`] if the account violates the address policy
    /// - [`ConnectionError::InProgress`] if another attempt is pending and
    ///   overlapping attempts are rejected
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<Connection<L::Provider>> {
        let _guard = if self.config.reject_overlapping {
            InFlightGuard::acquire_exclusive(&self.in_flight).ok_or_else(|| {
                warn!("Connect requested while another request is pending");
                ConnectionError::InProgress
            })?
        } else {
            InFlightGuard::acquire_shared(&self.in_flight)
        };

        debug!("Detecting wallet provider");
        let provider = self.locator.detect().await.map_err(|e| {
            warn!("Wallet provider detection failed: {}", e);
            ConnectionError::from(e)
        })?;

        let account = match resolve_account(&provider).await? {
            Some(account) => account,
            None => {
                warn!("Wallet returned no account");
                return Err(ConnectionError::NoAccount);
            }
        };

        self.config.address_policy.check(&account).inspect_err(|e| {
            warn!("Rejected wallet account: {}", e);
        })?;

        info!(account = %account, "Wallet connected");
        Ok(Connection { provider, account })
    }
}

/// Passive lookup first, interactive request only if that comes back empty.
async fn resolve_account<P: WalletProvider>(provider: &P) -> Result<Option<Account>> {
    debug!("Looking up most recently selected account");
    let selected = provider
        .most_recently_selected_account()
        .await
        .map_err(|e| {
            warn!("Account lookup failed: {}", e);
            ConnectionError::from(e)
        })?;

    if let Some(account) = selected.and_then(Account::new) {
        debug!("Reusing previously selected account");
        return Ok(Some(account));
    }

    debug!("No previously selected account, requesting connection");
    match provider.connect().await {
        Ok(approved) => Ok(approved.and_then(Account::new)),
        // Declining the popup surfaces as a rejected request
        Err(ProviderError::Rejected(msg)) => {
            debug!("Connection request rejected: {}", msg);
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Counts one pending `connect()` call for as long as it lives.
///
/// Released on drop, so a cancelled future frees the connector as well.
struct InFlightGuard<'a> {
    count: &'a AtomicUsize,
}

impl<'a> InFlightGuard<'a> {
    /// Succeeds only when no other call is pending.
    fn acquire_exclusive(count: &'a AtomicUsize) -> Option<Self> {
        count
            .compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { count })
    }

    fn acquire_shared(count: &'a AtomicUsize) -> Self {
        count.fetch_add(1, Ordering::AcqRel);
        Self { count }
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.count.fetch_sub(1, Ordering::AcqRel);
    }
}
