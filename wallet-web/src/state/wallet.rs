//! Wallet state management

use std::rc::Rc;

use leptos::prelude::*;
use lib_wallet::{Connection, ConnectionError, ConnectorConfig, WalletConnector};

use crate::services::{ConcordiumProvider, InjectedLocator};

/// Connector type used by the page.
pub type PageConnector = WalletConnector<InjectedLocator>;

/// Wallet connection state shown by the page
#[derive(Clone, Debug, PartialEq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected { address: String },
    Error(String),
}

impl WalletState {
    pub fn is_connecting(&self) -> bool {
        matches!(self, WalletState::Connecting)
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            WalletState::Connected { address } => Some(address),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            WalletState::Error(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            WalletState::Disconnected | WalletState::Error(_) => "Connect Wallet",
            WalletState::Connecting => "Connecting...",
            WalletState::Connected { .. } => "Connected",
        }
    }
}

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub wallet: RwSignal<WalletState>,
    connector: StoredValue<Rc<PageConnector>, LocalStorage>,
    // Provider handle of the current connection, held for the rest of the session
    provider: StoredValue<Option<ConcordiumProvider>, LocalStorage>,
}

impl WalletContext {
    pub fn new(config: ConnectorConfig) -> Self {
        Self {
            wallet: RwSignal::new(WalletState::Disconnected),
            connector: StoredValue::new_local(Rc::new(WalletConnector::new(InjectedLocator, config))),
            provider: StoredValue::new_local(None),
        }
    }

    pub fn connector(&self) -> Rc<PageConnector> {
        self.connector.get_value()
    }

    pub fn is_connecting(&self) -> bool {
        self.wallet.with(|state| state.is_connecting())
    }

    pub fn address(&self) -> Option<String> {
        self.wallet.with(|state| state.address().map(|s| s.to_string()))
    }

    pub fn error(&self) -> Option<String> {
        self.wallet.with(|state| state.error().map(|s| s.to_string()))
    }

    pub fn button_label(&self) -> &'static str {
        self.wallet.with(|state| state.button_label())
    }

    pub fn set_connecting(&self) {
        self.wallet.set(WalletState::Connecting);
    }

    pub fn set_connected(&self, connection: Connection<ConcordiumProvider>) {
        let address = connection.account.into_string();
        self.provider.set_value(Some(connection.provider));
        self.wallet.set(WalletState::Connected { address });
    }

    pub fn set_error(&self, error: &ConnectionError) {
        self.wallet.set(WalletState::Error(error.user_message()));
    }
}

pub fn provide_wallet_context(config: ConnectorConfig) -> WalletContext {
    let context = WalletContext::new(config);
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}
