//! # Connector Configuration
//!
//! [`ConnectorConfig`] controls how strict the connector is. Every field has a
//! default, so an empty JSON object is a valid configuration.
//!
//! ```rust
//! use lib_wallet::config::ConnectorConfig;
//! use lib_wallet::AddressPolicy;
//!
//! let config = ConnectorConfig::from_json(r#"{ "address_policy": "concordium" }"#).unwrap();
//! assert_eq!(config.address_policy, AddressPolicy::Concordium);
//! assert!(config.reject_overlapping);
//! ```

use serde::{Deserialize, Serialize};

use crate::account::AddressPolicy;

/// Settings for a [`WalletConnector`](crate::WalletConnector).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorConfig {
    /// Format check applied to accounts returned by the wallet.
    pub address_policy: AddressPolicy,

    /// Fail a `connect()` call immediately while another one is pending,
    /// instead of stacking a second wallet prompt on top of the first.
    pub reject_overlapping: bool,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            address_policy: AddressPolicy::Any,
            reject_overlapping: true,
        }
    }
}

impl ConnectorConfig {
    /// Parse a configuration document. Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Invalid connector config: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConnectorConfig::default();
        assert_eq!(config.address_policy, AddressPolicy::Any);
        assert!(config.reject_overlapping);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        assert_eq!(ConnectorConfig::from_json("{}").unwrap(), ConnectorConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = ConnectorConfig::from_json(
            r#"{ "address_policy": "concordium", "reject_overlapping": false }"#,
        )
        .unwrap();
        assert_eq!(config.address_policy, AddressPolicy::Concordium);
        assert!(!config.reject_overlapping);
    }

    #[test]
    fn test_malformed_document() {
        let err = ConnectorConfig::from_json(r#"{ "address_policy": "bitcoin" }"#).unwrap_err();
        assert!(err.starts_with("Invalid connector config"));
    }
}
