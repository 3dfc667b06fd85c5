//! # Account Identifiers
//!
//! [`Account`] is the address string returned by the wallet. It is never empty:
//! the only constructor rejects empty and all-whitespace input, so a
//! `Connection` can never carry a blank account.
//!
//! [`AddressPolicy`] optionally tightens this to the Concordium address format
//! (Base58Check, version byte `1`, 32-byte payload).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConnectionError, Result};

/// Base58Check version byte of Concordium account addresses.
pub const CONCORDIUM_ADDRESS_VERSION: u8 = 1;

/// Length of the decoded account address payload, excluding the version byte.
pub const CONCORDIUM_ADDRESS_LEN: usize = 32;

/// Non-empty account address as reported by the wallet.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Account(String);

impl Account {
    /// Wrap a wallet-supplied address. Returns `None` for empty or blank strings.
    pub fn new(address: impl Into<String>) -> Option<Self> {
        let address = address.into();
        if address.trim().is_empty() {
            None
        } else {
            Some(Self(address))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Account {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which account addresses the connector accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressPolicy {
    /// Any non-empty string; the wallet is trusted on its own format.
    #[default]
    Any,
    /// Must decode as a Concordium account address.
    Concordium,
}

impl AddressPolicy {
    /// Check `account` against this policy.
    pub fn check(&self, account: &Account) -> Result<()> {
        match self {
            AddressPolicy::Any => Ok(()),
            AddressPolicy::Concordium => decode_concordium_address(account.as_str()).map(|_| ()),
        }
    }
}

/// Decode a Concordium account address into its 32-byte payload.
pub fn decode_concordium_address(address: &str) -> Result<[u8; CONCORDIUM_ADDRESS_LEN]> {
    let decoded = bs58::decode(address)
        .with_check(Some(CONCORDIUM_ADDRESS_VERSION))
        .into_vec()
        .map_err(|e| ConnectionError::InvalidAddress(format!("{}: {}", address, e)))?;

    // The decoded buffer keeps the version byte in front of the payload
    let payload = decoded.get(1..).unwrap_or_default();
    payload.try_into().map_err(|_| {
        ConnectionError::InvalidAddress(format!(
            "{}: expected {} payload bytes, got {}",
            address,
            CONCORDIUM_ADDRESS_LEN,
            payload.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_address(payload: &[u8]) -> String {
        bs58::encode(payload)
            .with_check_version(CONCORDIUM_ADDRESS_VERSION)
            .into_string()
    }

    #[test]
    fn test_account_rejects_blank() {
        assert!(Account::new("").is_none());
        assert!(Account::new("   ").is_none());
        assert_eq!(Account::new("3X7...A1").unwrap().as_str(), "3X7...A1");
    }

    #[test]
    fn test_any_policy_accepts_placeholder() {
        let account = Account::new("9Q2...Z4").unwrap();
        assert!(AddressPolicy::Any.check(&account).is_ok());
    }

    #[test]
    fn test_concordium_policy_accepts_valid_address() {
        let payload = [7u8; CONCORDIUM_ADDRESS_LEN];
        let account = Account::new(encode_address(&payload)).unwrap();

        assert!(AddressPolicy::Concordium.check(&account).is_ok());
        assert_eq!(decode_concordium_address(account.as_str()).unwrap(), payload);
    }

    #[test]
    fn test_concordium_policy_rejects_garbage() {
        let account = Account::new("3X7...A1").unwrap();
        let err = AddressPolicy::Concordium.check(&account).unwrap_err();
        assert!(matches!(err, ConnectionError::InvalidAddress(_)));
    }

    #[test]
    fn test_concordium_policy_rejects_short_payload() {
        let account = Account::new(encode_address(&[7u8; 20])).unwrap();
        assert!(matches!(
            AddressPolicy::Concordium.check(&account),
            Err(ConnectionError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_policy_deserializes_lowercase() {
        let policy: AddressPolicy = serde_json::from_str("\"concordium\"").unwrap();
        assert_eq!(policy, AddressPolicy::Concordium);
    }
}
