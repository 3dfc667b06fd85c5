//! Connector configuration embedded in the host page

use lib_wallet::ConnectorConfig;

use crate::utils::constants::CONNECTOR_CONFIG_ELEMENT_ID;

/// Read the connector config from the page, falling back to defaults.
///
/// A missing element is normal; a malformed one is logged and ignored.
pub fn load_connector_config() -> ConnectorConfig {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONNECTOR_CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match text {
        Some(text) => parse_or_default(&text),
        None => ConnectorConfig::default(),
    }
}

fn parse_or_default(text: &str) -> ConnectorConfig {
    match ConnectorConfig::from_json(text) {
        Ok(config) => {
            log::info!("Loaded connector config: {:?}", config);
            config
        }
        Err(e) => {
            log::warn!("{}, using defaults", e);
            ConnectorConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_wallet::AddressPolicy;

    #[test]
    fn test_parse_embedded_config() {
        let config = parse_or_default(r#"{ "address_policy": "concordium" }"#);
        assert_eq!(config.address_policy, AddressPolicy::Concordium);
    }

    #[test]
    fn test_malformed_config_falls_back() {
        assert_eq!(parse_or_default("not json"), ConnectorConfig::default());
    }
}
