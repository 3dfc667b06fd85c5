//! Application constants

/// Id of the optional `<script type="application/json">` element holding the connector config
pub const CONNECTOR_CONFIG_ELEMENT_ID: &str = "connector-config";

/// Id of the static loading placeholder in `index.html`
pub const LOADING_ELEMENT_ID: &str = "leptos-loading";

/// Prefix of the address line under the connect button
pub const ADDRESS_LABEL: &str = "Address";
