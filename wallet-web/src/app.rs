//! CCD Connect Web App - Leptos Frontend
//!
//! Single page: connect button plus the resolved account address.

use leptos::prelude::*;
use lib_wallet::ConnectorConfig;

use crate::components::ConnectButton;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App(config: ConnectorConfig) -> impl IntoView {
    provide_wallet_context(config);

    view! {
        <div class="app-container">
            <div class="card">
                <h1 class="card-title">"Concordium Wallet"</h1>
                <ConnectButton/>
            </div>
        </div>
    }
}
