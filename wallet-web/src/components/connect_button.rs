//! Connect Wallet Button - runs the handshake and shows the resolved address

use leptos::prelude::*;

use crate::state::wallet::use_wallet_context;
use crate::utils::constants::ADDRESS_LABEL;

/// Text of the address line, `Address <value>`; the value is blank until connected.
pub fn address_line(address: Option<&str>) -> String {
    format!("{} {}", ADDRESS_LABEL, address.unwrap_or_default())
}

#[component]
pub fn ConnectButton() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let on_click = move |_| {
        // Button is disabled while connecting, but clicks can race the re-render
        if wallet_ctx.is_connecting() {
            return;
        }
        wallet_ctx.set_connecting();

        let connector = wallet_ctx.connector();
        leptos::task::spawn_local(async move {
            match connector.connect().await {
                Ok(connection) => {
                    log::info!("Wallet connected: {}", connection.account);
                    wallet_ctx.set_connected(connection);
                }
                Err(e) => {
                    log::warn!("Wallet connection failed: {}", e);
                    wallet_ctx.set_error(&e);
                }
            }
        });
    };

    view! {
        <div class="wallet-container">
            <button
                class="btn"
                on:click=on_click
                disabled=move || wallet_ctx.is_connecting()
            >
                {move || wallet_ctx.button_label()}
            </button>
            <p class="wallet-address">
                {move || address_line(wallet_ctx.address().as_deref())}
            </p>
            {move || wallet_ctx.error().map(|msg| view! {
                <p class="wallet-error">{msg}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_line() {
        assert_eq!(address_line(Some("3X7...A1")), "Address 3X7...A1");
        assert_eq!(address_line(None), "Address ");
    }
}
