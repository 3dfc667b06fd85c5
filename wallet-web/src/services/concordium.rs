//! Concordium Browser Wallet Integration via wasm-bindgen
//!
//! The extension injects its API object as `window.concordium`, either before
//! the page scripts run or later, announcing itself with a
//! `concordium#initialized` event. [`InjectedLocator`] waits for it and
//! [`ConcordiumProvider`] adapts the object to [`WalletProvider`].

use async_trait::async_trait;
use lib_wallet::{ProviderError, ProviderLocator, WalletProvider};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ============================================================================
// PROVIDER DETECTION (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function detectConcordiumProvider() {
    return new Promise((resolve) => {
        if (window.concordium) {
            resolve(window.concordium);
            return;
        }
        // No timeout: the extension may finish loading at any point
        window.addEventListener('concordium#initialized', () => {
            resolve(window.concordium);
        }, { once: true });
    });
}
")]
extern "C" {
    /// Resolve the injected `window.concordium` object, waiting for it if needed
    #[wasm_bindgen(catch)]
    async fn detectConcordiumProvider() -> Result<JsValue, JsValue>;
}

/// Best-effort text of a JS error or rejection value.
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Map a wallet answer to an account string. `undefined` and `null` mean "no account".
fn account_from_js(value: JsValue) -> Result<Option<String>, ProviderError> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    value
        .as_string()
        .map(Some)
        .ok_or_else(|| ProviderError::Rejected(format!("Unexpected account value: {:?}", value)))
}

// ============================================================================
// PROVIDER HANDLE
// ============================================================================

/// Handle to the injected Concordium wallet API object.
#[derive(Clone, Debug)]
pub struct ConcordiumProvider {
    inner: js_sys::Object,
}

impl ConcordiumProvider {
    pub fn new(inner: js_sys::Object) -> Self {
        Self { inner }
    }

    /// Call a zero-argument method on the wallet object, awaiting it if it returns a promise
    async fn call_method(&self, method: &str) -> Result<JsValue, ProviderError> {
        let method_fn = js_sys::Reflect::get(&self.inner, &JsValue::from_str(method))
            .map_err(|e| ProviderError::Rejected(format!("Method {} not found: {}", method, js_error_message(&e))))?;

        let function = method_fn
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ProviderError::Rejected(format!("Method {} is not a function", method)))?;

        let result = function
            .call0(&self.inner)
            .map_err(|e| ProviderError::Rejected(js_error_message(&e)))?;

        match result.dyn_into::<js_sys::Promise>() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .map_err(|e| ProviderError::Rejected(js_error_message(&e))),
            Err(value) => Ok(value),
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for ConcordiumProvider {
    async fn most_recently_selected_account(&self) -> Result<Option<String>, ProviderError> {
        let value = self.call_method("getMostRecentlySelectedAccount").await?;
        account_from_js(value)
    }

    async fn connect(&self) -> Result<Option<String>, ProviderError> {
        let value = self.call_method("connect").await?;
        account_from_js(value)
    }
}

// ============================================================================
// LOCATOR
// ============================================================================

/// Finds the Concordium wallet injected into the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct InjectedLocator;

#[async_trait(?Send)]
impl ProviderLocator for InjectedLocator {
    type Provider = ConcordiumProvider;

    async fn detect(&self) -> Result<ConcordiumProvider, ProviderError> {
        let value = detectConcordiumProvider()
            .await
            .map_err(|e| ProviderError::NotDetected(js_error_message(&e)))?;

        if value.is_undefined() || value.is_null() {
            return Err(ProviderError::NotDetected("window.concordium is not defined".to_string()));
        }

        let inner = value
            .dyn_into::<js_sys::Object>()
            .map_err(|_| ProviderError::NotDetected("window.concordium is not an object".to_string()))?;

        log::info!("Concordium wallet provider detected");
        Ok(ConcordiumProvider::new(inner))
    }
}
