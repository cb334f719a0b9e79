//! Injected wallet provider (`window.ethereum`) adapter.
//!
//! Client-side (csr): real calls through the provider's `request` entry point.
//! Native builds (tests): the resolver finds nothing, so sign-in reports the
//! provider as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Rejections carry an EIP-1193 error object. Its numeric `code` is read here
//! and nowhere else; everything past this module sees `ProviderError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use async_trait::async_trait;
use claims::{Address, ProviderError, ProviderResolver, WalletProvider};

#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast as _, JsValue};

/// Finds the wallet injected into the page by a browser extension.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWallet;

impl ProviderResolver for BrowserWallet {
    type Provider = InjectedProvider;

    fn resolve(&self) -> Option<InjectedProvider> {
        #[cfg(feature = "csr")]
        {
            let ethereum = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum")).ok()?;
            if ethereum.is_undefined() || ethereum.is_null() {
                log::warn!("no injected wallet provider found");
                return None;
            }
            Some(InjectedProvider { ethereum })
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}

/// Handle to the injected provider object.
pub struct InjectedProvider {
    #[cfg(feature = "csr")]
    ethereum: JsValue,
}

#[cfg(feature = "csr")]
impl InjectedProvider {
    async fn request(&self, method: &str, params: &js_sys::Array) -> Result<JsValue, ProviderError> {
        let args = js_sys::Object::new();
        js_sys::Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(classify)?;
        js_sys::Reflect::set(&args, &JsValue::from_str("params"), params).map_err(classify)?;
        self.call_method("request", &args).await
    }

    async fn call_method(&self, name: &str, arg: &JsValue) -> Result<JsValue, ProviderError> {
        let function = js_sys::Reflect::get(&self.ethereum, &JsValue::from_str(name))
            .map_err(classify)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| ProviderError::from_rpc(None, format!("provider has no {name} method")))?;
        let returned = function.call1(&self.ethereum, arg).map_err(classify)?;
        let promise = js_sys::Promise::resolve(&returned);
        wasm_bindgen_futures::JsFuture::from(promise).await.map_err(classify)
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    async fn request_addresses(&self) -> Result<Vec<String>, ProviderError> {
        #[cfg(feature = "csr")]
        {
            let accounts = self.request("eth_requestAccounts", &js_sys::Array::new()).await?;
            Ok(string_list(&accounts))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn legacy_request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        #[cfg(feature = "csr")]
        {
            let accounts = self.call_method("enable", &JsValue::UNDEFINED).await?;
            Ok(string_list(&accounts))
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn sign_message(&self, account: &Address, message: &str) -> Result<String, ProviderError> {
        #[cfg(feature = "csr")]
        {
            let params = js_sys::Array::of2(
                &JsValue::from_str(&claims::personal_sign_payload(message)),
                &JsValue::from_str(&account.to_string()),
            );
            let signature = self.request("personal_sign", &params).await?;
            signature
                .as_string()
                .ok_or_else(|| ProviderError::from_rpc(None, "signature was not a string"))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (account, message);
            Err(unavailable())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ProviderError {
    ProviderError::from_rpc(None, "wallet provider not available outside the browser")
}

/// Turn a rejected provider call into a classified error.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation)]
fn classify(err: JsValue) -> ProviderError {
    let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|c| c as i64);
    let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "wallet request failed".to_owned());
    ProviderError::from_rpc(code, message)
}

#[cfg(feature = "csr")]
fn string_list(value: &JsValue) -> Vec<String> {
    if !js_sys::Array::is_array(value) {
        return Vec::new();
    }
    js_sys::Array::from(value).iter().filter_map(|v| v.as_string()).collect()
}
