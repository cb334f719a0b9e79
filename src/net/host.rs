//! Embedding host frame.
//!
//! When the app runs inside a host client's iframe, the host shows a splash
//! screen until it receives the ready message posted here. Outside an iframe,
//! or off the browser, notifying is a no-op.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use claims::HostContainer;

/// Message posted to the parent frame once the first view is mounted.
pub fn ready_message() -> serde_json::Value {
    serde_json::json!({ "type": "ready" })
}

/// The parent window of the iframe this app runs in, if any.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParentFrameHost;

impl HostContainer for ParentFrameHost {
    fn notify_ready(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let Ok(Some(parent)) = window.parent() else {
                return;
            };
            if js_sys::Object::is(parent.as_ref(), window.as_ref()) {
                log::debug!("not embedded; skipping ready message");
                return;
            }
            let Ok(message) = js_sys::JSON::parse(&ready_message().to_string()) else {
                return;
            };
            if let Err(e) = parent.post_message(&message, "*") {
                log::warn!("ready message failed: {e:?}");
            }
        }
    }
}
