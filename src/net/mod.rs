//! Browser boundary modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provider` adapts the injected EIP-1193 wallet object to the `claims`
//! wallet traits, and `host` talks to the embedding host frame.

pub mod host;
pub mod provider;
