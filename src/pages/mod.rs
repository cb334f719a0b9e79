//! Top-level views rendered by the app shell.

pub mod campaign_detail;
pub mod create;
pub mod explore;
pub mod profile;
pub mod sign_in;
