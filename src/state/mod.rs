//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `create`, `ui`) so components depend on
//! small focused models. Campaign data itself is a `claims::CampaignStore`
//! provided directly as a signal by the app shell.

pub mod auth;
pub mod create;
pub mod ui;
