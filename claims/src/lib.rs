//! Domain core for the Base Claim mini-app.
//!
//! This crate owns everything that is not DOM glue: the campaign model and
//! in-memory store, the hold-to-claim gesture and its timer driver, wallet
//! sign-in with its error taxonomy, image ingestion, and app configuration.
//! It has no Leptos or `web-sys` dependency so all of it is testable natively;
//! the browser crate supplies concrete providers, schedulers and hosts.

pub mod address;
pub mod campaign;
pub mod clock;
pub mod config;
pub mod draft;
pub mod fees;
pub mod gesture;
pub mod hold;
pub mod host;
pub mod image;
pub mod store;
pub mod wallet;

#[cfg(test)]
mod test_support;

pub use address::{Address, AddressError};
pub use campaign::{Campaign, ClaimMetrics, Phase};
pub use clock::{Clock, SystemClock};
pub use config::{AppConfig, ConfigError};
pub use draft::{CampaignDraft, DraftIssue};
pub use gesture::{ClaimGesture, GesturePhase, HOLD_DURATION_MS, SAMPLE_PERIOD_MS, Sample};
pub use hold::{HoldController, Scheduler};
pub use host::{HostContainer, ReadyOnce};
pub use image::{ImageData, ImageError, MAX_IMAGE_BYTES};
pub use store::{CampaignStore, ClaimError, ClaimOutcome, ClaimPosition, ClaimStatus, PublishError};
pub use wallet::{
    ProviderError, ProviderResolver, SignInError, SignedInUser, WalletProvider, WalletSession, personal_sign_payload,
};
