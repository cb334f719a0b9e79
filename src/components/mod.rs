//! Reusable UI components shared by the pages.

pub mod campaign_card;
pub mod hold_button;
pub mod phase_editor;
pub mod progress_bar;
pub mod sign_in_button;
pub mod tab_bar;
