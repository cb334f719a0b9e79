//! Browser helpers shared by pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module hides one browser facility behind a plain Rust API and has an
//! inert fallback for native test builds.

pub mod file;
pub mod scheduler;
