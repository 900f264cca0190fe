//! Responsive merge for trellis documents.
//!
//! This crate collapses the three-tier (desktop/tablet/mobile) override
//! schema into the effective configuration for one device class:
//! - Desktop is the complete baseline and passes through unchanged
//! - Tablet deep-merges the tablet override onto the baseline
//! - Mobile deep-merges tablet, then mobile, onto the baseline

mod cascade;
mod merge;

pub use cascade::resolve_layout;
pub use merge::deep_merge;
