//! Core types for the trellis responsive layout engine.
//!
//! This crate provides the configuration schema shared by all other
//! trellis crates:
//! - Per-element layout configuration (one variant per element type)
//! - The three-tier responsive configuration (desktop baseline plus
//!   optional tablet/mobile partial overrides)
//! - Size, position, layout, style, paint, filter, and typography
//!   sub-configurations
//! - Device classes and their breakpoint metadata
//! - Error types

pub mod data;
pub mod device;
pub mod element;
pub mod errors;
pub mod filter;
pub mod image;
pub mod layout;
pub mod paint;
pub mod position;
pub mod size;
pub mod style;
pub mod text;

pub use data::*;
pub use device::*;
pub use element::*;
pub use errors::*;
pub use filter::*;
pub use image::*;
pub use layout::*;
pub use paint::*;
pub use position::*;
pub use size::*;
pub use style::*;
pub use text::*;
