//! Style computation for trellis documents.
//!
//! Turns an element's effective configuration (plus its parent's, when
//! sizing needs it) into a flat map of resolved CSS declarations:
//! - Fill rendering (solid colors, gradients, image fills)
//! - Filter-chain composition
//! - Size resolution under flex/grid containment
//! - Box model, effects, typography per element-type variant
//! - The per-device render pass producing a mobile baseline plus
//!   tablet/desktop structural diffs

mod effects;
mod element;
mod filter;
mod map;
mod paint;
mod pass;
mod size;

pub use effects::{box_styles, icon_box_styles, image_box_styles};
pub use element::element_style;
pub use filter::filter_style;
pub use map::StyleMap;
pub use paint::{color_value, picker_value};
pub use pass::{compute_all_styles, compute_device_styles, DeviceStyles};
pub use size::{min_max_style, size_style};
