//! Box model and effect styling per element-type subset.
//!
//! Containers and text elements get the full set; image and icon elements
//! get the schema-enforced restricted subsets (no background or
//! padding/margin for images, shadows/opacity/rotation only for icons).

use crate::map::{num, px, StyleMap};
use crate::paint::{color_value, picker_value};
use trellis_core::{
    BoxSides, CornerRadius, IconStyleConfig, ImageStyleConfig, ShadowConfig, ShadowPosition,
    StyleConfig,
};

/// Full box/effect styling for containers and text elements.
pub fn box_styles(config: &StyleConfig, style: &mut StyleMap) {
    sides(&config.padding, "padding", style);
    sides(&config.margin, "margin", style);
    style.set("opacity", num(config.opacity.unwrap_or(100.0) / 100.0));
    style.set("overflow", config.overflow.as_css());
    style.set_opt("background", config.background.as_ref().map(picker_value));
    corners(&config.border_radius, style);
    border_widths(&config.border_width, style);
    style.set_opt(
        "border-color",
        config.border_color.as_ref().map(color_value),
    );
    style.set_opt("box-shadow", shadow_list(&config.shadows));
    set_nonzero_number(style, "z-index", config.z_index);
    style.set_opt("transform", rotation(config.rotation));
}

/// Restricted styling for image elements.
pub fn image_box_styles(config: &ImageStyleConfig, style: &mut StyleMap) {
    style.set("opacity", num(config.opacity.unwrap_or(100.0) / 100.0));
    corners(&config.border_radius, style);
    border_widths(&config.border_width, style);
    style.set_opt(
        "border-color",
        config.border_color.as_ref().map(color_value),
    );
    set_nonzero_number(style, "z-index", config.z_index);
    style.set_opt("box-shadow", shadow_list(&config.shadows));
    style.set_opt("transform", rotation(config.rotation));
}

/// Minimal styling for icon elements.
pub fn icon_box_styles(config: &IconStyleConfig, style: &mut StyleMap) {
    style.set("opacity", num(config.opacity.unwrap_or(100.0) / 100.0));
    set_nonzero_number(style, "z-index", config.z_index);
    style.set_opt("box-shadow", shadow_list(&config.shadows));
    style.set_opt("transform", rotation(config.rotation));
}

/// Per-side box declarations. A present side emits even at zero; an absent
/// side emits nothing.
fn sides(config: &BoxSides, property: &str, style: &mut StyleMap) {
    let mut side = |edge: &str, value: Option<f64>| {
        style.set_opt(&format!("{property}-{edge}"), value.map(px));
    };
    side("top", config.top);
    side("right", config.right);
    side("bottom", config.bottom);
    side("left", config.left);
}

/// Corner radii emit only when non-zero; a configured zero is treated the
/// same as unset.
fn corners(config: &CornerRadius, style: &mut StyleMap) {
    set_nonzero_px(style, "border-top-left-radius", config.top_left);
    set_nonzero_px(style, "border-top-right-radius", config.top_right);
    set_nonzero_px(style, "border-bottom-right-radius", config.bottom_right);
    set_nonzero_px(style, "border-bottom-left-radius", config.bottom_left);
}

/// Border widths emit only when non-zero, like corner radii.
fn border_widths(config: &BoxSides, style: &mut StyleMap) {
    set_nonzero_px(style, "border-top-width", config.top);
    set_nonzero_px(style, "border-right-width", config.right);
    set_nonzero_px(style, "border-bottom-width", config.bottom);
    set_nonzero_px(style, "border-left-width", config.left);
}

/// Render the shadow list as one comma-joined declaration, preserving input
/// order. Inner shadows get the inset marker.
fn shadow_list(shadows: &[ShadowConfig]) -> Option<String> {
    if shadows.is_empty() {
        return None;
    }
    let rendered: Vec<String> = shadows
        .iter()
        .map(|shadow| {
            let inset = match shadow.position {
                ShadowPosition::Inner => "inset ",
                ShadowPosition::Outer => "",
            };
            format!(
                "{}{} {} {} {} {}",
                inset,
                px(shadow.x),
                px(shadow.y),
                px(shadow.blur),
                px(shadow.spread),
                color_value(&shadow.color)
            )
        })
        .collect();
    Some(rendered.join(", "))
}

fn rotation(rotation: Option<f64>) -> Option<String> {
    match rotation {
        Some(degrees) if degrees != 0.0 => Some(format!("rotate({}deg)", num(degrees))),
        _ => None,
    }
}

fn set_nonzero_px(style: &mut StyleMap, property: &str, value: Option<f64>) {
    if let Some(value) = value {
        if value != 0.0 {
            style.set(property, px(value));
        }
    }
}

fn set_nonzero_number(style: &mut StyleMap, property: &str, value: Option<f64>) {
    if let Some(value) = value {
        if value != 0.0 {
            style.set(property, num(value));
        }
    }
}
