//! The per-element style generator.

use crate::effects::{box_styles, icon_box_styles, image_box_styles};
use crate::filter::filter_style;
use crate::map::{num, px, StyleMap};
use crate::paint::color_value;
use crate::size::{min_max_style, size_style};
use trellis_core::{
    Axis, ElementLayoutConfig, ImageConfig, LayoutConfig, PositionConfig, PositionOffsets,
    TextConfig,
};

/// Generate the flat resolved style map for one element at one device
/// class.
///
/// `parent` is the parent's effective configuration for the same device
/// class (none at the root); only fill sizing consults it. A hidden
/// element short-circuits to a single display suppression. The filter
/// composer's output merges last so its declarations close the map.
pub fn element_style(
    config: &ElementLayoutConfig,
    parent: Option<&ElementLayoutConfig>,
) -> StyleMap {
    if config.is_hidden() {
        let mut style = StyleMap::new();
        style.set("display", "none");
        return style;
    }

    let mut style = StyleMap::new();
    size_style(&config.size().width, Axis::Width, parent, &mut style);
    size_style(&config.size().height, Axis::Height, parent, &mut style);
    min_max_style(&config.size().min_max, &mut style);
    position_style(config.position(), &mut style);

    match config {
        ElementLayoutConfig::Container(container) => {
            layout_style(&container.layout, &mut style);
            box_styles(&container.style, &mut style);
        }
        ElementLayoutConfig::Text(text) => {
            text_styles(&text.text, &mut style);
            box_styles(&text.style, &mut style);
            style.set("display", "block");
        }
        ElementLayoutConfig::Image(image) => {
            image_content_styles(&image.image, &mut style);
            image_box_styles(&image.style, &mut style);
            style.set("display", "block");
        }
        ElementLayoutConfig::Icon(icon) => {
            style.set("color", color_value(&icon.text.color));
            icon_box_styles(&icon.style, &mut style);
            style.set("display", "block");
        }
    }

    if let Some(filter) = config.filter() {
        style.merge(filter_style(filter));
    }

    style
}

fn position_style(config: &PositionConfig, style: &mut StyleMap) {
    match config {
        PositionConfig::Relative => style.set("position", "relative"),
        PositionConfig::Absolute(offsets) => {
            style.set("position", "absolute");
            offset_styles(offsets, style);
        }
        PositionConfig::Fixed(offsets) => {
            style.set("position", "fixed");
            offset_styles(offsets, style);
        }
        PositionConfig::Sticky(offsets) => {
            style.set("position", "sticky");
            offset_styles(offsets, style);
        }
    }
}

/// Offsets pass through verbatim when present.
fn offset_styles(offsets: &PositionOffsets, style: &mut StyleMap) {
    style.set_opt("top", offsets.top.map(px));
    style.set_opt("bottom", offsets.bottom.map(px));
    style.set_opt("left", offsets.left.map(px));
    style.set_opt("right", offsets.right.map(px));
}

/// Display properties of a container's layout mode.
fn layout_style(config: &LayoutConfig, style: &mut StyleMap) {
    match config {
        LayoutConfig::Flex(flex) => {
            let reverse = flex.direction_reverse.unwrap_or(false);
            style.set("display", "flex");
            style.set("flex-direction", flex.direction.as_css(reverse));
            style.set("align-items", flex.align_items.as_css());
            style.set("justify-content", flex.justify_content.as_css());
            style.set("flex-wrap", flex.wrap.as_css());
            if flex.gap != 0.0 {
                style.set("gap", px(flex.gap));
            }
        }
        LayoutConfig::Grid(grid) => {
            style.set("display", "grid");
            style.set(
                "grid-template-columns",
                format!("repeat({}, minmax(0, 1fr))", grid.columns),
            );
            style.set(
                "grid-template-rows",
                format!("repeat({}, minmax(0, 1fr))", grid.rows),
            );
            style.set("align-items", grid.align_items.as_css());
            if let Some(gap) = grid.gap {
                if gap != 0.0 {
                    style.set("gap", px(gap));
                }
            }
        }
    }
}

/// Typography declarations of a text element.
fn text_styles(config: &TextConfig, style: &mut StyleMap) {
    style.set("font-size", px(config.font_size));
    style.set("font-family", config.font_family.clone());
    style.set("line-height", num(config.line_height));
    style.set("text-align", config.text_align.as_css());
    style.set("font-weight", config.font_weight.css_weight().to_string());
    if config.font_weight.is_italic() {
        style.set("font-style", "italic");
    }
    style.set("letter-spacing", px(config.letter_spacing));
    style.set("color", color_value(&config.color));
    style.set("text-transform", config.text_transform.as_css());
    style.set("text-decoration", config.text_decoration.as_css());
}

fn image_content_styles(config: &ImageConfig, style: &mut StyleMap) {
    style.set("object-fit", config.object_fit.as_css());
    style.set("object-position", config.object_position.as_css());
}
