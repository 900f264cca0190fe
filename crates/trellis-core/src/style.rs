//! Box model and effect styling.

use crate::paint::{ColorValue, PickerValue};
use serde::{Deserialize, Serialize};

/// Visibility toggle. A hidden element short-circuits style generation to a
/// single display suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Overflow behavior of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    Visible,
    Hidden,
    Scroll,
}

impl Overflow {
    pub fn as_css(&self) -> &'static str {
        match self {
            Overflow::Visible => "visible",
            Overflow::Hidden => "hidden",
            Overflow::Scroll => "scroll",
        }
    }
}

/// Four independently optional box sides, in pixels. Used for padding,
/// margin, and border widths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoxSides {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl BoxSides {
    /// All four sides set to zero.
    pub fn zero() -> Self {
        Self::uniform(0.0)
    }

    /// All four sides set to the same value.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: Some(value),
            right: Some(value),
            bottom: Some(value),
            left: Some(value),
        }
    }
}

/// Four independently optional corner radii, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CornerRadius {
    pub top_left: Option<f64>,
    pub top_right: Option<f64>,
    pub bottom_right: Option<f64>,
    pub bottom_left: Option<f64>,
}

impl CornerRadius {
    /// All four corners set to zero.
    pub fn zero() -> Self {
        Self {
            top_left: Some(0.0),
            top_right: Some(0.0),
            bottom_right: Some(0.0),
            bottom_left: Some(0.0),
        }
    }
}

/// Whether a shadow is drawn inside or outside the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowPosition {
    Inner,
    Outer,
}

/// One drop/inner shadow. Offsets are in pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowConfig {
    pub position: ShadowPosition,
    pub color: ColorValue,
    pub x: f64,
    pub y: f64,
    pub blur: f64,
    pub spread: f64,
}

/// Full style payload for containers and text elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    pub padding: BoxSides,
    pub margin: BoxSides,
    pub opacity: Option<f64>,
    pub visible: Visibility,
    pub overflow: Overflow,
    pub background: Option<PickerValue>,
    pub border_color: Option<ColorValue>,
    pub border_radius: CornerRadius,
    pub border_width: BoxSides,
    pub shadows: Vec<ShadowConfig>,
    pub z_index: Option<f64>,
    pub rotation: Option<f64>,
}

impl StyleConfig {
    /// The initial style a freshly dropped container or text element gets.
    pub fn initial() -> Self {
        Self {
            padding: BoxSides::zero(),
            margin: BoxSides::zero(),
            opacity: Some(100.0),
            visible: Visibility::Visible,
            overflow: Overflow::Visible,
            background: None,
            border_color: None,
            border_radius: CornerRadius::zero(),
            border_width: BoxSides::zero(),
            shadows: Vec::new(),
            z_index: None,
            rotation: None,
        }
    }
}

/// Restricted style payload for image elements: no background, overflow, or
/// padding/margin. The restriction is schema-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyleConfig {
    pub opacity: Option<f64>,
    pub visible: Visibility,
    pub border_color: Option<ColorValue>,
    pub border_radius: CornerRadius,
    pub border_width: BoxSides,
    pub shadows: Vec<ShadowConfig>,
    pub z_index: Option<f64>,
    pub rotation: Option<f64>,
}

impl ImageStyleConfig {
    /// The initial style a freshly dropped image element gets.
    pub fn initial() -> Self {
        Self {
            opacity: Some(100.0),
            visible: Visibility::Visible,
            border_color: None,
            border_radius: CornerRadius::zero(),
            border_width: BoxSides::zero(),
            shadows: Vec::new(),
            z_index: None,
            rotation: None,
        }
    }
}

/// Minimal style payload for icon elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconStyleConfig {
    pub opacity: Option<f64>,
    pub visible: Visibility,
    pub shadows: Vec<ShadowConfig>,
    pub z_index: Option<f64>,
    pub rotation: Option<f64>,
}

impl IconStyleConfig {
    /// The initial style a freshly dropped icon element gets.
    pub fn initial() -> Self {
        Self {
            opacity: Some(100.0),
            visible: Visibility::Visible,
            shadows: Vec::new(),
            z_index: None,
            rotation: None,
        }
    }
}
