//! Container layout modes (flex and grid).

use serde::{Deserialize, Serialize};

/// Main-axis direction of a flex container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

impl FlexDirection {
    /// CSS `flex-direction` keyword, honoring the reverse flag.
    pub fn as_css(&self, reverse: bool) -> &'static str {
        match (self, reverse) {
            (FlexDirection::Row, false) => "row",
            (FlexDirection::Row, true) => "row-reverse",
            (FlexDirection::Column, false) => "column",
            (FlexDirection::Column, true) => "column-reverse",
        }
    }
}

/// Cross-axis alignment of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    Center,
    FlexEnd,
}

impl AlignItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignItems::FlexStart => "flex-start",
            AlignItems::Center => "center",
            AlignItems::FlexEnd => "flex-end",
        }
    }
}

/// Main-axis distribution of a flex container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Stretch,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::Center => "center",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
            JustifyContent::Stretch => "stretch",
        }
    }
}

/// Flex wrapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexWrap {
    Nowrap,
    Wrap,
}

impl FlexWrap {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexWrap::Nowrap => "nowrap",
            FlexWrap::Wrap => "wrap",
        }
    }
}

/// Flex container configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub direction_reverse: Option<bool>,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub wrap: FlexWrap,
    pub gap: f64,
}

/// Grid container configuration. Both template axes divide the container
/// into equal fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub columns: u32,
    pub rows: u32,
    pub gap: Option<f64>,
    pub align_items: AlignItems,
}

/// Layout mode of a container element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LayoutConfig {
    Flex(FlexLayout),
    Grid(GridLayout),
}
