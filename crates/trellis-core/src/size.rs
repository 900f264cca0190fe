//! Size configuration: per-axis sizing modes and min/max constraints.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A physical sizing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    /// The CSS property the axis resolves into.
    pub fn css_property(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    /// The viewport unit for this axis.
    pub fn viewport_unit(&self) -> &'static str {
        match self {
            Axis::Width => "vw",
            Axis::Height => "vh",
        }
    }
}

/// Sizing mode for one axis of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SizeItemConfig {
    /// Grow to share the parent's remaining space, weighted by `value`.
    Fill { value: Option<f64> },
    /// Absolute size in pixels. A missing value emits nothing.
    Fixed { value: Option<f64> },
    /// Percentage of the sizing context's box.
    Relative { value: Option<f64> },
    /// Viewport units (vw for width, vh for height).
    Viewport { value: Option<f64> },
    /// Intrinsic sizing.
    Auto,
}

impl SizeItemConfig {
    /// The initial configuration a freshly selected sizing mode gets in the
    /// builder.
    pub fn initial(kind: SizeKind) -> Self {
        match kind {
            SizeKind::Auto => SizeItemConfig::Auto,
            SizeKind::Fill => SizeItemConfig::Fill { value: Some(1.0) },
            SizeKind::Relative => SizeItemConfig::Relative { value: Some(100.0) },
            SizeKind::Fixed => SizeItemConfig::Fixed { value: Some(400.0) },
            SizeKind::Viewport => SizeItemConfig::Viewport { value: Some(100.0) },
        }
    }
}

/// Discriminant-only view of [`SizeItemConfig`], used to pick initial values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Fill,
    Fixed,
    Relative,
    Viewport,
    Auto,
}

/// Kind of a min/max constraint. Width constraints are always measured in
/// width units and height constraints in height units, regardless of which
/// axis triggered the lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MinMaxKind {
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
}

impl MinMaxKind {
    /// The CSS property the constraint resolves into.
    pub fn css_property(&self) -> &'static str {
        match self {
            MinMaxKind::MinWidth => "min-width",
            MinMaxKind::MinHeight => "min-height",
            MinMaxKind::MaxWidth => "max-width",
            MinMaxKind::MaxHeight => "max-height",
        }
    }

    /// The axis the constraint's size is measured against.
    pub fn axis(&self) -> Axis {
        match self {
            MinMaxKind::MinWidth | MinMaxKind::MaxWidth => Axis::Width,
            MinMaxKind::MinHeight | MinMaxKind::MaxHeight => Axis::Height,
        }
    }
}

/// A single min/max constraint entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxConstraint {
    #[serde(rename = "type")]
    pub kind: MinMaxKind,
    pub size: SizeItemConfig,
}

/// Full size configuration for an element: both axes plus an ordered list of
/// min/max constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeConfig {
    pub width: SizeItemConfig,
    pub height: SizeItemConfig,
    pub min_max: SmallVec<[MinMaxConstraint; 2]>,
}

impl SizeConfig {
    /// Size config with the given axes and no constraints.
    pub fn new(width: SizeItemConfig, height: SizeItemConfig) -> Self {
        Self {
            width,
            height,
            min_max: SmallVec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_values() {
        assert_eq!(
            SizeItemConfig::initial(SizeKind::Fixed),
            SizeItemConfig::Fixed { value: Some(400.0) }
        );
        assert_eq!(SizeItemConfig::initial(SizeKind::Auto), SizeItemConfig::Auto);
        assert_eq!(
            SizeItemConfig::initial(SizeKind::Fill),
            SizeItemConfig::Fill { value: Some(1.0) }
        );
    }

    #[test]
    fn test_constraint_axis() {
        assert_eq!(MinMaxKind::MinWidth.axis(), Axis::Width);
        assert_eq!(MinMaxKind::MaxHeight.axis(), Axis::Height);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{"width":{"type":"relative","value":100},"height":{"type":"auto"},"minMax":[{"type":"min-width","size":{"type":"fixed","value":320}}]}"#;
        let config: SizeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.width, SizeItemConfig::Relative { value: Some(100.0) });
        assert_eq!(config.height, SizeItemConfig::Auto);
        assert_eq!(config.min_max[0].kind, MinMaxKind::MinWidth);
    }
}
