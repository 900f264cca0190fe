//! Paint values: solid colors, gradients, and image fills.

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    /// Parse a hex color string (e.g. "#FF5733" or "FF5733").
    ///
    /// The builder's picker emits `#rrggbb`; the shorthand `#rgb` and
    /// `#rrggbbaa` forms are tolerated, with the alpha byte ignored since
    /// opacity is carried separately on the 0-100 scale.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()?;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()?;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()?;
                Some(Self {
                    r: r * 17,
                    g: g * 17,
                    b: b * 17,
                })
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b })
            }
            _ => None,
        }
    }
}

/// A solid color with opacity on the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorValue {
    pub color: String,
    pub opacity: f64,
}

impl ColorValue {
    pub fn new(color: impl Into<String>, opacity: f64) -> Self {
        Self {
            color: color.into(),
            opacity,
        }
    }

    /// Opaque color from a hex string.
    pub fn opaque(color: impl Into<String>) -> Self {
        Self::new(color, 100.0)
    }
}

/// One stop of a gradient fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: String,
    /// Position along the gradient, 0-100.
    pub position: f64,
    /// Opacity of this stop, 0-100.
    pub opacity: f64,
}

/// Gradient shape. Linear gradients carry an angle in degrees; radial
/// gradients render as circles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "gradientType", rename_all = "lowercase")]
pub enum GradientKind {
    Linear { angle: f64 },
    Radial,
}

/// A gradient fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientValue {
    #[serde(flatten)]
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
}

/// Background sizing for image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSize {
    Cover,
    Contain,
}

impl BackgroundSize {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundSize::Cover => "cover",
            BackgroundSize::Contain => "contain",
        }
    }
}

/// Background repeat mode for image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

impl BackgroundRepeat {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundRepeat::NoRepeat => "no-repeat",
            BackgroundRepeat::Repeat => "repeat",
            BackgroundRepeat::RepeatX => "repeat-x",
            BackgroundRepeat::RepeatY => "repeat-y",
        }
    }
}

/// Background anchor position for image fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPosition {
    Top,
    Right,
    Left,
    Bottom,
    Center,
}

impl BackgroundPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundPosition::Top => "top",
            BackgroundPosition::Right => "right",
            BackgroundPosition::Left => "left",
            BackgroundPosition::Bottom => "bottom",
            BackgroundPosition::Center => "center",
        }
    }
}

/// An image fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageValue {
    pub url: String,
    pub background_size: BackgroundSize,
    pub background_repeat: BackgroundRepeat,
    pub background_position: BackgroundPosition,
}

/// A paint source picked in the builder: solid color, gradient, or image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PickerValue {
    Color(ColorValue),
    Gradient(GradientValue),
    Image(ImageValue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            Rgb::from_hex("#B3E1FF"),
            Some(Rgb {
                r: 0xB3,
                g: 0xE1,
                b: 0xFF
            })
        );
        assert_eq!(Rgb::from_hex("000000"), Some(Rgb::BLACK));
        assert_eq!(Rgb::from_hex("#fff"), Some(Rgb::WHITE));
        assert_eq!(
            Rgb::from_hex("#11223344"),
            Some(Rgb {
                r: 0x11,
                g: 0x22,
                b: 0x33
            })
        );
        assert_eq!(Rgb::from_hex("#12"), None);
        assert_eq!(Rgb::from_hex("not-a-color"), None);
    }

    #[test]
    fn test_picker_wire_shape() {
        let color: PickerValue =
            serde_json::from_str(r##"{"type":"color","color":"#ffffff","opacity":50}"##).unwrap();
        assert_eq!(
            color,
            PickerValue::Color(ColorValue::new("#ffffff", 50.0))
        );

        let gradient: PickerValue = serde_json::from_str(
            r##"{"type":"gradient","gradientType":"linear","angle":90,"stops":[{"color":"#000000","position":0,"opacity":100}]}"##,
        )
        .unwrap();
        match gradient {
            PickerValue::Gradient(value) => {
                assert_eq!(value.kind, GradientKind::Linear { angle: 90.0 });
                assert_eq!(value.stops.len(), 1);
            }
            other => panic!("expected gradient, got {other:?}"),
        }

        let image: PickerValue = serde_json::from_str(
            r#"{"type":"image","url":"https://example.com/bg.png","backgroundSize":"cover","backgroundRepeat":"no-repeat","backgroundPosition":"center"}"#,
        )
        .unwrap();
        match image {
            PickerValue::Image(value) => {
                assert_eq!(value.background_repeat, BackgroundRepeat::NoRepeat)
            }
            other => panic!("expected image, got {other:?}"),
        }
    }
}
