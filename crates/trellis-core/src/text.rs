//! Typography configuration.

use crate::paint::ColorValue;
use serde::{Deserialize, Serialize};

/// Named font weight, combining weight and italic into one picker value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextWeight {
    Thin,
    ThinItalic,
    ExtraLight,
    ExtraLightItalic,
    Light,
    LightItalic,
    Regular,
    Italic,
    Medium,
    MediumItalic,
    Semibold,
    SemiboldItalic,
    Bold,
    BoldItalic,
    ExtraBold,
    ExtraBoldItalic,
    Black,
    BlackItalic,
}

impl TextWeight {
    /// Numeric CSS font weight.
    pub fn css_weight(&self) -> u16 {
        match self {
            TextWeight::Thin | TextWeight::ThinItalic => 100,
            TextWeight::ExtraLight | TextWeight::ExtraLightItalic => 200,
            TextWeight::Light | TextWeight::LightItalic => 300,
            TextWeight::Regular | TextWeight::Italic => 400,
            TextWeight::Medium | TextWeight::MediumItalic => 500,
            TextWeight::Semibold | TextWeight::SemiboldItalic => 600,
            TextWeight::Bold | TextWeight::BoldItalic => 700,
            TextWeight::ExtraBold | TextWeight::ExtraBoldItalic => 800,
            TextWeight::Black | TextWeight::BlackItalic => 900,
        }
    }

    /// Whether the weight renders italic.
    pub fn is_italic(&self) -> bool {
        matches!(
            self,
            TextWeight::ThinItalic
                | TextWeight::ExtraLightItalic
                | TextWeight::LightItalic
                | TextWeight::Italic
                | TextWeight::MediumItalic
                | TextWeight::SemiboldItalic
                | TextWeight::BoldItalic
                | TextWeight::ExtraBoldItalic
                | TextWeight::BlackItalic
        )
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Text case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }
}

/// Text decoration line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextDecoration {
    None,
    Underline,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

/// Typography settings of a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextConfig {
    /// Font size in pixels.
    pub font_size: f64,
    /// Unitless line-height multiplier.
    pub line_height: f64,
    /// Letter spacing in pixels.
    pub letter_spacing: f64,
    pub text_align: TextAlign,
    pub font_weight: TextWeight,
    pub font_family: String,
    pub color: ColorValue,
    pub text_transform: TextTransform,
    pub text_decoration: TextDecoration,
}

impl TextConfig {
    /// The initial typography a freshly dropped text element gets.
    pub fn initial() -> Self {
        Self {
            font_size: 16.0,
            line_height: 1.0,
            letter_spacing: 0.0,
            text_align: TextAlign::Left,
            font_weight: TextWeight::Regular,
            font_family: "Inter".to_string(),
            color: ColorValue::opaque("#000000"),
            text_transform: TextTransform::None,
            text_decoration: TextDecoration::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_mapping() {
        assert_eq!(TextWeight::Regular.css_weight(), 400);
        assert!(!TextWeight::Regular.is_italic());
        assert_eq!(TextWeight::Italic.css_weight(), 400);
        assert!(TextWeight::Italic.is_italic());
        assert_eq!(TextWeight::ExtraBoldItalic.css_weight(), 800);
        assert!(TextWeight::ExtraBoldItalic.is_italic());
        assert_eq!(TextWeight::Black.css_weight(), 900);
    }

    #[test]
    fn test_weight_wire_names() {
        let weight: TextWeight = serde_json::from_str("\"extra-light-italic\"").unwrap();
        assert_eq!(weight, TextWeight::ExtraLightItalic);
        let weight: TextWeight = serde_json::from_str("\"semibold\"").unwrap();
        assert_eq!(weight, TextWeight::Semibold);
    }
}
