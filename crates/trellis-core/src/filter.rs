//! Visual filter configuration.
//!
//! Every parameter is independently optional: an absent key means "do not
//! apply this function", not "apply at zero". `Some(0.0)` and `None` must
//! stay distinguishable all the way to the rendered filter chain.

use serde::{Deserialize, Serialize};

/// CSS blend mode keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
}

impl BlendMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }
}

/// Sparse set of filter parameters. Percent-scaled parameters use the 0-200
/// builder range (0-100 for blur and sepia), hue is in degrees.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    pub contrast: Option<f64>,
    pub blending: Option<BlendMode>,
    pub blur: Option<f64>,
    pub bg_blur: Option<f64>,
    pub brightness: Option<f64>,
    pub grayscale: Option<f64>,
    pub hue: Option<f64>,
    pub invert: Option<f64>,
    pub saturate: Option<f64>,
    pub sepia: Option<f64>,
}

impl FilterConfig {
    /// Whether no parameter is set at all.
    pub fn is_empty(&self) -> bool {
        self == &FilterConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_survives_roundtrip() {
        let config: FilterConfig =
            serde_json::from_str(r#"{"contrast":0,"bgBlur":12}"#).unwrap();
        assert_eq!(config.contrast, Some(0.0));
        assert_eq!(config.bg_blur, Some(12.0));
        assert_eq!(config.blur, None);
    }

    #[test]
    fn test_empty() {
        let config: FilterConfig = serde_json::from_str("{}").unwrap();
        assert!(config.is_empty());
        assert!(!FilterConfig {
            sepia: Some(0.0),
            ..Default::default()
        }
        .is_empty());
    }
}
