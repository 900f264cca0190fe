//! Image element configuration.

use serde::{Deserialize, Serialize};

/// How the image content fits its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectFit {
    Fill,
    Contain,
    Cover,
}

impl ObjectFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectFit::Fill => "fill",
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
        }
    }
}

/// Anchor of the image content within its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectPosition {
    #[serde(rename = "top left")]
    TopLeft,
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "top right")]
    TopRight,
    #[serde(rename = "left")]
    Left,
    #[serde(rename = "center")]
    Center,
    #[serde(rename = "right")]
    Right,
    #[serde(rename = "bottom left")]
    BottomLeft,
    #[serde(rename = "bottom center")]
    BottomCenter,
    #[serde(rename = "bottom right")]
    BottomRight,
}

impl ObjectPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectPosition::TopLeft => "top left",
            ObjectPosition::TopCenter => "top center",
            ObjectPosition::TopRight => "top right",
            ObjectPosition::Left => "left",
            ObjectPosition::Center => "center",
            ObjectPosition::Right => "right",
            ObjectPosition::BottomLeft => "bottom left",
            ObjectPosition::BottomCenter => "bottom center",
            ObjectPosition::BottomRight => "bottom right",
        }
    }
}

/// Content placement settings of an image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub object_fit: ObjectFit,
    pub object_position: ObjectPosition,
}

impl ImageConfig {
    /// The initial placement a freshly dropped image element gets.
    pub fn initial() -> Self {
        Self {
            object_fit: ObjectFit::Cover,
            object_position: ObjectPosition::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let config: ImageConfig =
            serde_json::from_str(r#"{"objectFit":"cover","objectPosition":"bottom right"}"#)
                .unwrap();
        assert_eq!(config.object_fit, ObjectFit::Cover);
        assert_eq!(config.object_position, ObjectPosition::BottomRight);
        assert_eq!(config.object_position.as_css(), "bottom right");
    }
}
