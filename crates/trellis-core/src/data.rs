//! Type-specific element content payloads.
//!
//! The engine never reads these; they complete the document schema the
//! rendering layer consumes alongside the resolved style maps.

use serde::{Deserialize, Serialize};

/// Content of a text element (HTML fragment).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextData {
    pub text: String,
}

impl TextData {
    pub fn initial() -> Self {
        Self {
            text: "Enter your text here".to_string(),
        }
    }
}

/// Content of an image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    pub url: String,
}

/// Content of an icon element (a named icon from the icon set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconData {
    pub icon: String,
}

/// Per-element content payload, keyed by element type. Containers carry no
/// content of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementData {
    Text(TextData),
    Image(ImageData),
    Icon(IconData),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let data: ElementData =
            serde_json::from_str(r#"{"type":"icon","icon":"home"}"#).unwrap();
        assert_eq!(
            data,
            ElementData::Icon(IconData {
                icon: "home".to_string()
            })
        );
    }
}
