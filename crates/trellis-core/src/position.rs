//! Position configuration.

use serde::{Deserialize, Serialize};

/// Edge offsets for positioned elements, in pixels. Absent edges emit no
/// declaration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionOffsets {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub bottom: Option<f64>,
    pub right: Option<f64>,
}

/// Positioning scheme of an element. Relative carries no offsets; the other
/// schemes pass their offsets through verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PositionConfig {
    Relative,
    Absolute(PositionOffsets),
    Fixed(PositionOffsets),
    Sticky(PositionOffsets),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let config: PositionConfig =
            serde_json::from_str(r#"{"type":"absolute","top":10,"left":20}"#).unwrap();
        match config {
            PositionConfig::Absolute(offsets) => {
                assert_eq!(offsets.top, Some(10.0));
                assert_eq!(offsets.left, Some(20.0));
                assert_eq!(offsets.bottom, None);
            }
            other => panic!("expected absolute, got {other:?}"),
        }

        let relative: PositionConfig = serde_json::from_str(r#"{"type":"relative"}"#).unwrap();
        assert_eq!(relative, PositionConfig::Relative);
    }
}
