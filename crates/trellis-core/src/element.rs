//! Per-element layout configuration and the three-tier responsive schema.

use crate::filter::FilterConfig;
use crate::image::ImageConfig;
use crate::layout::{AlignItems, FlexDirection, FlexLayout, FlexWrap, JustifyContent, LayoutConfig};
use crate::paint::{ColorValue, PickerValue};
use crate::position::PositionConfig;
use crate::size::{SizeConfig, SizeItemConfig, SizeKind};
use crate::style::{IconStyleConfig, ImageStyleConfig, StyleConfig, Visibility};
use crate::text::TextConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Element type tag. Containers are the only elements that may own children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Container,
    Text,
    Image,
    Icon,
}

/// All placeable element types, in palette order.
pub const ELEMENT_TYPES: [ElementType; 4] = [
    ElementType::Container,
    ElementType::Text,
    ElementType::Image,
    ElementType::Icon,
];

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ElementType::Container => "container",
            ElementType::Text => "text",
            ElementType::Image => "image",
            ElementType::Icon => "icon",
        })
    }
}

/// Layout configuration of a container element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerLayout {
    pub size: SizeConfig,
    pub position: PositionConfig,
    pub layout: LayoutConfig,
    pub style: StyleConfig,
    pub filter: Option<FilterConfig>,
}

impl ContainerLayout {
    /// The initial configuration a freshly dropped container gets: a
    /// full-width, 400px-tall flex column with a translucent blue fill.
    pub fn initial() -> Self {
        Self {
            size: SizeConfig::new(
                SizeItemConfig::initial(SizeKind::Relative),
                SizeItemConfig::initial(SizeKind::Fixed),
            ),
            position: PositionConfig::Relative,
            layout: LayoutConfig::Flex(FlexLayout {
                direction: FlexDirection::Column,
                direction_reverse: None,
                align_items: AlignItems::FlexStart,
                justify_content: JustifyContent::Stretch,
                wrap: FlexWrap::Nowrap,
                gap: 0.0,
            }),
            style: StyleConfig {
                background: Some(PickerValue::Color(ColorValue::new("#B3E1FF", 50.0))),
                ..StyleConfig::initial()
            },
            filter: Some(FilterConfig::default()),
        }
    }
}

/// Layout configuration of a text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLayout {
    pub size: SizeConfig,
    pub position: PositionConfig,
    pub text: TextConfig,
    pub style: StyleConfig,
    pub filter: Option<FilterConfig>,
}

impl TextLayout {
    /// The initial configuration a freshly dropped text element gets.
    pub fn initial() -> Self {
        Self {
            size: SizeConfig::new(
                SizeItemConfig::Relative { value: Some(100.0) },
                SizeItemConfig::Auto,
            ),
            position: PositionConfig::Relative,
            text: TextConfig::initial(),
            style: StyleConfig::initial(),
            filter: Some(FilterConfig::default()),
        }
    }
}

/// Layout configuration of an image element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLayout {
    pub size: SizeConfig,
    pub position: PositionConfig,
    pub image: ImageConfig,
    pub style: ImageStyleConfig,
    pub filter: Option<FilterConfig>,
}

impl ImageLayout {
    /// The initial configuration a freshly dropped image element gets.
    pub fn initial() -> Self {
        Self {
            size: SizeConfig::new(
                SizeItemConfig::Relative { value: Some(100.0) },
                SizeItemConfig::Auto,
            ),
            position: PositionConfig::Relative,
            image: ImageConfig::initial(),
            style: ImageStyleConfig::initial(),
            filter: Some(FilterConfig::default()),
        }
    }
}

/// Tint of an icon element. Icons reuse the text color picker, so the
/// payload keeps the schema's `text` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconTextConfig {
    pub color: ColorValue,
}

/// Layout configuration of an icon element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconLayout {
    pub size: SizeConfig,
    pub position: PositionConfig,
    pub text: IconTextConfig,
    pub style: IconStyleConfig,
    pub filter: Option<FilterConfig>,
}

impl IconLayout {
    /// The initial configuration a freshly dropped icon gets: a fixed
    /// 20x20 box with a black tint.
    pub fn initial() -> Self {
        Self {
            size: SizeConfig::new(
                SizeItemConfig::Fixed { value: Some(20.0) },
                SizeItemConfig::Fixed { value: Some(20.0) },
            ),
            position: PositionConfig::Relative,
            text: IconTextConfig {
                color: ColorValue::opaque("#000000"),
            },
            style: IconStyleConfig::initial(),
            filter: Some(FilterConfig::default()),
        }
    }
}

/// Complete layout configuration of one element at one device class, keyed
/// by the element's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementLayoutConfig {
    Container(ContainerLayout),
    Text(TextLayout),
    Image(ImageLayout),
    Icon(IconLayout),
}

impl ElementLayoutConfig {
    /// The initial configuration for a freshly dropped element of the given
    /// type.
    pub fn initial(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Container => ElementLayoutConfig::Container(ContainerLayout::initial()),
            ElementType::Text => ElementLayoutConfig::Text(TextLayout::initial()),
            ElementType::Image => ElementLayoutConfig::Image(ImageLayout::initial()),
            ElementType::Icon => ElementLayoutConfig::Icon(IconLayout::initial()),
        }
    }

    /// The element's type tag.
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementLayoutConfig::Container(_) => ElementType::Container,
            ElementLayoutConfig::Text(_) => ElementType::Text,
            ElementLayoutConfig::Image(_) => ElementType::Image,
            ElementLayoutConfig::Icon(_) => ElementType::Icon,
        }
    }

    pub fn size(&self) -> &SizeConfig {
        match self {
            ElementLayoutConfig::Container(config) => &config.size,
            ElementLayoutConfig::Text(config) => &config.size,
            ElementLayoutConfig::Image(config) => &config.size,
            ElementLayoutConfig::Icon(config) => &config.size,
        }
    }

    pub fn position(&self) -> &PositionConfig {
        match self {
            ElementLayoutConfig::Container(config) => &config.position,
            ElementLayoutConfig::Text(config) => &config.position,
            ElementLayoutConfig::Image(config) => &config.position,
            ElementLayoutConfig::Icon(config) => &config.position,
        }
    }

    pub fn filter(&self) -> Option<&FilterConfig> {
        match self {
            ElementLayoutConfig::Container(config) => config.filter.as_ref(),
            ElementLayoutConfig::Text(config) => config.filter.as_ref(),
            ElementLayoutConfig::Image(config) => config.filter.as_ref(),
            ElementLayoutConfig::Icon(config) => config.filter.as_ref(),
        }
    }

    /// Whether the element's effective style marks it hidden.
    pub fn is_hidden(&self) -> bool {
        let visible = match self {
            ElementLayoutConfig::Container(config) => config.style.visible,
            ElementLayoutConfig::Text(config) => config.style.visible,
            ElementLayoutConfig::Image(config) => config.style.visible,
            ElementLayoutConfig::Icon(config) => config.style.visible,
        };
        visible == Visibility::Hidden
    }
}

/// The three-tier responsive schema for one element.
///
/// `desktop` is the complete baseline; `tablet` and `mobile` are optional
/// partial overrides of the same variant's shape, kept as raw JSON until the
/// resolver collapses them. A partial override never changes the element's
/// type tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsiveLayoutConfig {
    pub desktop: ElementLayoutConfig,
    pub tablet: Option<Value>,
    pub mobile: Option<Value>,
}

impl ResponsiveLayoutConfig {
    /// A responsive config with no overrides.
    pub fn desktop_only(desktop: ElementLayoutConfig) -> Self {
        Self {
            desktop,
            tablet: None,
            mobile: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tags() {
        for element_type in ELEMENT_TYPES {
            let config = ElementLayoutConfig::initial(element_type);
            assert_eq!(config.element_type(), element_type);
            assert!(!config.is_hidden());
        }
    }

    #[test]
    fn test_tag_round_trips_through_json() {
        let config = ElementLayoutConfig::initial(ElementType::Icon);
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["type"], "icon");
        assert_eq!(value["size"]["width"]["type"], "fixed");
        let back: ElementLayoutConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_container_initial_defaults() {
        let config = ContainerLayout::initial();
        match &config.layout {
            LayoutConfig::Flex(flex) => {
                assert_eq!(flex.direction, FlexDirection::Column);
                assert_eq!(flex.justify_content, JustifyContent::Stretch);
            }
            other => panic!("expected flex, got {other:?}"),
        }
        assert_eq!(
            config.style.background,
            Some(PickerValue::Color(ColorValue::new("#B3E1FF", 50.0)))
        );
    }
}
