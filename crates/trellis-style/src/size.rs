//! Size resolution for one axis, with optional parent containment context.

use crate::map::{num, px, StyleMap};
use trellis_core::{
    Axis, ElementLayoutConfig, FlexDirection, LayoutConfig, MinMaxConstraint, SizeItemConfig,
};

/// Resolve one axis of an element's size mode into style declarations.
///
/// `parent` is the effective configuration of the element's parent for the
/// same device class; fill sizing needs it and contributes nothing without
/// it.
pub fn size_style(
    item: &SizeItemConfig,
    axis: Axis,
    parent: Option<&ElementLayoutConfig>,
    style: &mut StyleMap,
) {
    match item {
        SizeItemConfig::Auto => style.set(axis.css_property(), "auto"),
        SizeItemConfig::Fill { value } => {
            if let Some(parent) = parent {
                fill_style(*value, axis, parent, style);
            }
        }
        SizeItemConfig::Fixed { value } => {
            if let Some(value) = value {
                style.set(axis.css_property(), px(*value));
            }
        }
        SizeItemConfig::Relative { value } => {
            if let Some(value) = value {
                style.set(axis.css_property(), format!("{}%", num(*value)));
            }
        }
        SizeItemConfig::Viewport { value } => {
            if let Some(value) = value {
                style.set(
                    axis.css_property(),
                    format!("{}{}", num(*value), axis.viewport_unit()),
                );
            }
        }
    }
}

/// Fill sizing under the parent's containment.
///
/// Along the parent's main axis the weight becomes a grow factor with zero
/// basis, so fill siblings share the remaining space proportionally. On
/// the cross axis it becomes a plain percentage: cross-axis stretching
/// cannot use grow factors.
fn fill_style(
    weight: Option<f64>,
    axis: Axis,
    parent: &ElementLayoutConfig,
    style: &mut StyleMap,
) {
    let ElementLayoutConfig::Container(container) = parent else {
        return;
    };

    match &container.layout {
        // TODO: support fill sizing inside grid containers
        LayoutConfig::Grid(_) => {}
        LayoutConfig::Flex(flex) => {
            let main_axis = match flex.direction {
                FlexDirection::Row => Axis::Width,
                FlexDirection::Column => Axis::Height,
            };
            let weight = weight.unwrap_or(0.0);
            if axis == main_axis {
                style.set("flex", format!("{} 0 0px", num(weight)));
            } else {
                style.set(axis.css_property(), format!("{}%", num(weight * 100.0)));
            }
        }
    }
}

/// Resolve the min/max constraint list into style declarations.
///
/// Each constraint resolves independently against its own target axis:
/// width constraints are measured in width units and height constraints in
/// height units, whichever physical axis triggered the lookup. Auto and
/// fill sizes are not representable as constraints and resolve to nothing.
pub fn min_max_style(constraints: &[MinMaxConstraint], style: &mut StyleMap) {
    for constraint in constraints {
        if let Some(value) = constraint_value(&constraint.size, constraint.kind.axis()) {
            style.set(constraint.kind.css_property(), value);
        }
    }
}

fn constraint_value(item: &SizeItemConfig, axis: Axis) -> Option<String> {
    match item {
        SizeItemConfig::Auto | SizeItemConfig::Fill { .. } => None,
        SizeItemConfig::Fixed { value } => value.map(px),
        SizeItemConfig::Relative { value } => value.map(|value| format!("{}%", num(value))),
        SizeItemConfig::Viewport { value } => {
            value.map(|value| format!("{}{}", num(value), axis.viewport_unit()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::{AlignItems, ContainerLayout, ElementType, GridLayout, MinMaxKind};

    fn flex_parent(direction: FlexDirection) -> ElementLayoutConfig {
        let mut parent = ContainerLayout::initial();
        if let LayoutConfig::Flex(flex) = &mut parent.layout {
            flex.direction = direction;
        }
        ElementLayoutConfig::Container(parent)
    }

    fn grid_parent() -> ElementLayoutConfig {
        let mut parent = ContainerLayout::initial();
        parent.layout = LayoutConfig::Grid(GridLayout {
            columns: 2,
            rows: 2,
            gap: None,
            align_items: AlignItems::Center,
        });
        ElementLayoutConfig::Container(parent)
    }

    fn resolve(item: &SizeItemConfig, axis: Axis, parent: Option<&ElementLayoutConfig>) -> StyleMap {
        let mut style = StyleMap::new();
        size_style(item, axis, parent, &mut style);
        style
    }

    #[test]
    fn test_fill_axis_asymmetry() {
        let fill = SizeItemConfig::Fill { value: Some(1.0) };

        // Main axis of a row parent: grow contribution.
        let row = flex_parent(FlexDirection::Row);
        let style = resolve(&fill, Axis::Width, Some(&row));
        assert_eq!(style.get("flex"), Some("1 0 0px"));
        assert!(style.get("width").is_none());

        // Cross axis of a column parent: percentage contribution.
        let column = flex_parent(FlexDirection::Column);
        let style = resolve(&fill, Axis::Width, Some(&column));
        assert_eq!(style.get("width"), Some("100%"));
        assert!(style.get("flex").is_none());

        // Grid parent: no explicit sizing.
        let grid = grid_parent();
        assert!(resolve(&fill, Axis::Width, Some(&grid)).is_empty());
    }

    #[test]
    fn test_fill_weight_defaults_to_zero() {
        let fill = SizeItemConfig::Fill { value: None };
        let row = flex_parent(FlexDirection::Row);
        assert_eq!(
            resolve(&fill, Axis::Width, Some(&row)).get("flex"),
            Some("0 0 0px")
        );
    }

    #[test]
    fn test_fill_without_containment_context() {
        let fill = SizeItemConfig::Fill { value: Some(2.0) };
        assert!(resolve(&fill, Axis::Width, None).is_empty());

        let text_parent = ElementLayoutConfig::initial(ElementType::Text);
        assert!(resolve(&fill, Axis::Width, Some(&text_parent)).is_empty());
    }

    #[test]
    fn test_primary_modes() {
        assert_eq!(
            resolve(&SizeItemConfig::Auto, Axis::Height, None).get("height"),
            Some("auto")
        );
        assert_eq!(
            resolve(&SizeItemConfig::Fixed { value: Some(400.0) }, Axis::Width, None).get("width"),
            Some("400px")
        );
        assert_eq!(
            resolve(&SizeItemConfig::Relative { value: Some(50.0) }, Axis::Height, None)
                .get("height"),
            Some("50%")
        );
        assert_eq!(
            resolve(&SizeItemConfig::Viewport { value: Some(100.0) }, Axis::Width, None)
                .get("width"),
            Some("100vw")
        );
        assert_eq!(
            resolve(&SizeItemConfig::Viewport { value: Some(100.0) }, Axis::Height, None)
                .get("height"),
            Some("100vh")
        );
    }

    #[test]
    fn test_fixed_without_value_emits_nothing() {
        assert!(resolve(&SizeItemConfig::Fixed { value: None }, Axis::Width, None).is_empty());
    }

    #[test]
    fn test_constraints_use_their_own_axis() {
        let constraints = vec![
            MinMaxConstraint {
                kind: MinMaxKind::MinWidth,
                size: SizeItemConfig::Fixed { value: Some(320.0) },
            },
            MinMaxConstraint {
                kind: MinMaxKind::MaxHeight,
                size: SizeItemConfig::Viewport { value: Some(80.0) },
            },
            MinMaxConstraint {
                kind: MinMaxKind::MaxWidth,
                size: SizeItemConfig::Fill { value: Some(1.0) },
            },
        ];

        let mut style = StyleMap::new();
        min_max_style(&constraints, &mut style);
        assert_eq!(style.get("min-width"), Some("320px"));
        // Height constraints resolve in height units even though the list
        // is shared by both axes.
        assert_eq!(style.get("max-height"), Some("80vh"));
        // Fill is not representable as a constraint.
        assert!(style.get("max-width").is_none());
    }
}
