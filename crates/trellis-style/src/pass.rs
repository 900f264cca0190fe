//! The per-device render pass.
//!
//! For each element, resolve the element's and its parent's effective
//! configuration at every device class and generate the three style maps.
//! Mobile is the baseline; tablet and desktop reduce to their structural
//! diff against it, which the rendering layer emits under the device's
//! media-query scope.

use crate::element::element_style;
use crate::map::StyleMap;
use indexmap::IndexMap;
use std::collections::HashMap;
use trellis_core::{Device, ResolveError, ResponsiveLayoutConfig};
use trellis_resolver::resolve_layout;
use trellis_tree::ElementTree;

/// Resolved styles of one element across the three device classes.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStyles {
    /// The mobile baseline, emitted unscoped.
    pub base: StyleMap,
    /// Diff against the baseline, scoped under the tablet media query.
    pub tablet: StyleMap,
    /// Diff against the baseline, scoped under the desktop media query.
    pub desktop: StyleMap,
}

/// Compute the baseline and per-device diffs for one element.
pub fn compute_device_styles(
    tree: &ElementTree,
    layouts: &HashMap<String, ResponsiveLayoutConfig>,
    id: &str,
) -> Result<DeviceStyles, ResolveError> {
    let config = layout_of(layouts, id)?;
    let parent_config = match tree.parent_of(id) {
        Some(parent_id) => Some(layout_of(layouts, parent_id)?),
        None => None,
    };

    let desktop = style_at(config, parent_config, Device::Desktop)?;
    let tablet = style_at(config, parent_config, Device::Tablet)?;
    let mobile = style_at(config, parent_config, Device::Mobile)?;

    Ok(DeviceStyles {
        tablet: tablet.diff(&mobile),
        desktop: desktop.diff(&mobile),
        base: mobile,
    })
}

/// Compute styles for every element in the tree, in tree insertion order.
pub fn compute_all_styles(
    tree: &ElementTree,
    layouts: &HashMap<String, ResponsiveLayoutConfig>,
) -> Result<IndexMap<String, DeviceStyles>, ResolveError> {
    tree.ids()
        .map(|id| Ok((id.to_string(), compute_device_styles(tree, layouts, id)?)))
        .collect()
}

fn style_at(
    config: &ResponsiveLayoutConfig,
    parent_config: Option<&ResponsiveLayoutConfig>,
    device: Device,
) -> Result<StyleMap, ResolveError> {
    let effective = resolve_layout(config, device)?;
    let parent_effective = match parent_config {
        Some(parent) => Some(resolve_layout(parent, device)?),
        None => None,
    };
    Ok(element_style(&effective, parent_effective.as_ref()))
}

fn layout_of<'a>(
    layouts: &'a HashMap<String, ResponsiveLayoutConfig>,
    id: &str,
) -> Result<&'a ResponsiveLayoutConfig, ResolveError> {
    layouts.get(id).ok_or_else(|| ResolveError::MissingConfig {
        id: id.to_string(),
    })
}
