//! The device cascade.
//!
//! Collapses a responsive configuration into the effective configuration
//! for one device class by folding the override tiers onto the desktop
//! baseline.

use crate::merge::deep_merge;
use serde_json::Value;
use trellis_core::{Device, ElementLayoutConfig, ElementType, ResolveError, ResponsiveLayoutConfig};

/// Resolve the effective configuration of one element at one device class.
///
/// Desktop returns the baseline unchanged. Tablet applies the tablet
/// override; mobile applies tablet, then mobile. Overrides are partial JSON
/// trees merged with [`deep_merge`]; the merged result must still match the
/// element's declared variant, and an override that rewrites the type tag
/// is rejected.
pub fn resolve_layout(
    config: &ResponsiveLayoutConfig,
    device: Device,
) -> Result<ElementLayoutConfig, ResolveError> {
    let tiers: Vec<&Value> = match device {
        Device::Desktop => Vec::new(),
        Device::Tablet => config.tablet.iter().collect(),
        Device::Mobile => config.tablet.iter().chain(config.mobile.iter()).collect(),
    };

    if tiers.is_empty() {
        return Ok(config.desktop.clone());
    }

    let expected = config.desktop.element_type();
    let mut merged = serde_json::to_value(&config.desktop)?;
    for patch in tiers {
        check_type_tag(patch, expected, device)?;
        merged = deep_merge(&merged, patch);
    }

    serde_json::from_value(merged).map_err(|source| ResolveError::SchemaMismatch {
        device,
        expected,
        source,
    })
}

/// A partial override never changes the element's type tag.
fn check_type_tag(
    patch: &Value,
    expected: ElementType,
    device: Device,
) -> Result<(), ResolveError> {
    if let Some(found) = patch.get("type").and_then(Value::as_str) {
        if found != expected.to_string() {
            return Err(ResolveError::TypeTagChanged {
                device,
                expected,
                found: found.to_string(),
            });
        }
    }
    Ok(())
}
