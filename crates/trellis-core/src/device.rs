//! Device classes and breakpoint metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A device class. Mobile is the baseline breakpoint; tablet and desktop
/// styles are emitted as min-width scoped diffs against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Tablet,
    Mobile,
}

/// All device classes, widest first.
pub const DEVICES: [Device; 3] = [Device::Desktop, Device::Tablet, Device::Mobile];

impl Device {
    /// Design width of the device's canvas in pixels.
    pub fn design_width(&self) -> u32 {
        match self {
            Device::Desktop => 1440,
            Device::Tablet => 768,
            Device::Mobile => 480,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Device::Desktop => "Desktop",
            Device::Tablet => "Tablet",
            Device::Mobile => "Mobile",
        }
    }

    /// The media-query condition the device's style diff is scoped under.
    ///
    /// Mobile is the unscoped baseline and has no condition.
    pub fn media_query(&self) -> Option<String> {
        match self {
            Device::Mobile => None,
            device => Some(format!("@media (min-width: {}px)", device.design_width())),
        }
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Device::Desktop => "desktop",
            Device::Tablet => "tablet",
            Device::Mobile => "mobile",
        })
    }
}
