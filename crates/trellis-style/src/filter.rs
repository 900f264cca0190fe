//! Filter-chain composition.

use crate::map::{num, StyleMap};
use trellis_core::FilterConfig;

/// Render a filter configuration as blend-mode, backdrop-filter, and
/// filter-chain declarations.
///
/// Each function is appended when its parameter is present, not when it is
/// truthy: `contrast: 0` still emits `contrast(0%)`, while an absent key
/// contributes nothing. The chain order is fixed (blur, contrast,
/// brightness, grayscale, saturate, invert, sepia, hue-rotate) and the
/// `filter` declaration is omitted entirely when no function applies.
pub fn filter_style(config: &FilterConfig) -> StyleMap {
    let mut style = StyleMap::new();

    if let Some(blending) = config.blending {
        style.set("mix-blend-mode", blending.as_css());
    }
    if let Some(bg_blur) = config.bg_blur {
        style.set("backdrop-filter", format!("blur({}px)", num(bg_blur)));
    }

    let mut chain: Vec<String> = Vec::new();
    if let Some(blur) = config.blur {
        chain.push(format!("blur({}px)", num(blur)));
    }
    if let Some(contrast) = config.contrast {
        chain.push(format!("contrast({}%)", num(contrast)));
    }
    if let Some(brightness) = config.brightness {
        chain.push(format!("brightness({}%)", num(brightness)));
    }
    if let Some(grayscale) = config.grayscale {
        chain.push(format!("grayscale({}%)", num(grayscale)));
    }
    if let Some(saturate) = config.saturate {
        chain.push(format!("saturate({}%)", num(saturate)));
    }
    if let Some(invert) = config.invert {
        chain.push(format!("invert({}%)", num(invert)));
    }
    if let Some(sepia) = config.sepia {
        chain.push(format!("sepia({}%)", num(sepia)));
    }
    if let Some(hue) = config.hue {
        chain.push(format!("hue-rotate({}deg)", num(hue)));
    }

    if !chain.is_empty() {
        style.set("filter", chain.join(" "));
    }

    style
}
