//! Fill rendering: colors, gradients, and image fills as paint strings.

use crate::map::num;
use trellis_core::{ColorValue, GradientKind, GradientValue, ImageValue, PickerValue, Rgb};

/// Render a solid color with its 0-100 opacity as an rgb()/rgba() string.
///
/// Schema validation upstream guarantees a well-formed hex color; an
/// unparsable value falls back to opaque black rather than failing the
/// otherwise-infallible style path.
pub fn color_value(value: &ColorValue) -> String {
    let rgb = Rgb::from_hex(&value.color).unwrap_or(Rgb::BLACK);
    let alpha = value.opacity / 100.0;
    if alpha >= 1.0 {
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    } else {
        format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, num(alpha))
    }
}

/// Render a picked fill as a displayable paint string.
pub fn picker_value(value: &PickerValue) -> String {
    match value {
        PickerValue::Color(color) => color_value(color),
        PickerValue::Gradient(gradient) => gradient_value(gradient),
        PickerValue::Image(image) => image_value(image),
    }
}

/// Render a gradient fill. Stops are sorted ascending by position before
/// rendering; input order is not authoritative.
fn gradient_value(value: &GradientValue) -> String {
    let mut stops = value.stops.clone();
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
    let stops: Vec<String> = stops
        .iter()
        .map(|stop| {
            let color = color_value(&ColorValue::new(stop.color.clone(), stop.opacity));
            format!("{} {}%", color, stop.position)
        })
        .collect();
    let stops = stops.join(", ");

    match value.kind {
        GradientKind::Linear { angle } => format!("linear-gradient({angle}deg, {stops})"),
        GradientKind::Radial => format!("radial-gradient(circle, {stops})"),
    }
}

fn image_value(value: &ImageValue) -> String {
    format!(
        "url(\"{}\") {} {}/{}",
        value.url,
        value.background_repeat.as_css(),
        value.background_position.as_css(),
        value.background_size.as_css()
    )
}
