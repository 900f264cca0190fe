//! The resolved style map.

use indexmap::IndexMap;

/// A flat, insertion-ordered map from CSS property name to rendered value.
///
/// Absent declarations are omitted, never written as empty or null. Order
/// is part of the contract: the filter composer's output is merged last so
/// its declarations take precedence positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap(IndexMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set a declaration.
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.0.insert(property.to_string(), value.into());
    }

    /// Set a declaration, omitting it entirely when the value is absent.
    pub fn set_opt(&mut self, property: &str, value: Option<String>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Merge another map into this one. Keys from `other` win.
    pub fn merge(&mut self, other: StyleMap) {
        for (property, value) in other.0 {
            self.0.insert(property, value);
        }
    }

    /// Structural diff against a baseline: the declarations of `self` whose
    /// value differs from the baseline's value at the same property.
    ///
    /// Properties only present in the baseline are dropped; a per-breakpoint
    /// unset is not representable in the downstream CSS emission.
    pub fn diff(&self, baseline: &StyleMap) -> StyleMap {
        let mut diff = StyleMap::new();
        for (property, value) in &self.0 {
            if baseline.0.get(property) != Some(value) {
                diff.set(property, value.clone());
            }
        }
        diff
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Render a pixel length. Whole values print without a fraction.
pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

/// Render a unitless number.
pub(crate) fn num(value: f64) -> String {
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut style = StyleMap::new();
        style.set("width", "100%");
        style.set("display", "flex");
        style.set("gap", "8px");
        let keys: Vec<&str> = style.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["width", "display", "gap"]);
    }

    #[test]
    fn test_set_opt_omits_absent_values() {
        let mut style = StyleMap::new();
        style.set_opt("background", None);
        style.set_opt("color", Some("rgb(0, 0, 0)".to_string()));
        assert!(style.get("background").is_none());
        assert_eq!(style.get("color"), Some("rgb(0, 0, 0)"));
    }

    #[test]
    fn test_diff_keeps_only_changed_values() {
        let mut base = StyleMap::new();
        base.set("width", "100%");
        base.set("opacity", "0.4");
        base.set("display", "flex");

        let mut device = StyleMap::new();
        device.set("width", "600px");
        device.set("opacity", "0.4");
        device.set("display", "flex");

        let diff = device.diff(&base);
        assert_eq!(diff.len(), 1);
        assert_eq!(diff.get("width"), Some("600px"));
    }

    #[test]
    fn test_diff_of_identical_maps_is_empty() {
        let mut style = StyleMap::new();
        style.set("display", "block");
        assert!(style.diff(&style.clone()).is_empty());
    }

    #[test]
    fn test_number_rendering() {
        assert_eq!(px(400.0), "400px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(num(1.0), "1");
        assert_eq!(num(0.4), "0.4");
    }
}
