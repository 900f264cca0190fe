//! The deep-merge primitive for breakpoint overrides.

use serde_json::Value;

/// Deep-merge `patch` on top of `base`, producing a new value.
///
/// Every key present in the patch replaces the base's value at that key.
/// When both sides hold objects the merge recurses; any other pairing,
/// including lists, is replaced wholesale. Partial-override schemas for
/// lists (shadow lists, constraint lists) are all-or-nothing per
/// breakpoint, so lists are never concatenated or index-merged. A key
/// absent from the patch leaves the base untouched; an explicit `null`
/// does override. Neither input is mutated.
pub fn deep_merge(base: &Value, patch: &Value) -> Value {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            let mut merged = base_map.clone();
            for (key, patch_value) in patch_map {
                let merged_value = match base_map.get(key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => patch_value.clone(),
                };
                merged.insert(key.clone(), merged_value);
            }
            Value::Object(merged)
        }
        _ => patch.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_patch_key_wins() {
        let merged = deep_merge(&json!({"a": 1, "b": 2}), &json!({"b": 3}));
        assert_eq!(merged, json!({"a": 1, "b": 3}));
    }

    #[test]
    fn test_nested_objects_recurse() {
        let base = json!({"size": {"width": {"type": "fixed", "value": 400}, "height": {"type": "auto"}}});
        let patch = json!({"size": {"width": {"value": 600}}});
        let merged = deep_merge(&base, &patch);
        assert_eq!(
            merged,
            json!({"size": {"width": {"type": "fixed", "value": 600}, "height": {"type": "auto"}}})
        );
    }

    #[test]
    fn test_lists_replace_wholesale() {
        let base = json!({"shadows": [{"x": 1}, {"x": 2}]});
        let patch = json!({"shadows": [{"y": 9}]});
        assert_eq!(deep_merge(&base, &patch), json!({"shadows": [{"y": 9}]}));
    }

    #[test]
    fn test_explicit_null_overrides() {
        let merged = deep_merge(&json!({"opacity": 80}), &json!({"opacity": null}));
        assert_eq!(merged, json!({"opacity": null}));
    }

    #[test]
    fn test_absent_key_keeps_base() {
        let merged = deep_merge(&json!({"opacity": 80}), &json!({}));
        assert_eq!(merged, json!({"opacity": 80}));
    }

    #[test]
    fn test_inputs_not_mutated() {
        let base = json!({"a": {"b": 1}});
        let patch = json!({"a": {"c": 2}});
        let base_before = base.clone();
        let patch_before = patch.clone();
        let _ = deep_merge(&base, &patch);
        assert_eq!(base, base_before);
        assert_eq!(patch, patch_before);
    }

    fn arb_json() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,6}".prop_map(Value::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
                    .prop_map(|map| Value::Object(map.into_iter().collect())),
            ]
        })
    }

    fn arb_object() -> impl Strategy<Value = Value> {
        prop::collection::btree_map("[a-z]{1,3}", arb_json(), 0..5)
            .prop_map(|map| Value::Object(map.into_iter().collect()))
    }

    proptest! {
        /// Override law: the merge equals the base on every key the patch
        /// does not set, and equals the patch on every key it does set
        /// (except both-object pairs, which recurse).
        #[test]
        fn prop_override_law(base in arb_object(), patch in arb_object()) {
            let merged = deep_merge(&base, &patch);
            let merged_map = merged.as_object().unwrap();
            let base_map = base.as_object().unwrap();
            let patch_map = patch.as_object().unwrap();

            for (key, base_value) in base_map {
                if !patch_map.contains_key(key) {
                    prop_assert_eq!(merged_map.get(key), Some(base_value));
                }
            }
            for (key, patch_value) in patch_map {
                let both_objects =
                    patch_value.is_object() && base_map.get(key).is_some_and(Value::is_object);
                if !both_objects {
                    prop_assert_eq!(merged_map.get(key), Some(patch_value));
                }
            }
        }

        #[test]
        fn prop_empty_patch_is_identity(base in arb_object()) {
            let merged = deep_merge(&base, &Value::Object(serde_json::Map::new()));
            prop_assert_eq!(merged, base);
        }
    }
}
