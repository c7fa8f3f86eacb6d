//! Field renames applied to stored SART records before validation.
//!
//! Records written by the 1.x schema used a single `information` score and
//! called familiarity `understanding`. The rules below lift those records to
//! the current ten-dimension layout. A rule only fills targets the record
//! does not already carry, so current records pass through unchanged (their
//! derived `understanding` sum is ignored because `familiarity` is present).

use serde_json::{Map, Value};

/// One legacy field and the current fields it maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyFieldRule {
    pub legacy_key: &'static str,
    pub targets: &'static [&'static str],
    /// Record schema version that stopped writing the legacy field
    pub retired_in: &'static str,
}

pub const LEGACY_FIELD_RULES: &[LegacyFieldRule] = &[
    LegacyFieldRule {
        legacy_key: "information",
        targets: &["informationQuantity", "informationQuality"],
        retired_in: "2.0",
    },
    LegacyFieldRule {
        legacy_key: "understanding",
        targets: &["familiarity"],
        retired_in: "2.0",
    },
];

/// Apply every rule in [`LEGACY_FIELD_RULES`], in order.
///
/// When a rule fires, the legacy key is removed after copying its value into
/// each absent target. Rules whose targets are all present leave the record
/// untouched.
pub fn remap_legacy_fields(mut record: Map<String, Value>) -> Map<String, Value> {
    for rule in LEGACY_FIELD_RULES {
        let Some(value) = record.get(rule.legacy_key).cloned() else {
            continue;
        };
        let missing: Vec<&str> = rule
            .targets
            .iter()
            .copied()
            .filter(|target| !record.contains_key(*target))
            .collect();
        if missing.is_empty() {
            continue;
        }

        log::debug!(
            "Mapping legacy SART field '{}' onto {:?}",
            rule.legacy_key,
            missing
        );
        for target in missing {
            record.insert(target.to_string(), value.clone());
        }
        record.remove(rule.legacy_key);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fixtures are objects"),
        }
    }

    #[test]
    fn information_fills_both_quantity_and_quality() {
        let out = remap_legacy_fields(as_map(json!({ "information": 6 })));
        assert_eq!(out["informationQuantity"], json!(6));
        assert_eq!(out["informationQuality"], json!(6));
        assert!(!out.contains_key("information"));
    }

    #[test]
    fn information_only_fills_absent_targets() {
        let out = remap_legacy_fields(as_map(json!({
            "information": 6,
            "informationQuality": 2
        })));
        assert_eq!(out["informationQuantity"], json!(6));
        assert_eq!(out["informationQuality"], json!(2));
    }

    #[test]
    fn understanding_maps_to_familiarity_when_absent() {
        let out = remap_legacy_fields(as_map(json!({ "understanding": 3 })));
        assert_eq!(out["familiarity"], json!(3));
        assert!(!out.contains_key("understanding"));
    }

    #[test]
    fn current_records_are_untouched() {
        let record = as_map(json!({ "familiarity": 5, "understanding": 15 }));
        let out = remap_legacy_fields(record.clone());
        assert_eq!(out, record);
    }
}
