//! Tests for the flatten module

use super::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Map, Value};

fn as_map(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ============================================================================
// Generic flattener
// ============================================================================

#[test]
fn test_flatten_nested_objects_into_dotted_keys() {
    let record = as_map(json!({
        "tilroyId": "1",
        "type": {"tilroyId": "t1", "code": "STORE"},
        "country": {"tilroyId": "c1", "countryCode": "BE"}
    }));

    let flat = flatten_record(&record, DEFAULT_SEPARATOR);

    assert_eq!(flat["tilroyId"], "1");
    assert_eq!(flat["type.tilroyId"], "t1");
    assert_eq!(flat["type.code"], "STORE");
    assert_eq!(flat["country.countryCode"], "BE");
    assert!(!flat.contains_key("type"));
    assert!(!flat.contains_key("country"));
}

#[test]
fn test_flatten_leaves_no_nested_maps_outside_arrays() {
    let record = as_map(json!({
        "a": {"b": {"c": {"d": 1}}},
        "list": [{"keep": {"me": true}}],
        "scalar": "x"
    }));

    let flat = flatten_record(&record, DEFAULT_SEPARATOR);

    for (key, value) in &flat {
        assert!(
            !value.is_object(),
            "key '{key}' still holds a nested object"
        );
    }
    assert_eq!(flat["a.b.c.d"], 1);
    // Array elements keep their inner structure verbatim
    assert_eq!(flat["list"], json!([{"keep": {"me": true}}]));
}

#[test]
fn test_flatten_is_a_noop_on_already_flat_records() {
    let record = as_map(json!({
        "tilroyId": "1",
        "brand_code": "B1",
        "brand_descriptions": [{"languageCode": "en"}]
    }));

    let flat = flatten_record(&record, DEFAULT_SEPARATOR);
    assert_eq!(Value::Object(flat), Value::Object(record));
}

#[test]
fn test_flatten_collision_is_last_write_wins() {
    // "a.b" literal key vs nested a -> b; the later entry wins
    let mut record = Map::new();
    record.insert("a.b".to_string(), json!(1));
    record.insert("a".to_string(), json!({"b": 2}));

    let flat = flatten_record(&record, ".");
    assert_eq!(flat["a.b"], 2);
    assert_eq!(flat.len(), 1);
}

// ============================================================================
// Rule interpreter
// ============================================================================

const SHOP_RULES: &[FlattenRule] = &[
    FlattenRule::FlattenInto {
        source: "type",
        prefix: "type_",
    },
    FlattenRule::FlattenInto {
        source: "country",
        prefix: "country_",
    },
];

#[test]
fn test_flatten_into_prefixes_and_drops_source() {
    let mut record = as_map(json!({
        "tilroyId": "1",
        "type": {"tilroyId": "t1", "code": "STORE"},
        "country": {"tilroyId": "c1", "countryCode": "BE"}
    }));

    apply_rules(&mut record, SHOP_RULES);

    assert_eq!(record["type_tilroyId"], "t1");
    assert_eq!(record["type_code"], "STORE");
    assert_eq!(record["country_countryCode"], "BE");
    assert!(!record.contains_key("type"));
    assert!(!record.contains_key("country"));
    assert_eq!(record["tilroyId"], "1");
}

#[test]
fn test_flatten_into_preserves_arrays_verbatim() {
    let descriptions = json!([
        {"languageCode": "en", "standard": "Brand One"},
        {"languageCode": "nl", "standard": "Merk Een"}
    ]);
    let mut record = as_map(json!({
        "tilroyId": "p1",
        "brand": {"code": "B1", "descriptions": descriptions.clone()}
    }));

    apply_rules(
        &mut record,
        &[FlattenRule::FlattenInto {
            source: "brand",
            prefix: "brand_",
        }],
    );

    assert_eq!(record["brand_code"], "B1");
    assert_eq!(record["brand_descriptions"], descriptions);
    assert!(!record.contains_key("brand"));
}

#[test]
fn test_dotted_source_path_consumes_its_root() {
    let mut record = as_map(json!({
        "prices": {
            "tenantCurrency": {"vatExc": "10.00", "vatInc": "12.10"},
            "supplierCurrency": {"vatExc": "9.50"}
        }
    }));

    apply_rules(
        &mut record,
        &[
            FlattenRule::FlattenInto {
                source: "prices.tenantCurrency",
                prefix: "prices_tenantCurrency_",
            },
            FlattenRule::FlattenInto {
                source: "prices.supplierCurrency",
                prefix: "prices_supplierCurrency_",
            },
        ],
    );

    assert_eq!(record["prices_tenantCurrency_vatExc"], "10.00");
    assert_eq!(record["prices_tenantCurrency_vatInc"], "12.10");
    assert_eq!(record["prices_supplierCurrency_vatExc"], "9.50");
    assert!(!record.contains_key("prices"));
}

#[test]
fn test_extract_fields_targets_and_null_fill() {
    let mut record = as_map(json!({
        "created": {
            "user": {"login": "jdoe"},
            "timestamp": "2024-02-01T10:00:00Z"
        }
    }));

    apply_rules(
        &mut record,
        &[FlattenRule::ExtractFields {
            source: "created",
            fields: &[
                ("user.login", "created_user_login"),
                ("user.sourceId", "created_user_sourceId"),
                ("timestamp", "created_timestamp"),
            ],
        }],
    );

    assert_eq!(record["created_user_login"], "jdoe");
    assert_eq!(record["created_user_sourceId"], Value::Null);
    assert_eq!(record["created_timestamp"], "2024-02-01T10:00:00Z");
    assert!(!record.contains_key("created"));
}

#[test]
fn test_dotted_source_consumes_root_even_without_a_match() {
    // The container is present but holds none of the claimed branches;
    // it must still be removed from the flat record.
    let mut record = as_map(json!({
        "tilroyId": "po1",
        "prices": {"someOtherCurrency": {"vatExc": "10.00"}}
    }));

    apply_rules(
        &mut record,
        &[
            FlattenRule::FlattenInto {
                source: "prices.tenantCurrency",
                prefix: "prices_tenantCurrency_",
            },
            FlattenRule::FlattenInto {
                source: "prices.supplierCurrency",
                prefix: "prices_supplierCurrency_",
            },
        ],
    );

    assert!(!record.contains_key("prices"));
    assert_eq!(record["tilroyId"], "po1");
    assert!(!record.contains_key("prices_tenantCurrency_vatExc"));
}

#[test]
fn test_missing_source_leaves_record_untouched() {
    let mut record = as_map(json!({"tilroyId": "1"}));
    apply_rules(&mut record, SHOP_RULES);
    assert_eq!(Value::Object(record), json!({"tilroyId": "1"}));
}

#[test]
fn test_non_object_source_is_skipped() {
    let mut record = as_map(json!({"type": "already-a-string"}));
    apply_rules(&mut record, SHOP_RULES);
    // A scalar where an object was expected is left as-is, not consumed
    assert_eq!(record["type"], "already-a-string");
}
