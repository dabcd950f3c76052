//! Encoding and tolerant decoding of the persisted order record.
//!
//! Decoding never fails on shape: each known field is read independently and
//! merged onto a default [`Order`]. Missing fields keep their defaults,
//! malformed numbers coerce to zero, and duplicate pages or add-on ids are
//! dropped so the decoded order satisfies the same invariants as one built
//! through the mutation layer.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::warn;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    error::PersistError,
    models::{Addon, CustomBranding, FlowchartData, Order, Package, PagePlan},
    money::{coerce_count, coerce_optional_price, coerce_price},
};

/// Version written into every record.
pub const SCHEMA_VERSION: u64 = 1;

/// Serializes an order into the persisted record format.
pub fn encode(order: &Order) -> Result<String, PersistError> {
    let mut value = serde_json::to_value(order)?;
    if let Value::Object(map) = &mut value {
        map.insert("schemaVersion".to_string(), Value::from(SCHEMA_VERSION));
    }
    Ok(serde_json::to_string(&value)?)
}

/// Parses a persisted record, merging known fields onto an empty order.
///
/// Returns `None` only when the text is not a JSON object at all.
pub fn decode(text: &str) -> Option<Order> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            warn!("Discarding unparsable order record: {e}");
            return None;
        }
    };
    let Value::Object(record) = value else {
        warn!("Discarding order record that is not a JSON object");
        return None;
    };

    let version = record
        .get("schemaVersion")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if version > SCHEMA_VERSION {
        warn!("Order record has newer schema version {version}; reading known fields only");
    }

    Some(Order {
        package: record.get("package").and_then(decode_package),
        brand_kit: record
            .get("brandKit")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        industry: string_field(&record, "industry"),
        pages: record.get("pages").map(decode_pages).unwrap_or_default(),
        addons: record.get("addons").map(decode_addons).unwrap_or_default(),
        page_plans: record
            .get("pagePlans")
            .map(decode_page_plans)
            .unwrap_or_default(),
        custom_branding: record
            .get("customBranding")
            .map(decode_custom_branding)
            .unwrap_or_default(),
        flowchart_data: record
            .get("flowchartData")
            .map(decode_flowchart)
            .unwrap_or_default(),
    })
}

fn string_field(record: &Map<String, Value>, key: &str) -> String {
    record.get(key).map(text).unwrap_or_default()
}

/// Reads strings as-is and numbers in their textual form.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn decode_package(value: &Value) -> Option<Package> {
    let record = value.as_object()?;
    Some(Package {
        id: string_field(record, "id"),
        name: string_field(record, "name"),
        price: record.get("price").map(coerce_price).unwrap_or_default(),
        included_pages: record
            .get("includedPages")
            .map(coerce_count)
            .unwrap_or_default(),
        brand_kit_bundle_price: coerce_optional_price(record.get("brandKitBundlePrice")),
        extra_page_cost: record
            .get("extraPageCost")
            .map(coerce_price)
            .unwrap_or_default(),
    })
}

fn decode_pages(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|item| text(item).trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect()
}

fn decode_addons(value: &Value) -> Vec<Addon> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Value::as_object)
        .filter_map(|record| {
            let id = string_field(record, "id");
            if id.is_empty() || !seen.insert(id.clone()) {
                return None;
            }
            let name = string_field(record, "name");
            let price = record.get("price").map(coerce_price).unwrap_or_default();
            Some(Addon { id, name, price })
        })
        .collect()
}

fn decode_page_plans(value: &Value) -> BTreeMap<String, PagePlan> {
    let Some(plans) = value.as_object() else {
        return BTreeMap::new();
    };
    plans
        .iter()
        .filter_map(|(page, plan)| {
            let record = plan.as_object()?;
            Some((page.clone(), decode_page_plan(record)))
        })
        .collect()
}

fn decode_page_plan(record: &Map<String, Value>) -> PagePlan {
    let integrations: BTreeSet<String> = match record.get("integrations") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text(item).trim().to_string())
            .filter(|name| !name.is_empty())
            .collect(),
        _ => BTreeSet::new(),
    };
    let sketch = |key: &str| record.get(key).and_then(Value::as_str).map(String::from);

    PagePlan {
        notes: string_field(record, "notes"),
        seo: string_field(record, "seo"),
        conversion: string_field(record, "conversion"),
        integrations,
        mobile_sketch: sketch("mobileSketch"),
        desktop_sketch: sketch("desktopSketch"),
    }
}

fn decode_custom_branding(value: &Value) -> CustomBranding {
    let Some(record) = value.as_object() else {
        return CustomBranding::default();
    };
    CustomBranding {
        active: record
            .get("active")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        name: string_field(record, "name"),
        price: record.get("price").map(coerce_price).unwrap_or_default(),
    }
}

fn decode_flowchart(value: &Value) -> FlowchartData {
    let Some(record) = value.as_object() else {
        return FlowchartData::default();
    };
    let mut chart = FlowchartData {
        nodes: decode_items(record.get("nodes"), "flowchart node"),
        connections: decode_items(record.get("connections"), "flowchart connection"),
    };
    chart.normalize();
    chart
}

/// Decodes each array element on its own, skipping the ones that do not fit.
fn decode_items<T: DeserializeOwned>(value: Option<&Value>, what: &str) -> Vec<T> {
    let Some(items) = value.and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match T::deserialize(item) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                warn!("Skipping malformed {what}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_encode_writes_schema_version() {
        let text = encode(&Order::new()).expect("Failed to encode");
        let value: Value = serde_json::from_str(&text).expect("Invalid JSON");

        assert_eq!(value["schemaVersion"], json!(SCHEMA_VERSION));
        assert!(value["package"].is_null());
        assert_eq!(value["pages"], json!([]));
    }

    #[test]
    fn test_decode_rejects_non_objects() {
        assert!(decode("not json").is_none());
        assert!(decode("[1, 2, 3]").is_none());
        assert!(decode("null").is_none());
    }

    #[test]
    fn test_decode_missing_addons_defaults_to_empty() {
        let order = decode(r#"{"brandKit": true, "pages": ["Home"]}"#).expect("Should decode");

        assert!(order.addons().is_empty());
        assert!(order.brand_kit());
        assert_eq!(order.pages(), ["Home".to_string()]);
    }

    #[test]
    fn test_decode_coerces_malformed_numbers() {
        let record = json!({
            "package": {
                "id": "pro",
                "name": "Pro",
                "price": "lots",
                "includedPages": "7",
                "brandKitBundlePrice": null,
                "extraPageCost": -10
            },
            "addons": [{"id": "seo", "name": "SEO Pack", "price": "150"}],
            "customBranding": {"active": true, "name": "Mascot", "price": null}
        });

        let order = decode(&record.to_string()).expect("Should decode");
        let package = order.package().expect("Package should be present");

        assert_eq!(package.price, Decimal::ZERO);
        assert_eq!(package.included_pages, 7);
        assert_eq!(package.brand_kit_bundle_price, None);
        assert_eq!(package.extra_page_cost, Decimal::ZERO);
        assert_eq!(order.addons()[0].price, Decimal::from(150));
        assert_eq!(order.custom_branding().price, Decimal::ZERO);
    }

    #[test]
    fn test_decode_restores_invariants() {
        let record = json!({
            "pages": ["Home", " Home ", "", "About", 42],
            "addons": [
                {"id": "seo", "name": "SEO Pack", "price": 150},
                {"id": "seo", "name": "Duplicate", "price": 999},
                {"name": "No id", "price": 10},
                "garbage"
            ]
        });

        let order = decode(&record.to_string()).expect("Should decode");

        assert_eq!(order.pages(), ["Home", "About", "42"]);
        assert_eq!(order.addons().len(), 1);
        assert_eq!(order.addons()[0].name, "SEO Pack");
    }

    #[test]
    fn test_decode_page_plans_tolerates_partial_records() {
        let record = json!({
            "pagePlans": {
                "Home": {"notes": "Big hero", "integrations": ["Stripe", ""]},
                "About": "not a plan",
                "Old Page": {"mobileSketch": "data:image/png;base64,AAAA"}
            }
        });

        let order = decode(&record.to_string()).expect("Should decode");

        assert_eq!(order.page_plans().len(), 2);
        let home = order.page_plan("Home").expect("Home plan");
        assert_eq!(home.notes, "Big hero");
        assert_eq!(home.integrations.len(), 1);
        let old = order.page_plan("Old Page").expect("Old plan");
        assert_eq!(old.mobile_sketch.as_deref(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_decode_drops_malformed_flowchart() {
        let record = json!({"flowchartData": {"nodes": "oops"}});

        let order = decode(&record.to_string()).expect("Should decode");

        assert!(order.flowchart_data().is_empty());
    }

    #[test]
    fn test_decode_flowchart_keeps_valid_nodes() {
        let record = json!({"flowchartData": {
            "nodes": [
                {"id": "home", "text": "Home", "x": null, "y": 12.5, "w": 100, "h": 40},
                {"text": "no id"},
                {"id": "about", "type": "page"}
            ],
            "connections": [
                {"from": "home", "to": "about"},
                {"from": "home", "to": "missing"},
                {"from": "home"}
            ]
        }});

        let order = decode(&record.to_string()).expect("Should decode");
        let chart = order.flowchart_data();

        assert_eq!(chart.nodes.len(), 2);
        assert_eq!(chart.nodes[0].x, 0.0);
        assert_eq!(chart.nodes[0].y, 12.5);
        assert_eq!(chart.nodes[1].kind, "page");
        assert_eq!(chart.connections.len(), 1);
    }

    #[test]
    fn test_decode_trims_integrations() {
        let record = json!({"pagePlans": {"Home": {"integrations": [" Stripe ", "  "]}}});

        let order = decode(&record.to_string()).expect("Should decode");
        let home = order.page_plan("Home").expect("Home plan");

        assert_eq!(home.integrations.iter().collect::<Vec<_>>(), ["Stripe"]);
    }

    #[test]
    fn test_decode_reads_newer_schema_known_fields() {
        let record = json!({"schemaVersion": 99, "industry": "bakery", "futureField": {}});

        let order = decode(&record.to_string()).expect("Should decode");

        assert_eq!(order.industry(), "bakery");
    }
}
