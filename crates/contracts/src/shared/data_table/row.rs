use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A record that can be shown as one table row.
///
/// Field access goes through the serde representation, so every serialized
/// property is searchable and usable as a facet key without per-type code.
pub trait TableRow: Serialize {
    /// Stable identity of the row (SKU, group id, composite key...).
    fn row_key(&self) -> String;

    /// All top-level properties in their display form.
    fn field_values(&self) -> BTreeMap<String, String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .map(|(k, v)| (k, display_value(&v)))
                .collect(),
            _ => BTreeMap::new(),
        }
    }

    /// Display form of one property, `None` when the row has no such field.
    fn field(&self, key: &str) -> Option<String> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map.get(key).map(display_value),
            _ => None,
        }
    }

    /// Case-insensitive substring match against every field.
    ///
    /// `needle` must already be lowercased; an empty needle matches everything.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.field_values()
            .values()
            .any(|v| v.to_lowercase().contains(needle))
    }
}

/// String form of a JSON value as a table cell shows it.
///
/// `null` renders empty, whole floats drop the trailing `.0`.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Item {
        sku_id: String,
        product_name: String,
        min_stock_level: f64,
        group_id: Option<String>,
    }

    impl TableRow for Item {
        fn row_key(&self) -> String {
            self.sku_id.clone()
        }
    }

    fn item() -> Item {
        Item {
            sku_id: "A001".into(),
            product_name: "Green Tea 500g".into(),
            min_stock_level: 25.0,
            group_id: None,
        }
    }

    #[test]
    fn test_field_values_stringify() {
        let values = item().field_values();
        assert_eq!(values["sku_id"], "A001");
        assert_eq!(values["min_stock_level"], "25");
        assert_eq!(values["group_id"], "");
    }

    #[test]
    fn test_field_lookup() {
        assert_eq!(item().field("product_name").as_deref(), Some("Green Tea 500g"));
        assert_eq!(item().field("missing"), None);
    }

    #[test]
    fn test_matches_search_any_field() {
        let row = item();
        assert!(row.matches_search("green"));
        assert!(row.matches_search("a00"));
        assert!(row.matches_search("25"));
        assert!(!row.matches_search("coffee"));
        assert!(row.matches_search(""));
    }

    #[test]
    fn test_display_value_numbers() {
        assert_eq!(display_value(&serde_json::json!(2.5)), "2.5");
        assert_eq!(display_value(&serde_json::json!(7)), "7");
        assert_eq!(display_value(&serde_json::json!(true)), "true");
    }
}
