use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

/// Largest magnitude below which every integral f64 is exact as an i64.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Whole prices go out as integers (`2500`, not `2500.0`).
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Catalog entry. Wire names are camelCase (`imageUrl`, `maxQty`, ...).
///
/// `max_qty` is an advisory stock ceiling and the dates only annotate
/// perishable goods; nothing in the service enforces either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub qty: i64,
    pub image_url: String,
    pub category: String,
    pub max_qty: i64,
    /// Omitted from JSON when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
}

impl Product {
    /// Perishable goods are the ones that carry production or expiry dates.
    pub fn is_perishable(&self) -> bool {
        self.production_date.is_some() || self.expiry_date.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make(id: i64, dates: Option<(&str, &str)>) -> Product {
        Product {
            id,
            name: "Test".to_string(),
            sku: "TST-1".to_string(),
            price: 12.5,
            qty: 3,
            image_url: "http://localhost:8080/images/test.png".to_string(),
            category: "Test".to_string(),
            max_qty: 10,
            production_date: dates.map(|(p, _)| p.parse().unwrap()),
            expiry_date: dates.map(|(_, e)| e.parse().unwrap()),
        }
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let value = serde_json::to_value(make(7, None)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Test",
                "sku": "TST-1",
                "price": 12.5,
                "qty": 3,
                "imageUrl": "http://localhost:8080/images/test.png",
                "category": "Test",
                "maxQty": 10,
            })
        );
    }

    #[test]
    fn whole_prices_have_no_fraction_on_the_wire() {
        let mut product = make(1, None);
        product.price = 2500.0;
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":2500,"#), "{}", text);

        product.price = 12.5;
        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains(r#""price":12.5,"#), "{}", text);
    }

    #[test]
    fn absent_dates_are_omitted() {
        let value = serde_json::to_value(make(1, None)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("productionDate"));
        assert!(!obj.contains_key("expiryDate"));
    }

    #[test]
    fn present_dates_serialize_as_iso_days() {
        let value = serde_json::to_value(make(1, Some(("2023-01-15", "2026-01-14")))).unwrap();
        assert_eq!(value["productionDate"], "2023-01-15");
        assert_eq!(value["expiryDate"], "2026-01-14");
    }

    #[test]
    fn deserializes_without_optional_dates() {
        let product: Product = serde_json::from_value(json!({
            "id": 2,
            "name": "Thermometer",
            "sku": "TRM-C205",
            "price": 350,
            "qty": 120,
            "imageUrl": "http://localhost:8080/images/terumo-c205.png",
            "category": "Devices",
            "maxQty": 150,
        }))
        .unwrap();
        assert_eq!(product.id, 2);
        assert_eq!(product.production_date, None);
        assert!(!product.is_perishable());
    }

    #[test]
    fn perishable_flag_follows_date_presence() {
        assert!(!make(1, None).is_perishable());
        assert!(make(1, Some(("2023-06-20", "2025-06-19"))).is_perishable());

        let mut only_expiry = make(1, None);
        only_expiry.expiry_date = Some("2025-08-31".parse().unwrap());
        assert!(only_expiry.is_perishable());
    }
}
