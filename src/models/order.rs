//! Order history records.

use super::empty_as_none;
use super::preferences::{DietaryRestriction, OilLevel, SpicyLevel};
use serde::{Deserialize, Serialize};

/// A point-in-time customization of one dish.
///
/// Name, image and steps are copied from the dish when the item is created, so
/// later edits to the dish never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Id of the dish this was taken from
    #[serde(rename = "id")]
    pub dish_id: i64,
    /// Dish name at order time
    #[serde(rename = "name")]
    pub dish_name: String,
    /// Dish image handle at order time
    #[serde(rename = "img", default, deserialize_with = "empty_as_none")]
    pub dish_image: Option<String>,
    /// Chosen oil level
    #[serde(rename = "oil")]
    pub oil_level: OilLevel,
    /// Ingredients to leave out; empty means no restriction
    #[serde(rename = "diet")]
    pub dietaries: Vec<DietaryRestriction>,
    /// Chosen spice level
    pub spicy: SpicyLevel,
    /// Preparation steps at order time
    pub steps: Vec<String>,
}

/// Review data merged into an order when it is completed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Review {
    /// Photos of the finished meal
    pub images: Vec<String>,
    /// Optional written review
    pub text: Option<String>,
    /// Star rating, 0 to 5
    pub rating: u8,
}

/// A submitted cart plus its optional review.
///
/// An empty `img` or `txt` string reads back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique id assigned when the order is placed
    pub id: i64,
    /// Cart contents at submission, in cart order
    pub items: Vec<OrderItem>,
    /// Creation time, `YYYY-MM-DD HH:MM` when generated
    #[serde(rename = "time")]
    pub timestamp: String,
    /// Review photos
    #[serde(rename = "imgs", default)]
    pub review_images: Vec<String>,
    /// Written review, if any
    #[serde(rename = "txt", default, deserialize_with = "empty_as_none")]
    pub review_text: Option<String>,
    /// Star rating, 0 until reviewed
    #[serde(default)]
    pub rating: u8,
    /// Whether a review has been recorded
    #[serde(rename = "done", default)]
    pub is_completed: bool,
}

impl Order {
    /// A fresh, unreviewed order.
    #[must_use]
    pub const fn new(id: i64, items: Vec<OrderItem>, timestamp: String) -> Self {
        Self {
            id,
            items,
            timestamp,
            review_images: Vec::new(),
            review_text: None,
            rating: 0,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_order_wire_layout() {
        let item = OrderItem {
            dish_id: 1,
            dish_name: "Kung Pao Chicken".to_string(),
            dish_image: None,
            oil_level: OilLevel::Less,
            dietaries: vec![DietaryRestriction::NoGinger],
            spicy: SpicyLevel::Medium,
            steps: vec!["Marinate".to_string()],
        };
        let order = Order::new(42, vec![item], "2025-03-01 18:30".to_string());

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["time"], "2025-03-01 18:30");
        assert_eq!(value["done"], false);
        assert_eq!(value["rating"], 0);
        assert_eq!(value["items"][0]["oil"], "LESS");
        assert_eq!(value["items"][0]["diet"][0], "NO_GINGER");
        assert_eq!(value["items"][0]["spicy"], "MEDIUM");
    }

    #[test]
    fn test_empty_image_and_review_text_read_as_none() {
        let json = r#"[{"id":2,"items":[{"id":1,"name":"Kung Pao Chicken","img":"",
            "oil":"NORMAL","spicy":"MILD","diet":[],"steps":[]}],
            "time":"2024-01-01 12:00","imgs":[],"txt":"","rating":0,"done":false}]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders[0].items[0].dish_image, None);
        assert_eq!(orders[0].review_text, None);
        assert!(!orders[0].is_completed);
    }

    #[test]
    fn test_review_fields_default_when_missing() {
        let json = r#"[{"id":5,"items":[],"time":"2025-01-01 12:00"}]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();
        assert_eq!(orders[0], Order::new(5, Vec::new(), "2025-01-01 12:00".to_string()));
    }
}
