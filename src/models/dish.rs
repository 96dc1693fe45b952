//! Dish record and the add/edit form draft that produces it.

use super::empty_as_none;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// A cataloged recipe.
///
/// Field names on the wire follow the on-device layout (`imageUri`, `date`,
/// `ingredients`), so stored catalogs written by earlier builds still load. An empty
/// `imageUri` or `ingredients` string reads back as `None`; `None` is written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique id assigned when the dish is first saved
    pub id: i64,
    /// Display name
    pub name: String,
    /// Opaque handle to a picked photo (never dereferenced here)
    #[serde(rename = "imageUri", default, deserialize_with = "empty_as_none")]
    pub image_uri: Option<String>,
    /// Free-text price; never used arithmetically
    pub price: String,
    /// Date the dish was first made, `YYYY-MM-DD` when generated
    #[serde(rename = "date")]
    pub first_made_date: String,
    /// Free-form notes
    pub remark: String,
    /// Preparation steps in order
    pub steps: Vec<String>,
    /// Category name; may dangle after the category is removed
    pub category: String,
    /// Optional main-ingredients text
    #[serde(rename = "ingredients", default, deserialize_with = "empty_as_none")]
    pub main_ingredients: Option<String>,
}

/// Raw field values from the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishDraft {
    /// Dish name; required
    pub name: String,
    /// Picked photo handle, empty when none
    pub image_uri: String,
    /// Price as typed; required
    pub price: String,
    /// Notes
    pub remark: String,
    /// Step inputs, blanks included
    pub steps: Vec<String>,
    /// Selected category
    pub category: String,
    /// Main ingredients, empty when none
    pub main_ingredients: String,
}

impl DishDraft {
    /// Pre-fills the form from an existing dish for editing.
    #[must_use]
    pub fn from_dish(dish: &Dish) -> Self {
        Self {
            name: dish.name.clone(),
            image_uri: dish.image_uri.clone().unwrap_or_default(),
            price: dish.price.clone(),
            remark: dish.remark.clone(),
            steps: dish.steps.clone(),
            category: dish.category.clone(),
            main_ingredients: dish.main_ingredients.clone().unwrap_or_default(),
        }
    }

    /// Turns the draft into a dish with the given identity.
    ///
    /// Name and price must be non-blank; the price is otherwise accepted as typed.
    /// Blank steps are dropped and a blank image handle or ingredient list becomes `None`.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the name or price is blank.
    pub fn into_dish(self, id: i64, first_made_date: String) -> Result<Dish> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation {
                message: "Dish name cannot be empty".to_string(),
            });
        }
        if self.price.trim().is_empty() {
            return Err(Error::Validation {
                message: "Dish price cannot be empty".to_string(),
            });
        }

        Ok(Dish {
            id,
            name: self.name,
            image_uri: non_blank(self.image_uri),
            price: self.price,
            first_made_date,
            remark: self.remark,
            steps: self
                .steps
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .collect(),
            category: self.category,
            main_ingredients: non_blank(self.main_ingredients),
        })
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn draft() -> DishDraft {
        DishDraft {
            name: "Kung Pao Chicken".to_string(),
            price: "28".to_string(),
            steps: vec![
                "Marinate".to_string(),
                "   ".to_string(),
                "Stir-fry".to_string(),
                String::new(),
            ],
            category: "荤菜".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_into_dish_drops_blank_steps_in_order() {
        let dish = draft().into_dish(1, "2025-03-01".to_string()).unwrap();
        assert_eq!(dish.steps, vec!["Marinate", "Stir-fry"]);
        assert_eq!(dish.image_uri, None);
        assert_eq!(dish.main_ingredients, None);
        assert_eq!(dish.first_made_date, "2025-03-01");
    }

    #[test]
    fn test_non_numeric_price_is_accepted() {
        let mut d = draft();
        d.price = "market price".to_string();
        let dish = d.into_dish(2, "2025-03-01".to_string()).unwrap();
        assert_eq!(dish.price, "market price");
    }

    #[test]
    fn test_blank_name_or_price_is_rejected() {
        let mut d = draft();
        d.name = "  ".to_string();
        assert!(matches!(
            d.into_dish(3, String::new()),
            Err(Error::Validation { .. })
        ));

        let mut d = draft();
        d.price = String::new();
        assert!(matches!(
            d.into_dish(3, String::new()),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    fn test_wire_field_names() {
        let dish = draft().into_dish(1, "2025-03-01".to_string()).unwrap();
        let value = serde_json::to_value(&dish).unwrap();
        assert_eq!(value["date"], "2025-03-01");
        assert!(value["imageUri"].is_null());
        assert!(value["ingredients"].is_null());
        assert_eq!(value["steps"][1], "Stir-fry");
    }

    #[test]
    fn test_empty_optional_strings_read_as_none() {
        let json = r#"{"id":1,"name":"Kung Pao Chicken","imageUri":"","price":"28",
            "date":"2024-01-01","remark":"","steps":["Marinate"],"category":"荤菜",
            "ingredients":""}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.image_uri, None);
        assert_eq!(dish.main_ingredients, None);
        assert_eq!(dish.remark, "");

        let json = r#"{"id":1,"name":"x","imageUri":"content://media/1","price":"1",
            "date":"2024-01-01","remark":"","steps":[],"category":"","ingredients":null}"#;
        let dish: Dish = serde_json::from_str(json).unwrap();
        assert_eq!(dish.image_uri.as_deref(), Some("content://media/1"));
        assert_eq!(dish.main_ingredients, None);
    }

    #[test]
    fn test_from_dish_round_trips_through_form() {
        let mut dish = draft().into_dish(9, "2024-12-31".to_string()).unwrap();
        dish.image_uri = Some("content://media/9".to_string());
        dish.main_ingredients = Some("chicken, peanuts".to_string());

        let again = DishDraft::from_dish(&dish)
            .into_dish(dish.id, dish.first_made_date.clone())
            .unwrap();
        assert_eq!(again, dish);
    }
}
