//! Per-order preference enumerations and the customization builder.
//!
//! Each enum is stored by its symbolic name (`"NORMAL"`, `"NO_GARLIC"`, ...), never by
//! its display label or ordinal, so labels can change freely without breaking stored data.

use super::dish::Dish;
use super::order::OrderItem;
use serde::{Deserialize, Serialize};

/// How much oil the dish should be cooked with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OilLevel {
    /// Regular amount of oil
    #[default]
    Normal,
    /// Reduced oil
    Less,
    /// Boiled instead of fried
    Boiled,
}

impl OilLevel {
    /// Every oil level in display order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Less, Self::Boiled];

    /// Human-readable label shown in the picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "正常",
            Self::Less => "少油",
            Self::Boiled => "水煮",
        }
    }
}

/// Ingredients the diner wants left out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DietaryRestriction {
    /// No restriction; selecting it clears all others
    None,
    /// Leave out spring onion
    NoOnion,
    /// Leave out garlic
    NoGarlic,
    /// Leave out ginger
    NoGinger,
}

impl DietaryRestriction {
    /// Every restriction in display order
    pub const ALL: [Self; 4] = [Self::None, Self::NoOnion, Self::NoGarlic, Self::NoGinger];

    /// Human-readable label shown in the picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "无",
            Self::NoOnion => "去葱",
            Self::NoGarlic => "去蒜",
            Self::NoGinger => "去姜",
        }
    }
}

/// How spicy the dish should be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpicyLevel {
    /// Mildly spicy
    #[default]
    Mild,
    /// Medium heat
    Medium,
    /// Numbing and hot
    Extra,
}

impl SpicyLevel {
    /// Every spice level in display order
    pub const ALL: [Self; 3] = [Self::Mild, Self::Medium, Self::Extra];

    /// Human-readable label shown in the picker
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mild => "微辣",
            Self::Medium => "中辣",
            Self::Extra => "麻辣",
        }
    }
}

/// Choices made in the customization dialog before a dish goes into the cart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Customization {
    /// Selected oil level
    pub oil_level: OilLevel,
    /// Selected spice level
    pub spicy: SpicyLevel,
    dietaries: Vec<DietaryRestriction>,
}

impl Customization {
    /// Starts a customization with the given oil and spice levels and no restrictions.
    #[must_use]
    pub const fn new(oil_level: OilLevel, spicy: SpicyLevel) -> Self {
        Self {
            oil_level,
            spicy,
            dietaries: Vec::new(),
        }
    }

    /// Restrictions selected so far, in the order they were picked
    #[must_use]
    pub fn dietaries(&self) -> &[DietaryRestriction] {
        &self.dietaries
    }

    /// Whether `restriction` shows as selected. `None` is selected exactly when
    /// nothing else is.
    #[must_use]
    pub fn is_selected(&self, restriction: DietaryRestriction) -> bool {
        match restriction {
            DietaryRestriction::None => self.dietaries.is_empty(),
            other => self.dietaries.contains(&other),
        }
    }

    /// Toggles a restriction. `None` clears the selection; anything else flips membership.
    pub fn toggle(&mut self, restriction: DietaryRestriction) {
        if restriction == DietaryRestriction::None {
            self.dietaries.clear();
        } else if let Some(pos) = self.dietaries.iter().position(|r| *r == restriction) {
            self.dietaries.remove(pos);
        } else {
            self.dietaries.push(restriction);
        }
    }

    /// Snapshots `dish` together with these choices into a cart item.
    #[must_use]
    pub fn apply_to(&self, dish: &Dish) -> OrderItem {
        OrderItem {
            dish_id: dish.id,
            dish_name: dish.name.clone(),
            dish_image: dish.image_uri.clone(),
            oil_level: self.oil_level,
            dietaries: self.dietaries.clone(),
            spicy: self.spicy,
            steps: dish.steps.clone(),
        }
    }
}
