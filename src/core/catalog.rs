//! Dish catalog operations - filtering, saving from the form, and deleting.
//!
//! All functions are pure: they take the current list and return or mutate it in memory.
//! Persisting the result is the caller's job.

use super::ids::IdGenerator;
use crate::{
    errors::{Error, Result},
    models::{Dish, DishDraft},
};

/// Dishes in `category` (or any category when `category` is empty) whose name contains
/// `query`, ignoring case. Catalog order is preserved.
#[must_use]
pub fn filter_dishes<'a>(dishes: &'a [Dish], category: &str, query: &str) -> Vec<&'a Dish> {
    let query = query.to_lowercase();
    dishes
        .iter()
        .filter(|d| category.is_empty() || d.category == category)
        .filter(|d| d.name.to_lowercase().contains(&query))
        .collect()
}

/// Finds a dish by id.
#[must_use]
pub fn find_dish(dishes: &[Dish], id: i64) -> Option<&Dish> {
    dishes.iter().find(|d| d.id == id)
}

/// Builds a dish from the form.
///
/// When `editing` is set the dish keeps its id and first-made date; otherwise it gets a
/// fresh id and `today` as its first-made date.
///
/// # Errors
/// Returns `Error::Validation` if the draft's name or price is blank, or
/// `Error::IdSpaceExhausted` if a new dish cannot get an id.
pub fn build_dish(
    draft: DishDraft,
    editing: Option<&Dish>,
    ids: &IdGenerator,
    today: &str,
) -> Result<Dish> {
    match editing {
        Some(existing) => draft.into_dish(existing.id, existing.first_made_date.clone()),
        None => draft.into_dish(ids.next_id()?, today.to_string()),
    }
}

/// Replaces the dish with the same id in place, or appends it if it is new.
pub fn upsert_dish(dishes: &mut Vec<Dish>, dish: Dish) {
    if let Some(slot) = dishes.iter_mut().find(|d| d.id == dish.id) {
        *slot = dish;
    } else {
        dishes.push(dish);
    }
}

/// Removes the dish with `id`. Orders that snapshot it are unaffected.
///
/// # Errors
/// Returns `Error::DishNotFound` if no dish has that id.
pub fn delete_dish(dishes: &mut Vec<Dish>, id: i64) -> Result<Dish> {
    let pos = dishes
        .iter()
        .position(|d| d.id == id)
        .ok_or(Error::DishNotFound { id })?;
    Ok(dishes.remove(pos))
}
