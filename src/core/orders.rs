//! Order history operations - placing, completing with a review, and deleting orders.

use super::{cart::Cart, ids::IdGenerator};
use crate::{
    errors::{Error, Result},
    models::{Order, Review},
};
use tracing::debug;

/// Highest star rating a review may carry
pub const MAX_RATING: u8 = 5;

/// Turns the cart into a new order at the front of `history` (newest first) and empties
/// the cart. Returns the new order's id.
///
/// # Errors
/// Returns `Error::EmptyCart` if there is nothing in the cart, or
/// `Error::IdSpaceExhausted` if no id is left. Cart and history are untouched on error.
pub fn place_order(
    history: &mut Vec<Order>,
    cart: &mut Cart,
    ids: &IdGenerator,
    timestamp: String,
) -> Result<i64> {
    if cart.is_empty() {
        return Err(Error::EmptyCart);
    }
    let id = ids.next_id()?;
    let order = Order::new(id, cart.take(), timestamp);
    debug!("Placing order {} with {} items", id, order.items.len());
    history.insert(0, order);
    Ok(id)
}

/// Finds an order by id.
#[must_use]
pub fn find_order(history: &[Order], id: i64) -> Option<&Order> {
    history.iter().find(|o| o.id == id)
}

/// Writes `review` into the order with `id` and marks it completed. No other order and
/// none of this order's items are touched. Review text that is empty or whitespace is
/// stored as no text.
///
/// # Errors
/// Returns `Error::InvalidRating` if the rating exceeds 5, or `Error::OrderNotFound` if
/// no order has that id.
pub fn complete_order(history: &mut [Order], id: i64, review: Review) -> Result<&Order> {
    if review.rating > MAX_RATING {
        return Err(Error::InvalidRating {
            rating: review.rating,
        });
    }
    let order = history
        .iter_mut()
        .find(|o| o.id == id)
        .ok_or(Error::OrderNotFound { id })?;

    order.review_images = review.images;
    order.review_text = review.text.filter(|t| !t.trim().is_empty());
    order.rating = review.rating;
    order.is_completed = true;
    Ok(&*order)
}

/// Removes the order with `id`.
///
/// # Errors
/// Returns `Error::OrderNotFound` if no order has that id.
pub fn delete_order(history: &mut Vec<Order>, id: i64) -> Result<Order> {
    let pos = history
        .iter()
        .position(|o| o.id == id)
        .ok_or(Error::OrderNotFound { id })?;
    Ok(history.remove(pos))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::models::Customization;
    use crate::test_utils::{sample_dish, sample_order};

    fn review(rating: u8) -> Review {
        Review {
            images: vec!["content://media/photo".to_string()],
            text: Some("Delicious".to_string()),
            rating,
        }
    }

    #[test]
    fn test_complete_targets_only_matching_order() {
        let dish = sample_dish(1, "Kung Pao Chicken", "荤菜");
        let mut history = vec![
            sample_order(1, std::slice::from_ref(&dish)),
            sample_order(2, std::slice::from_ref(&dish)),
            sample_order(3, std::slice::from_ref(&dish)),
        ];
        let before = history.clone();
        let a_text = serde_json::to_string(&history[0]).unwrap();
        let c_text = serde_json::to_string(&history[2]).unwrap();

        let completed = complete_order(&mut history, 2, review(4)).unwrap();
        assert!(completed.is_completed);
        assert_eq!(completed.rating, 4);
        assert_eq!(completed.review_text.as_deref(), Some("Delicious"));

        assert_eq!(history[1].items, before[1].items);
        assert_eq!(history[1].timestamp, before[1].timestamp);
        assert_eq!(serde_json::to_string(&history[0]).unwrap(), a_text);
        assert_eq!(serde_json::to_string(&history[2]).unwrap(), c_text);
    }

    #[test]
    fn test_complete_rejects_bad_rating_and_unknown_id() {
        let mut history = vec![sample_order(1, &[])];
        assert!(matches!(
            complete_order(&mut history, 1, review(6)),
            Err(Error::InvalidRating { rating: 6 })
        ));
        assert!(!history[0].is_completed);

        assert!(matches!(
            complete_order(&mut history, 99, review(5)),
            Err(Error::OrderNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_place_order_prepends_and_clears_cart() {
        let id_gen = IdGenerator::seeded([10]);
        let mut history = vec![sample_order(10, &[])];
        let mut cart = Cart::new();
        cart.add(Customization::default().apply_to(&sample_dish(1, "Fish", "荤菜")));

        let id = place_order(&mut history, &mut cart, &id_gen, "2025-03-01 18:30".to_string())
            .unwrap();

        assert!(cart.is_empty());
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, id);
        assert_eq!(history[0].items.len(), 1);
        assert!(!history[0].is_completed);
        assert_eq!(find_order(&history, id).map(|o| o.timestamp.as_str()), Some("2025-03-01 18:30"));
    }

    #[test]
    fn test_blank_review_text_is_stored_as_none() {
        let mut history = vec![sample_order(1, &[]), sample_order(2, &[])];
        let blank = Review {
            images: Vec::new(),
            text: Some("   ".to_string()),
            rating: 3,
        };
        let completed = complete_order(&mut history, 1, blank).unwrap();
        assert!(completed.is_completed);
        assert_eq!(completed.review_text, None);

        let empty = Review {
            text: Some(String::new()),
            ..review(2)
        };
        assert_eq!(complete_order(&mut history, 2, empty).unwrap().review_text, None);
    }

    #[test]
    fn test_place_order_without_ids_left_keeps_cart() {
        let id_gen = IdGenerator::seeded([i64::MAX]);
        let mut history = Vec::new();
        let mut cart = Cart::new();
        cart.add(Customization::default().apply_to(&sample_dish(1, "Fish", "荤菜")));

        assert!(matches!(
            place_order(&mut history, &mut cart, &id_gen, String::new()),
            Err(Error::IdSpaceExhausted { .. })
        ));
        assert_eq!(cart.len(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_place_order_with_empty_cart_fails() {
        let mut history = Vec::new();
        let mut cart = Cart::new();
        assert!(matches!(
            place_order(&mut history, &mut cart, &IdGenerator::new(), String::new()),
            Err(Error::EmptyCart)
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn test_delete_order() {
        let mut history = vec![sample_order(1, &[]), sample_order(2, &[])];
        assert_eq!(delete_order(&mut history, 1).unwrap().id, 1);
        assert_eq!(history.len(), 1);
        assert!(delete_order(&mut history, 1).is_err());
    }
}
