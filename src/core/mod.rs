//! Core logic - framework-agnostic list operations over dishes, categories, the cart
//! and order history. Nothing in here performs I/O.

pub mod cart;
pub mod catalog;
pub mod categories;
pub mod ids;
pub mod orders;

pub use cart::Cart;
pub use ids::IdGenerator;
