//! Unified error type for the dish diary.

use thiserror::Error;

/// Errors raised by the store, the list operations and the coordinator.
#[derive(Debug, Error)]
pub enum Error {
    /// Settings could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// Underlying key/value storage failed
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A collection could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading a settings file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An override variable is set but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// No dish with this id in the catalog
    #[error("Dish not found: {id}")]
    DishNotFound {
        /// Requested dish id
        id: i64,
    },

    /// No order with this id in the history
    #[error("Order not found: {id}")]
    OrderNotFound {
        /// Requested order id
        id: i64,
    },

    /// Review ratings are whole stars from 0 to 5
    #[error("Invalid rating: {rating} (expected 0-5)")]
    InvalidRating {
        /// Rejected rating
        rating: u8,
    },

    /// Orders need at least one item
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// The last issued id is already `i64::MAX`
    #[error("Id space exhausted after {last}")]
    IdSpaceExhausted {
        /// Highest id handed out so far
        last: i64,
    },

    /// Form input rejected before it reached the catalog
    #[error("Validation error: {message}")]
    Validation {
        /// Which field was rejected
        message: String,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
