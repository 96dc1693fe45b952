//! Application state coordinator.
//!
//! [`DishDiary`] owns the loaded collections, the cart, the filter inputs and the active
//! [`Screen`]. Every mutation updates memory first and then rewrites the affected
//! collection in full. A failed write is logged and returned, but the in-memory state
//! keeps the change, matching the last-write-wins behaviour of a single local user.

use crate::{
    core::{Cart, IdGenerator, catalog, categories, orders},
    errors::{Error, Result},
    models::{Customization, Dish, DishDraft, Order, OrderItem, Review},
    store::{DishStore, KeyValueStore},
};
use tracing::{error, info, instrument};

/// Format of an order's creation timestamp
pub const ORDER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format of a dish's first-made date
pub const DISH_DATE_FORMAT: &str = "%Y-%m-%d";

/// The single active screen, carrying whatever that screen needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    /// Filterable dish catalog with the cart bar
    #[default]
    Main,
    /// Read-only view of one dish
    DishDetail {
        /// Dish being viewed
        dish_id: i64,
    },
    /// Add form (`editing: None`) or edit form for an existing dish
    EditDish {
        /// Snapshot of the dish being edited
        editing: Option<Dish>,
    },
    /// Customization dialog for adding a dish to the cart
    Customize {
        /// Dish being added
        dish_id: i64,
        /// Choices made so far
        customization: Customization,
    },
    /// Category management
    Categories,
    /// Order history list
    History,
    /// One order with its review
    OrderDetail {
        /// Order being viewed
        order_id: i64,
    },
}

/// Loaded diary state bound to a store.
#[derive(Debug)]
pub struct DishDiary<S> {
    store: DishStore<S>,
    ids: IdGenerator,
    dishes: Vec<Dish>,
    categories: Vec<String>,
    orders: Vec<Order>,
    cart: Cart,
    selected_category: String,
    search_query: String,
    screen: Screen,
}

impl<S: KeyValueStore + Sync> DishDiary<S> {
    /// Loads all three collections. The first category becomes the selected filter.
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be read.
    #[instrument(skip(store))]
    pub async fn load(store: DishStore<S>) -> Result<Self> {
        let dishes = store.load_dishes().await?;
        let categories = store.load_categories().await?;
        let orders = store.load_orders().await?;
        let ids = IdGenerator::seeded(
            dishes
                .iter()
                .map(|d| d.id)
                .chain(orders.iter().map(|o| o.id)),
        );
        info!(
            "Loaded {} dishes, {} categories, {} orders",
            dishes.len(),
            categories.len(),
            orders.len()
        );
        Ok(Self {
            store,
            ids,
            selected_category: categories.first().cloned().unwrap_or_default(),
            dishes,
            categories,
            orders,
            cart: Cart::new(),
            search_query: String::new(),
            screen: Screen::Main,
        })
    }

    /// The whole catalog, in insertion order
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Category names, in display order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Order history, newest first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Items waiting to be ordered
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The screen currently shown
    pub const fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Category filter on the main screen; empty means all
    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    /// Search text on the main screen
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Backing store
    pub const fn store(&self) -> &DishStore<S> {
        &self.store
    }

    /// Dishes matching the current category and search query
    pub fn visible_dishes(&self) -> Vec<&Dish> {
        catalog::filter_dishes(&self.dishes, &self.selected_category, &self.search_query)
    }

    /// Sets the category filter; an empty string shows every category.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Switches screens directly, e.g. back to [`Screen::Main`].
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
    }

    /// Opens the dish detail screen.
    ///
    /// # Errors
    /// Returns `Error::DishNotFound` if the dish is not in the catalog.
    pub fn open_dish(&mut self, dish_id: i64) -> Result<()> {
        self.require_dish(dish_id)?;
        self.screen = Screen::DishDetail { dish_id };
        Ok(())
    }

    /// Opens the add form, or the edit form pre-filled from `dish_id`.
    ///
    /// # Errors
    /// Returns `Error::DishNotFound` if `dish_id` is set but unknown.
    pub fn open_editor(&mut self, dish_id: Option<i64>) -> Result<DishDraft> {
        let editing = dish_id.map(|id| self.require_dish(id).cloned()).transpose()?;
        let draft = editing.as_ref().map_or_else(
            || DishDraft {
                category: self.categories.first().cloned().unwrap_or_default(),
                ..Default::default()
            },
            DishDraft::from_dish,
        );
        self.screen = Screen::EditDish { editing };
        Ok(draft)
    }

    /// Opens the customization dialog for a dish with default choices.
    ///
    /// # Errors
    /// Returns `Error::DishNotFound` if the dish is not in the catalog.
    pub fn open_customization(&mut self, dish_id: i64) -> Result<()> {
        self.require_dish(dish_id)?;
        self.screen = Screen::Customize {
            dish_id,
            customization: Customization::default(),
        };
        Ok(())
    }

    /// Opens one order's detail screen.
    ///
    /// # Errors
    /// Returns `Error::OrderNotFound` if the order is not in the history.
    pub fn open_order(&mut self, order_id: i64) -> Result<()> {
        if orders::find_order(&self.orders, order_id).is_none() {
            return Err(Error::OrderNotFound { id: order_id });
        }
        self.screen = Screen::OrderDetail { order_id };
        Ok(())
    }

    /// Saves the form. Adds a new dish unless the edit screen holds one being edited,
    /// in which case that dish is replaced. Returns to the main screen.
    ///
    /// # Errors
    /// Returns `Error::Validation` for a blank name or price (nothing is saved), or a
    /// storage error if the catalog could not be written.
    #[instrument(skip(self, draft))]
    pub async fn save_dish(&mut self, draft: DishDraft) -> Result<i64> {
        let editing = match &self.screen {
            Screen::EditDish { editing } => editing.as_ref(),
            _ => None,
        };
        let today = chrono::Local::now().format(DISH_DATE_FORMAT).to_string();
        let dish = catalog::build_dish(draft, editing, &self.ids, &today)?;
        let id = dish.id;

        catalog::upsert_dish(&mut self.dishes, dish);
        self.screen = Screen::Main;
        self.persist_dishes().await?;
        Ok(id)
    }

    /// Deletes a dish from the catalog; past orders keep their snapshot.
    ///
    /// # Errors
    /// Returns `Error::DishNotFound` or a storage error.
    #[instrument(skip(self))]
    pub async fn delete_dish(&mut self, dish_id: i64) -> Result<()> {
        catalog::delete_dish(&mut self.dishes, dish_id)?;
        self.screen = Screen::Main;
        self.persist_dishes().await
    }

    /// Adds a category; blank names are ignored.
    ///
    /// # Errors
    /// Returns a storage error if the category list could not be written.
    pub async fn add_category(&mut self, name: &str) -> Result<()> {
        if categories::add_category(&mut self.categories, name) {
            self.persist_categories().await?;
        }
        Ok(())
    }

    /// Removes a category without touching dishes that use it.
    ///
    /// # Errors
    /// Returns a storage error if the category list could not be written.
    pub async fn remove_category(&mut self, name: &str) -> Result<()> {
        if categories::remove_category(&mut self.categories, name) > 0 {
            self.persist_categories().await?;
        }
        Ok(())
    }

    /// Applies `update` to the open customization dialog's choices.
    /// Does nothing when the dialog is not open.
    pub fn customize(&mut self, update: impl FnOnce(&mut Customization)) {
        if let Screen::Customize { customization, .. } = &mut self.screen {
            update(customization);
        }
    }

    /// Confirms the customization dialog, putting a snapshot of the dish into the cart.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the dialog is not open, or `Error::DishNotFound`
    /// if the dish disappeared meanwhile.
    pub fn confirm_customization(&mut self) -> Result<()> {
        let Screen::Customize {
            dish_id,
            customization,
        } = &self.screen
        else {
            return Err(Error::Validation {
                message: "No dish is being customized".to_string(),
            });
        };
        let item = customization.apply_to(self.require_dish(*dish_id)?);
        self.cart.add(item);
        self.screen = Screen::Main;
        Ok(())
    }

    /// Removes one matching entry from the cart.
    pub fn remove_from_cart(&mut self, item: &OrderItem) -> bool {
        self.cart.remove(item)
    }

    /// Submits the cart as a new order and opens its detail screen.
    ///
    /// # Errors
    /// Returns `Error::EmptyCart`, `Error::IdSpaceExhausted`, or a storage error.
    #[instrument(skip(self))]
    pub async fn place_order(&mut self) -> Result<i64> {
        let timestamp = chrono::Local::now()
            .format(ORDER_TIMESTAMP_FORMAT)
            .to_string();
        let id = orders::place_order(&mut self.orders, &mut self.cart, &self.ids, timestamp)?;
        self.screen = Screen::OrderDetail { order_id: id };
        self.persist_orders().await?;
        Ok(id)
    }

    /// Records a review for an order and marks it completed.
    ///
    /// # Errors
    /// Returns `Error::InvalidRating`, `Error::OrderNotFound`, or a storage error.
    #[instrument(skip(self, review))]
    pub async fn complete_order(&mut self, order_id: i64, review: Review) -> Result<()> {
        orders::complete_order(&mut self.orders, order_id, review)?;
        self.persist_orders().await
    }

    /// Deletes an order from the history. Leaves its detail screen if it was open.
    ///
    /// # Errors
    /// Returns `Error::OrderNotFound` or a storage error.
    #[instrument(skip(self))]
    pub async fn delete_order(&mut self, order_id: i64) -> Result<()> {
        orders::delete_order(&mut self.orders, order_id)?;
        if self.screen == (Screen::OrderDetail { order_id }) {
            self.screen = Screen::History;
        }
        self.persist_orders().await
    }

    fn require_dish(&self, dish_id: i64) -> Result<&Dish> {
        catalog::find_dish(&self.dishes, dish_id).ok_or(Error::DishNotFound { id: dish_id })
    }

    async fn persist_dishes(&self) -> Result<()> {
        self.store
            .save_dishes(&self.dishes)
            .await
            .inspect_err(|e| error!("Failed to save dishes: {}", e))
    }

    async fn persist_categories(&self) -> Result<()> {
        self.store
            .save_categories(&self.categories)
            .await
            .inspect_err(|e| error!("Failed to save categories: {}", e))
    }

    async fn persist_orders(&self) -> Result<()> {
        self.store
            .save_orders(&self.orders)
            .await
            .inspect_err(|e| error!("Failed to save orders: {}", e))
    }
}
