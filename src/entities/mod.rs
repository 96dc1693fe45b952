//! Entity module - `SeaORM` entity definitions for the database.
//! The diary keeps all of its state in a single key/value table.

pub mod kv_entry;

pub use kv_entry::{Column as KvEntryColumn, Entity as KvEntry, Model as KvEntryModel};
