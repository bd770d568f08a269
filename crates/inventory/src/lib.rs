//! Inventory item model.
//!
//! This crate holds the item record and the rules a request body must satisfy
//! to become one (no IO, no HTTP, no storage).

pub mod item;

pub use item::{Item, ItemFields};
