//! Infrastructure layer: item storage backends and configuration.

pub mod config;
pub mod item_store;
