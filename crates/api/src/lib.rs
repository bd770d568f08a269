//! HTTP API: routing, request validation and response mapping for the item
//! collection.

pub mod app;
