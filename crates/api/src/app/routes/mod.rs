use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod items;
pub mod system;

/// Router for every endpoint. Unknown paths and unsupported methods on known
/// paths both answer with the route-not-found payload.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health).fallback(system::route_not_found))
        .route("/getItems", get(items::list_items).fallback(system::route_not_found))
        .route("/getItem/:id", get(items::get_item).fallback(system::route_not_found))
        .route("/createItem", post(items::create_item).fallback(system::route_not_found))
        .route("/updateItem/:id", put(items::update_item).fallback(system::route_not_found))
        .route("/deleteItem/:id", delete(items::delete_item).fallback(system::route_not_found))
        .route(
            "/deleteAllItems",
            delete(items::delete_all_items).fallback(system::route_not_found),
        )
        .fallback(system::route_not_found)
}
