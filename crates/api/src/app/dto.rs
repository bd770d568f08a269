use serde::Serialize;

use shelf_core::ItemId;
use shelf_infra::item_store::DeleteAllReport;
use shelf_inventory::ItemFields;

// -------------------------
// User-facing messages
// -------------------------

pub const RESPONSE_ERROR: &str = "Ups... Something went wrong! 😟";
pub const RESPONSE_HINT: &str =
    "Check the item object => {name: STRING, type: STRING, price: NUMBER, amount: NUMBER}";
pub const RESPONSE_NOT_FOUND: &str = "Ups... This route doesn't exist 😯";
pub const RESPONSE_ITEM_NOT_FOUND: &str = "This item doesn't exist in the database 😅";
pub const RESPONSE_CREATE_SUCCESS: &str = "Successfully created 😄!";
pub const RESPONSE_UPDATE_SUCCESS: &str = "Successfully updated 🙂!";
pub const RESPONSE_DELETE_SUCCESS: &str = "Successfully deleted 😶‍🌫️!";

// -------------------------
// Response DTOs
// -------------------------

/// `{message, id}`: create and single delete.
#[derive(Debug, Serialize)]
pub struct ItemAck {
    pub message: &'static str,
    pub id: ItemId,
}

impl ItemAck {
    pub fn created(id: ItemId) -> Self {
        Self {
            message: RESPONSE_CREATE_SUCCESS,
            id,
        }
    }

    pub fn deleted(id: ItemId) -> Self {
        Self {
            message: RESPONSE_DELETE_SUCCESS,
            id,
        }
    }
}

/// `{message, id, item}` where `item` carries no id.
#[derive(Debug, Serialize)]
pub struct ItemUpdated {
    pub message: &'static str,
    pub id: ItemId,
    pub item: ItemFields,
}

impl ItemUpdated {
    pub fn new(id: ItemId, item: ItemFields) -> Self {
        Self {
            message: RESPONSE_UPDATE_SUCCESS,
            id,
            item,
        }
    }
}

/// `{message, deleted, failed}` for the bulk delete.
#[derive(Debug, Serialize)]
pub struct BulkDeleted {
    pub message: &'static str,
    #[serde(flatten)]
    pub report: DeleteAllReport,
}

impl BulkDeleted {
    pub fn new(report: DeleteAllReport) -> Self {
        let message = if report.is_complete() {
            RESPONSE_DELETE_SUCCESS
        } else {
            RESPONSE_ERROR
        };
        Self { message, report }
    }
}
