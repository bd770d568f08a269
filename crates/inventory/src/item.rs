use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shelf_core::{DomainError, DomainResult, Entity, ItemId};

/// The four user-editable fields of an item, without its identifier.
///
/// This is what create/update accept (after coercion) and what a by-id lookup
/// returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub price: f64,
    pub amount: i64,
}

impl ItemFields {
    /// Validate a raw JSON request body and coerce it into item fields.
    ///
    /// `name` and `type` must be strings (`name` non-empty), `price` and
    /// `amount` must be numbers. `amount` is truncated toward zero, so `3.9`
    /// is stored as `3`. Unknown keys are ignored.
    pub fn from_json(body: &Value) -> DomainResult<Self> {
        let obj = body
            .as_object()
            .ok_or_else(|| DomainError::validation("body must be a JSON object"))?;

        let name = required_str(obj, "name")?;
        if name.is_empty() {
            return Err(DomainError::validation("name must not be empty"));
        }
        let item_type = required_str(obj, "type")?;
        let price = required_number(obj, "price")?
            .as_f64()
            .ok_or_else(|| DomainError::validation("price must be a number"))?;
        let amount = coerce_amount(required_number(obj, "amount")?)?;

        Ok(Self {
            name: name.to_string(),
            item_type: item_type.to_string(),
            price,
            amount,
        })
    }
}

fn required_str<'a>(obj: &'a Map<String, Value>, field: &str) -> DomainResult<&'a str> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(DomainError::validation(format!("{field} must be a string"))),
        None => Err(DomainError::validation(format!("{field} is required"))),
    }
}

fn required_number<'a>(
    obj: &'a Map<String, Value>,
    field: &str,
) -> DomainResult<&'a serde_json::Number> {
    match obj.get(field) {
        Some(Value::Number(n)) => Ok(n),
        Some(_) => Err(DomainError::validation(format!("{field} must be a number"))),
        None => Err(DomainError::validation(format!("{field} is required"))),
    }
}

fn coerce_amount(n: &serde_json::Number) -> DomainResult<i64> {
    if let Some(v) = n.as_i64() {
        return Ok(v);
    }

    // Either a float or an unsigned integer above i64::MAX.
    let out_of_range = || DomainError::validation("amount is out of range");
    if n.is_u64() {
        return Err(out_of_range());
    }
    let f = n.as_f64().ok_or_else(out_of_range)?.trunc();
    if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(out_of_range());
    }
    Ok(f as i64)
}

/// A persisted item: storage-assigned id plus its fields.
///
/// Serializes flat as `{id, name, type, price, amount}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
}

impl Item {
    pub fn new(id: ItemId, fields: ItemFields) -> Self {
        Self { id, fields }
    }

    pub fn into_fields(self) -> ItemFields {
        self.fields
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
