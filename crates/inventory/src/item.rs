use serde::{Deserialize, Serialize};
use thiserror::Error;

use stockroom_core::{ItemId, ValueObject};

/// Reasons an item name is rejected.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("name cannot be empty")]
    Empty,

    #[error("name must only contain alphabetic characters")]
    NotAlphabetic,
}

/// Item name: non-empty, ASCII letters only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, NameError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if !raw.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(NameError::NotAlphabetic);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = NameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An item as submitted by a client: everything except the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: ItemName,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl NewItem {
    pub fn new(name: ItemName, quantity: i64, unit_price: f64) -> Self {
        Self {
            name,
            quantity,
            unit_price,
        }
    }

    /// Attach a store-assigned id.
    pub fn with_id(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// One inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "ID")]
    pub id: ItemId,
    pub name: ItemName,
    pub quantity: i64,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl Item {
    /// Replace every field except the id.
    pub fn replace_with(&mut self, replacement: NewItem) {
        self.name = replacement.name;
        self.quantity = replacement.quantity;
        self.unit_price = replacement.unit_price;
    }

    /// Strip the id, e.g. to compare against the submitted payload.
    pub fn to_new_item(&self) -> NewItem {
        NewItem::new(self.name.clone(), self.quantity, self.unit_price)
    }
}
