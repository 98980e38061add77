use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Storage-assigned product identifier.
pub type ProductId = i64;

/// Writable fields of a product, as received from a caller.
///
/// For updates a zero/empty field means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub quantity: i32,
    /// Smallest currency unit.
    pub price: i64,
}

impl ProductInput {
    /// Checks the rules in a fixed order and stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.price <= 0 {
            return Err(ValidationError::PriceNotPositive);
        }
        if self.quantity <= 0 {
            return Err(ValidationError::QuantityNotPositive);
        }
        if self.description.is_empty() {
            return Err(ValidationError::DescriptionRequired);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub quantity: i32,
    pub price: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// `None` while the product is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    pub fn to_input(&self) -> ProductInput {
        ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }

    /// Field-level partial merge: every non-empty/non-zero field of `changes`
    /// overwrites the current value, the rest is kept. The result is not
    /// validated here.
    pub fn merged_with(&self, changes: &ProductInput) -> ProductInput {
        let mut merged = self.to_input();
        if !changes.name.is_empty() {
            merged.name = changes.name.clone();
        }
        if changes.price != 0 {
            merged.price = changes.price;
        }
        if changes.quantity != 0 {
            merged.quantity = changes.quantity;
        }
        if !changes.description.is_empty() {
            merged.description = changes.description.clone();
        }
        merged
    }
}
