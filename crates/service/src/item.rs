use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A catalog item as stored and served. The id is assigned exclusively by the
/// store at add time; clients never supply one.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub price: i64,
}

/// Create input model: no id, the store generates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemInput {
    pub name: String,
    pub brand: String,
    pub price: i64,
}

impl ItemInput {
    /// Validity is a pure function of the three fields: non-empty name and
    /// brand, strictly positive price.
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.is_empty() {
            return Err(ServiceError::Validation("name must not be empty".into()));
        }
        if self.brand.is_empty() {
            return Err(ServiceError::Validation("brand must not be empty".into()));
        }
        if self.price <= 0 {
            return Err(ServiceError::Validation("price must be positive".into()));
        }
        Ok(())
    }

    pub fn into_item(self, id: u64) -> Item {
        Item { id, name: self.name, brand: self.brand, price: self.price }
    }
}
