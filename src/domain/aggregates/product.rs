//! Product Aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::value_objects::Money;
use crate::{InventoryError, Result};

/// Validated input for adding a product to the catalog.
#[derive(Clone, Debug, Validate)]
pub struct ProductDraft {
    #[validate(length(min = 1, message = "product name must not be empty"))]
    pub name: String,
    #[validate(custom = "price_not_negative")]
    pub price: Money,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into().trim().to_string(),
            price,
        }
    }
}

fn price_not_negative(price: &Money) -> std::result::Result<(), validator::ValidationError> {
    if price.is_negative() {
        return Err(validator::ValidationError::new("negative_price"));
    }
    Ok(())
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    id: Uuid,
    name: String,
    price: Money,
    available: bool,
    created_at: DateTime<Utc>,
}

impl Product {
    pub fn create(draft: ProductDraft) -> Result<Self> {
        draft
            .validate()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;
        Ok(Self {
            id: Uuid::now_v7(),
            name: draft.name,
            price: draft.price,
            available: true,
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn price(&self) -> &Money {
        &self.price
    }
    pub fn is_available(&self) -> bool {
        self.available
    }
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_product_create() {
        let p = Product::create(ProductDraft::new(
            "  Widget  ",
            Money::usd(Decimal::new(1999, 2)),
        ))
        .unwrap();
        assert_eq!(p.name(), "Widget");
        assert!(p.is_available());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Product::create(ProductDraft::new("", Money::usd(Decimal::new(10, 0)))).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
        let err =
            Product::create(ProductDraft::new("   ", Money::usd(Decimal::new(10, 0)))).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn test_negative_price_rejected() {
        let err =
            Product::create(ProductDraft::new("Widget", Money::usd(Decimal::new(-1, 0)))).unwrap_err();
        assert!(matches!(err, InventoryError::Validation(_)));
    }

    #[test]
    fn test_zero_price_allowed() {
        assert!(Product::create(ProductDraft::new("Freebie", Money::zero("USD"))).is_ok());
    }
}
