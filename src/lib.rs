//! Stockroom: embedded retail inventory ledger.
//!
//! A single stock pool shared by in-store and online sales channels:
//! recording a sale and decrementing stock happen as one unit, and stock
//! can never go negative no matter how many callers sell concurrently.
//!
//! ## Features
//! - Product catalog management
//! - Stock table with non-negative on-hand quantities
//! - Append-only per-channel sale streams
//! - Channel-uniform, constraint-checked stock decrements
//! - Inventory and sales summary joins

use thiserror::Error;
use uuid::Uuid;

pub mod domain;
pub mod ledger;

pub use domain::aggregates::{Product, ProductDraft, SaleChannel, SaleRecord};
pub use domain::events::{DomainEvent, ProductEvent, SaleEvent, StockEvent};
pub use domain::value_objects::{Money, Quantity};
pub use ledger::journal::{JournalError, MemoryJournal, SaleJournal};
pub use ledger::report::{InventoryRow, SalesReportRow};
pub use ledger::InventoryLedger;

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Product {0} not found")]
    NotFound(Uuid),

    #[error("Insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: Uuid,
        requested: u32,
        available: u32,
    },

    #[error("Storage error: {0}")]
    Storage(String),
}

impl InventoryError {
    /// Units missing to satisfy a rejected sale, when that is what failed.
    pub fn shortfall(&self) -> Option<u32> {
        match self {
            Self::InsufficientStock {
                requested,
                available,
                ..
            } => Some(requested.saturating_sub(*available)),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
