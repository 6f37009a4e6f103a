//! Stock table: ProductID → on-hand quantity

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

use crate::domain::value_objects::Quantity;
use crate::{InventoryError, Result};

/// Result of a committed stock decrement.
#[derive(Clone, Copy, Debug)]
pub struct DecrementOutcome {
    pub remaining: u32,
    pub depleted: bool,
}

/// At most one entry per product; absence of an entry means zero stock,
/// not an unknown product (the catalog owns existence).
///
/// Entries are deleted the moment they reach exactly 0, so "no row" and
/// "zero quantity" stay interchangeable by construction.
#[derive(Debug, Default)]
pub struct StockTable {
    pub(crate) entries: RwLock<HashMap<Uuid, Quantity>>,
    // TODO: reap guard entries for ids that never ended up holding stock
    locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl StockTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialization guard for one product. Every check-then-mutate
    /// sequence on a product's entry runs under this mutex; entries for
    /// different products stay independent.
    pub(crate) async fn product_guard(&self, product_id: Uuid) -> Arc<Mutex<()>> {
        self.locks
            .lock()
            .await
            .entry(product_id)
            .or_default()
            .clone()
    }

    /// On-hand quantity; 0 when no entry exists.
    pub async fn quantity(&self, product_id: Uuid) -> u32 {
        self.entries
            .read()
            .await
            .get(&product_id)
            .map(Quantity::value)
            .unwrap_or(0)
    }

    pub async fn has_entry(&self, product_id: Uuid) -> bool {
        self.entries.read().await.contains_key(&product_id)
    }

    /// Adds stock, creating the entry if missing. Returns the new total.
    /// Callers hold the product guard.
    pub(crate) async fn add(&self, product_id: Uuid, quantity: u32) -> u32 {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(product_id).or_default();
        *entry = entry.add(quantity);
        entry.value()
    }

    /// Decrements an entry, removing it when it reaches exactly 0.
    ///
    /// Availability is re-read under the write lock; with the product
    /// guard held this only diverges from the caller's check when an
    /// administrative wipe ran in between, and the sale then fails clean.
    pub(crate) async fn commit_decrement(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<DecrementOutcome> {
        let mut entries = self.entries.write().await;
        let remaining = match entries.get(&product_id).and_then(|q| q.subtract(quantity)) {
            Some(q) => q,
            None => {
                let available = entries
                    .get(&product_id)
                    .map(Quantity::value)
                    .unwrap_or(0);
                return Err(InventoryError::InsufficientStock {
                    product_id,
                    requested: quantity,
                    available,
                });
            }
        };
        if remaining.is_zero() {
            entries.remove(&product_id);
            Ok(DecrementOutcome {
                remaining: 0,
                depleted: true,
            })
        } else {
            let value = remaining.value();
            entries.insert(product_id, remaining);
            Ok(DecrementOutcome {
                remaining: value,
                depleted: false,
            })
        }
    }

    /// Locks every product guard, in id order. The administrative wipe
    /// uses this to quiesce in-flight mutations before clearing.
    pub(crate) async fn lock_all_products(&self) -> Vec<OwnedMutexGuard<()>> {
        let mut guards: Vec<(Uuid, Arc<Mutex<()>>)> = self
            .locks
            .lock()
            .await
            .iter()
            .map(|(id, m)| (*id, Arc::clone(m)))
            .collect();
        guards.sort_by_key(|(id, _)| *id);
        let mut held = Vec::with_capacity(guards.len());
        for (_, m) in guards {
            held.push(m.lock_owned().await);
        }
        held
    }

    pub(crate) async fn clear_guards(&self) {
        self.locks.lock().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_entry_reads_zero() {
        let stock = StockTable::new();
        let id = Uuid::now_v7();
        assert_eq!(stock.quantity(id).await, 0);
        assert!(!stock.has_entry(id).await);
    }

    #[tokio::test]
    async fn test_add_accumulates() {
        let stock = StockTable::new();
        let id = Uuid::now_v7();
        assert_eq!(stock.add(id, 10).await, 10);
        assert_eq!(stock.add(id, 5).await, 15);
        assert_eq!(stock.quantity(id).await, 15);
    }

    #[tokio::test]
    async fn test_decrement_keeps_remainder() {
        let stock = StockTable::new();
        let id = Uuid::now_v7();
        stock.add(id, 10).await;
        let outcome = stock.commit_decrement(id, 4).await.unwrap();
        assert_eq!(outcome.remaining, 6);
        assert!(!outcome.depleted);
        assert!(stock.has_entry(id).await);
    }

    #[tokio::test]
    async fn test_decrement_to_zero_removes_entry() {
        let stock = StockTable::new();
        let id = Uuid::now_v7();
        stock.add(id, 10).await;
        let outcome = stock.commit_decrement(id, 10).await.unwrap();
        assert!(outcome.depleted);
        assert_eq!(outcome.remaining, 0);
        assert!(!stock.has_entry(id).await);
        assert_eq!(stock.quantity(id).await, 0);
    }

    #[tokio::test]
    async fn test_insufficient_decrement_mutates_nothing() {
        let stock = StockTable::new();
        let id = Uuid::now_v7();
        stock.add(id, 3).await;
        let err = stock.commit_decrement(id, 7).await.unwrap_err();
        assert!(matches!(
            err,
            InventoryError::InsufficientStock {
                requested: 7,
                available: 3,
                ..
            }
        ));
        assert_eq!(stock.quantity(id).await, 3);
    }
}
