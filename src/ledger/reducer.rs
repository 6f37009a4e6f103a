//! Applies sale entries against the stock table

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::aggregates::SaleRecord;
use crate::ledger::journal::SaleJournal;
use crate::ledger::stock::{DecrementOutcome, StockTable};
use crate::ledger::stream::SaleStream;
use crate::{InventoryError, Result};

/// Runs the check-then-decrement sequence for every channel through one
/// code path.
///
/// The availability check, the journal write-ahead, the decrement and
/// the stream append all run under the product's guard: two concurrent
/// sales of the same product can never both observe the same
/// pre-decrement quantity, and a stream never holds a record whose
/// decrement did not commit.
pub(crate) struct InventoryReducer {
    stock: Arc<StockTable>,
    journal: Arc<dyn SaleJournal>,
}

impl InventoryReducer {
    pub(crate) fn new(stock: Arc<StockTable>, journal: Arc<dyn SaleJournal>) -> Self {
        Self { stock, journal }
    }

    /// Callers validate `record.quantity() > 0` before building the record.
    pub(crate) async fn apply_sale(
        &self,
        record: &SaleRecord,
        stream: &SaleStream,
    ) -> Result<DecrementOutcome> {
        debug_assert!(record.quantity() > 0);
        let product_id = record.product_id();
        let guard = self.stock.product_guard(product_id).await;
        let _serial = guard.lock().await;

        let available = self.stock.quantity(product_id).await;
        if available < record.quantity() {
            warn!(
                %product_id,
                channel = %record.channel(),
                requested = record.quantity(),
                available,
                "sale rejected: insufficient stock"
            );
            return Err(InventoryError::InsufficientStock {
                product_id,
                requested: record.quantity(),
                available,
            });
        }

        self.journal
            .append(record)
            .map_err(|e| InventoryError::Storage(e.to_string()))?;

        let outcome = self
            .stock
            .commit_decrement(product_id, record.quantity())
            .await?;
        stream.append(record.clone()).await;
        debug!(
            %product_id,
            sale_id = %record.id(),
            channel = %record.channel(),
            quantity = record.quantity(),
            remaining = outcome.remaining,
            "sale committed"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::SaleChannel;
    use crate::ledger::journal::MemoryJournal;
    use uuid::Uuid;

    async fn reducer_with_stock(id: Uuid, qty: u32) -> (InventoryReducer, Arc<StockTable>) {
        let stock = Arc::new(StockTable::new());
        stock.add(id, qty).await;
        let reducer = InventoryReducer::new(Arc::clone(&stock), Arc::new(MemoryJournal::new()));
        (reducer, stock)
    }

    #[tokio::test]
    async fn test_apply_commits_record() {
        let id = Uuid::now_v7();
        let (reducer, stock) = reducer_with_stock(id, 10).await;
        let stream = SaleStream::new();
        let outcome = reducer
            .apply_sale(&SaleRecord::new(SaleChannel::Store, id, 4), &stream)
            .await
            .unwrap();
        assert_eq!(outcome.remaining, 6);
        assert_eq!(stream.len().await, 1);
        assert_eq!(stock.quantity(id).await, 6);
    }

    #[tokio::test]
    async fn test_rejection_appends_nothing() {
        let id = Uuid::now_v7();
        let (reducer, stock) = reducer_with_stock(id, 3).await;
        let stream = SaleStream::new();
        let err = reducer
            .apply_sale(&SaleRecord::new(SaleChannel::Online, id, 5), &stream)
            .await
            .unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientStock { .. }));
        assert!(stream.is_empty().await);
        assert_eq!(stock.quantity(id).await, 3);
    }
}
