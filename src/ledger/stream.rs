//! Append-only sale streams

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::aggregates::SaleRecord;

/// One logical stream of committed sales for a single channel.
#[derive(Debug, Default)]
pub struct SaleStream {
    pub(crate) records: RwLock<Vec<SaleRecord>>,
}

impl SaleStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn append(&self, record: SaleRecord) {
        self.records.write().await.push(record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Total units sold for a product on this stream.
    pub async fn units_sold(&self, product_id: Uuid) -> u64 {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.product_id() == product_id)
            .map(|r| u64::from(r.quantity()))
            .sum()
    }

    pub async fn snapshot(&self) -> Vec<SaleRecord> {
        self.records.read().await.clone()
    }
}
