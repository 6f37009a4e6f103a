//! Inventory ledger: catalog, stock table, sale streams and the reducer
//! behind one facade.

pub mod catalog;
pub mod journal;
mod reducer;
pub mod report;
pub mod stock;
pub mod stream;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::domain::aggregates::{Product, ProductDraft, SaleChannel, SaleRecord};
use crate::domain::events::{DomainEvent, ProductEvent, SaleEvent, StockEvent};
use crate::domain::value_objects::Money;
use crate::{InventoryError, Result};

use catalog::Catalog;
use journal::{MemoryJournal, SaleJournal};
use reducer::InventoryReducer;
use report::{InventoryRow, SalesReportRow};
use stock::StockTable;
use stream::SaleStream;

/// Single-pool inventory shared by every sales channel.
///
/// Lock order for any section touching several entities: product guards,
/// then catalog, stock entries, store stream, online stream.
pub struct InventoryLedger {
    catalog: Catalog,
    stock: Arc<StockTable>,
    store_sales: SaleStream,
    online_sales: SaleStream,
    reducer: InventoryReducer,
    events: Mutex<Vec<DomainEvent>>,
}

impl InventoryLedger {
    pub fn new() -> Self {
        Self::with_journal(Arc::new(MemoryJournal::new()))
    }

    /// Plugs a custom write-ahead journal, e.g. a durable log in
    /// storage-backed deployments.
    pub fn with_journal(journal: Arc<dyn SaleJournal>) -> Self {
        let stock = Arc::new(StockTable::new());
        Self {
            catalog: Catalog::new(),
            stock: Arc::clone(&stock),
            store_sales: SaleStream::new(),
            online_sales: SaleStream::new(),
            reducer: InventoryReducer::new(stock, journal),
            events: Mutex::new(Vec::new()),
        }
    }

    pub async fn add_product(&self, name: impl Into<String>, price: Money) -> Result<Uuid> {
        let product = Product::create(ProductDraft::new(name, price))?;
        let name = product.name().to_string();
        let id = self.catalog.insert(product).await;
        self.raise(DomainEvent::Product(ProductEvent::Added {
            product_id: id,
            name: name.clone(),
        }))
        .await;
        info!(product_id = %id, name = %name, "product added");
        Ok(id)
    }

    pub async fn get_product(&self, id: Uuid) -> Result<Product> {
        self.catalog.get(id).await
    }

    /// Adds stock for a cataloged product; returns the new on-hand total.
    /// Each call adds: restocking twice with the same delta adds twice.
    pub async fn restock(&self, product_id: Uuid, quantity: u32) -> Result<u32> {
        if quantity == 0 {
            return Err(InventoryError::Validation(
                "restock quantity must be positive".into(),
            ));
        }
        let guard = self.stock.product_guard(product_id).await;
        let _serial = guard.lock().await;
        // catalog membership checked under the guard, so a concurrent
        // wipe cannot interleave between check and mutation
        if !self.catalog.contains(product_id).await {
            return Err(InventoryError::Validation(format!(
                "cannot restock unknown product {product_id}"
            )));
        }
        let on_hand = self.stock.add(product_id, quantity).await;
        self.raise(DomainEvent::Stock(StockEvent::Restocked {
            product_id,
            quantity,
            on_hand,
        }))
        .await;
        info!(%product_id, quantity, on_hand, "stock added");
        Ok(on_hand)
    }

    /// On-hand quantity; 0 when no stock entry exists. Absence means zero
    /// stock; whether the product exists at all is a catalog question.
    pub async fn quantity_on_hand(&self, product_id: Uuid) -> u32 {
        self.stock.quantity(product_id).await
    }

    pub async fn has_stock_entry(&self, product_id: Uuid) -> bool {
        self.stock.has_entry(product_id).await
    }

    /// Records a sale and decrements stock as one unit: either the record
    /// lands in the channel's stream and stock drops, or neither happens.
    pub async fn record_sale(
        &self,
        channel: SaleChannel,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<Uuid> {
        if quantity == 0 {
            return Err(InventoryError::Validation(
                "sale quantity must be positive".into(),
            ));
        }
        let record = SaleRecord::new(channel, product_id, quantity);
        let sale_id = record.id();
        let outcome = self
            .reducer
            .apply_sale(&record, self.stream_for(channel))
            .await?;
        self.raise(DomainEvent::Sale(SaleEvent::Recorded {
            sale_id,
            channel,
            product_id,
            quantity,
        }))
        .await;
        if outcome.depleted {
            self.raise(DomainEvent::Stock(StockEvent::Depleted { product_id }))
                .await;
        }
        Ok(sale_id)
    }

    pub fn store_sales(&self) -> &SaleStream {
        &self.store_sales
    }

    pub fn online_sales(&self) -> &SaleStream {
        &self.online_sales
    }

    fn stream_for(&self, channel: SaleChannel) -> &SaleStream {
        match channel {
            SaleChannel::Store => &self.store_sales,
            SaleChannel::Online => &self.online_sales,
        }
    }

    /// Every cataloged product with its on-hand quantity, ordered by
    /// product id.
    pub async fn inventory(&self) -> Vec<InventoryRow> {
        let products = self.catalog.products.read().await;
        let entries = self.stock.entries.read().await;
        report::inventory_rows(&products, &entries)
    }

    /// Per-product sales summary over a consistent snapshot of all four
    /// entities.
    pub async fn sales_report(&self) -> Vec<SalesReportRow> {
        let products = self.catalog.products.read().await;
        let entries = self.stock.entries.read().await;
        let store = self.store_sales.records.read().await;
        let online = self.online_sales.records.read().await;
        report::sales_report_rows(&products, &entries, &store, &online)
    }

    /// Empties catalog, stock and both sale streams. Every product guard
    /// and entity write lock is held for the duration, so concurrent
    /// sales either commit fully before the wipe or fail cleanly after.
    pub async fn reset(&self) {
        let _serial = self.stock.lock_all_products().await;
        let mut products = self.catalog.products.write().await;
        let mut entries = self.stock.entries.write().await;
        let mut store = self.store_sales.records.write().await;
        let mut online = self.online_sales.records.write().await;
        products.clear();
        entries.clear();
        store.clear();
        online.clear();
        drop(online);
        drop(store);
        drop(entries);
        drop(products);
        self.stock.clear_guards().await;
        warn!("inventory ledger reset: all entities cleared");
    }

    /// Drains domain events raised since the previous call.
    pub async fn take_events(&self) -> Vec<DomainEvent> {
        std::mem::take(&mut *self.events.lock().await)
    }

    async fn raise(&self, event: DomainEvent) {
        self.events.lock().await.push(event);
    }
}

impl Default for InventoryLedger {
    fn default() -> Self {
        Self::new()
    }
}
