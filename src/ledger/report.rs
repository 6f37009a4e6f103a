//! Read-only inventory and sales views

use std::collections::HashMap;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::aggregates::{Product, SaleRecord};
use crate::domain::value_objects::{Money, Quantity};

/// Catalog ⟕ stock row: every cataloged product, with on-hand quantity 0
/// when no stock entry exists.
#[derive(Clone, Debug, Serialize)]
pub struct InventoryRow {
    pub product_id: Uuid,
    pub name: String,
    pub price: Money,
    pub available: bool,
    pub quantity_on_hand: u32,
}

/// Per-product sales summary across both channels.
#[derive(Clone, Debug, Serialize)]
pub struct SalesReportRow {
    pub product_id: Uuid,
    pub name: String,
    pub price: Money,
    pub quantity_on_hand: u32,
    pub store_units_sold: u64,
    pub online_units_sold: u64,
    pub total_units_sold: u64,
}

fn on_hand(entries: &HashMap<Uuid, Quantity>, product_id: Uuid) -> u32 {
    entries.get(&product_id).map(Quantity::value).unwrap_or(0)
}

fn units_by_product(records: &[SaleRecord]) -> HashMap<Uuid, u64> {
    let mut totals: HashMap<Uuid, u64> = HashMap::new();
    for record in records {
        *totals.entry(record.product_id()).or_default() += u64::from(record.quantity());
    }
    totals
}

pub(crate) fn inventory_rows(
    products: &HashMap<Uuid, Product>,
    entries: &HashMap<Uuid, Quantity>,
) -> Vec<InventoryRow> {
    let mut rows: Vec<InventoryRow> = products
        .values()
        .map(|p| InventoryRow {
            product_id: p.id(),
            name: p.name().to_string(),
            price: p.price().clone(),
            available: p.is_available(),
            quantity_on_hand: on_hand(entries, p.id()),
        })
        .collect();
    rows.sort_by_key(|r| r.product_id);
    rows
}

pub(crate) fn sales_report_rows(
    products: &HashMap<Uuid, Product>,
    entries: &HashMap<Uuid, Quantity>,
    store: &[SaleRecord],
    online: &[SaleRecord],
) -> Vec<SalesReportRow> {
    // per-stream sums; summing over a joined row set would double-count
    let store_totals = units_by_product(store);
    let online_totals = units_by_product(online);
    let mut rows: Vec<SalesReportRow> = products
        .values()
        .map(|p| {
            let store_units = store_totals.get(&p.id()).copied().unwrap_or(0);
            let online_units = online_totals.get(&p.id()).copied().unwrap_or(0);
            SalesReportRow {
                product_id: p.id(),
                name: p.name().to_string(),
                price: p.price().clone(),
                quantity_on_hand: on_hand(entries, p.id()),
                store_units_sold: store_units,
                online_units_sold: online_units,
                total_units_sold: store_units + online_units,
            }
        })
        .collect();
    rows.sort_by_key(|r| r.product_id);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::{ProductDraft, SaleChannel};
    use rust_decimal::Decimal;

    fn product(name: &str) -> Product {
        Product::create(ProductDraft::new(name, Money::usd(Decimal::new(1999, 2)))).unwrap()
    }

    #[test]
    fn test_inventory_rows_left_join() {
        let with_stock = product("Widget");
        let without = product("Gadget");
        let mut products = HashMap::new();
        products.insert(with_stock.id(), with_stock.clone());
        products.insert(without.id(), without.clone());
        let mut entries = HashMap::new();
        entries.insert(with_stock.id(), Quantity::new(7));

        let rows = inventory_rows(&products, &entries);
        assert_eq!(rows.len(), 2);
        let stocked = rows.iter().find(|r| r.product_id == with_stock.id()).unwrap();
        assert_eq!(stocked.quantity_on_hand, 7);
        let bare = rows.iter().find(|r| r.product_id == without.id()).unwrap();
        assert_eq!(bare.quantity_on_hand, 0);
        assert!(bare.available);
    }

    #[test]
    fn test_sales_report_sums_each_stream_exactly() {
        let widget = product("Widget");
        let mut products = HashMap::new();
        products.insert(widget.id(), widget.clone());
        let entries = HashMap::new();

        // several rows on both streams for the same product: totals must
        // be plain per-stream sums, not products of row counts
        let store = vec![
            SaleRecord::new(SaleChannel::Store, widget.id(), 2),
            SaleRecord::new(SaleChannel::Store, widget.id(), 3),
        ];
        let online = vec![
            SaleRecord::new(SaleChannel::Online, widget.id(), 1),
            SaleRecord::new(SaleChannel::Online, widget.id(), 6),
        ];

        let rows = sales_report_rows(&products, &entries, &store, &online);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].store_units_sold, 5);
        assert_eq!(rows[0].online_units_sold, 7);
        assert_eq!(rows[0].total_units_sold, 12);
        assert_eq!(rows[0].quantity_on_hand, 0);
    }
}
