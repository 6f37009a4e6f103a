//! Domain events
use crate::domain::aggregates::SaleChannel;
use uuid::Uuid;

#[derive(Clone, Debug)]
pub enum DomainEvent {
    Product(ProductEvent),
    Stock(StockEvent),
    Sale(SaleEvent),
}

#[derive(Clone, Debug)]
pub enum ProductEvent {
    Added { product_id: Uuid, name: String },
}

#[derive(Clone, Debug)]
pub enum StockEvent {
    Restocked {
        product_id: Uuid,
        quantity: u32,
        on_hand: u32,
    },
    Depleted {
        product_id: Uuid,
    },
}

#[derive(Clone, Debug)]
pub enum SaleEvent {
    Recorded {
        sale_id: Uuid,
        channel: SaleChannel,
        product_id: Uuid,
        quantity: u32,
    },
}
