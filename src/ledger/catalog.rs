//! Product catalog

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::aggregates::Product;
use crate::{InventoryError, Result};

/// In-memory product store. Products are never removed while stock or
/// sales reference them; only the administrative wipe empties it.
#[derive(Debug, Default)]
pub struct Catalog {
    pub(crate) products: RwLock<HashMap<Uuid, Product>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn insert(&self, product: Product) -> Uuid {
        let id = product.id();
        self.products.write().await.insert(id, product);
        id
    }

    pub async fn get(&self, id: Uuid) -> Result<Product> {
        self.products
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(InventoryError::NotFound(id))
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.products.read().await.contains_key(&id)
    }

    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}
