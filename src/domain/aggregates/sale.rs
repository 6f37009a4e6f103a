//! Sale records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sales channel a sale was recorded through. Both channels draw from the
/// same stock pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SaleChannel {
    Store,
    Online,
}

impl std::fmt::Display for SaleChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::Online => write!(f, "online"),
        }
    }
}

/// A committed sale. Append-only: a record never changes once a stream
/// accepts it, and it exists there only if its stock decrement committed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaleRecord {
    id: Uuid,
    channel: SaleChannel,
    product_id: Uuid,
    quantity: u32,
    recorded_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(channel: SaleChannel, product_id: Uuid, quantity: u32) -> Self {
        Self {
            id: Uuid::now_v7(),
            channel,
            product_id,
            quantity,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }
    pub fn channel(&self) -> SaleChannel {
        self.channel
    }
    pub fn product_id(&self) -> Uuid {
        self.product_id
    }
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
