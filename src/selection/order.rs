use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::MenuItem;

/// Acknowledgement shown to the user when an order is accepted.
pub const ORDER_RECEIVED: &str = "Your order has been received and will be prepared soon!";

/// Snapshot of a placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub items: Vec<MenuItem>,
    pub total: f64,
}

impl OrderReceipt {
    pub fn new(items: Vec<MenuItem>, total: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            items,
            total,
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
