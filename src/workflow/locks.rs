//! Per-order-item lock registry

use std::collections::HashMap;
use std::sync::{Arc, PoisonError};

use tokio::sync::{Mutex, OwnedMutexGuard};

type Registry = Arc<std::sync::Mutex<HashMap<String, Arc<Mutex<()>>>>>;

/// Hands out one async mutex per order item id.
///
/// Guards for different order items never contend with each other. An entry
/// lives only while some caller holds or waits for it.
#[derive(Debug, Default)]
pub struct ItemLocks {
    locks: Registry,
}

/// Exclusive access to one order item, released on drop.
#[derive(Debug)]
pub struct ItemGuard {
    order_item_id: String,
    guard: Option<OwnedMutexGuard<()>>,
    registry: Registry,
}

impl ItemLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `order_item_id`.
    pub async fn acquire(&self, order_item_id: &str) -> ItemGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(
                locks
                    .entry(order_item_id.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        let guard = lock.lock_owned().await;
        ItemGuard {
            order_item_id: order_item_id.to_string(),
            guard: Some(guard),
            registry: Arc::clone(&self.locks),
        }
    }

    /// Number of order items currently held or awaited
    pub fn tracked_items(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl ItemGuard {
    pub fn order_item_id(&self) -> &str {
        &self.order_item_id
    }
}

impl Drop for ItemGuard {
    fn drop(&mut self) {
        // Release the item first so the registry's handle is the only one left
        // when nobody else is waiting.
        drop(self.guard.take());
        let mut locks = self.registry.lock().unwrap_or_else(PoisonError::into_inner);
        let idle = locks
            .get(&self.order_item_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1);
        if idle {
            locks.remove(&self.order_item_id);
        }
    }
}
