//! Process-local customer store.

use super::CustomerRepository;
use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

struct Rows {
    by_id: BTreeMap<i32, Customer>,
    next_id: i32,
}

/// Customer store held in memory. Ids are assigned from a counter that starts at 1 and always
/// stays above any id saved explicitly.
pub struct InMemoryCustomerRepository {
    rows: RwLock<Rows>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Rows {
                by_id: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: &Customer) -> Result<Customer, AppError> {
        let mut rows = self.rows.write().await;
        let id = match customer.id {
            Some(id) => {
                rows.next_id = rows.next_id.max(id.saturating_add(1));
                id
            }
            None => {
                let id = rows.next_id;
                if rows.by_id.contains_key(&id) {
                    return Err(AppError::Internal("customer id space exhausted".into()));
                }
                rows.next_id = id.saturating_add(1);
                id
            }
        };
        let stored = Customer {
            id: Some(id),
            ..customer.clone()
        };
        rows.by_id.insert(id, stored.clone());
        tracing::debug!(id, "memory save");
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn find_all_desc(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.rows.read().await.by_id.values().rev().cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), AppError> {
        self.rows.write().await.by_id.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
