//! Customer operations. Everything except update delegates straight to the repository.

use crate::error::AppError;
use crate::model::Customer;
use crate::repository::CustomerRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Persist as given: insert when `id` is absent, overwrite otherwise.
    pub async fn save(&self, customer: Customer) -> Result<Customer, AppError> {
        let saved = self.repository.save(&customer).await?;
        tracing::info!(id = ?saved.id, "customer saved");
        Ok(saved)
    }

    /// `Ok(None)` when no record has this id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Customer>, AppError> {
        self.repository.find_by_id(id).await
    }

    /// All customers, newest (highest id) first.
    pub async fn get_all(&self) -> Result<Vec<Customer>, AppError> {
        self.repository.find_all_desc().await
    }

    /// Copy first name, last name and email from `customer` onto the stored record `id`.
    /// The stored id wins over any id in `customer`. Fails with `NotFound` instead of creating.
    pub async fn update(&self, id: i32, customer: Customer) -> Result<Customer, AppError> {
        let mut existing = match self.repository.find_by_id(id).await? {
            Some(c) => c,
            None => {
                tracing::warn!(id, "update of missing customer");
                return Err(AppError::NotFound(format!("customer {}", id)));
            }
        };
        existing.merge_from(customer);
        let saved = self.repository.save(&existing).await?;
        tracing::info!(id, "customer updated");
        Ok(saved)
    }

    /// Remove customer `id`; succeeds whether or not it existed.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "customer deleted");
        Ok(())
    }
}
