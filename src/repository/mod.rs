//! Customer persistence: the storage contract and its backends.

mod memory;
mod postgres;

pub use memory::InMemoryCustomerRepository;
pub use postgres::PgCustomerRepository;

use crate::error::AppError;
use crate::model::Customer;
use async_trait::async_trait;

/// Storage for customer records keyed by `id`.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert when `customer.id` is `None` (the store assigns the id), otherwise insert or
    /// overwrite the row with that id. Returns the stored record.
    async fn save(&self, customer: &Customer) -> Result<Customer, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, AppError>;

    /// Every record, highest id first.
    async fn find_all_desc(&self) -> Result<Vec<Customer>, AppError>;

    /// Remove the record if present. Missing ids are not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    /// Cheap round-trip used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
