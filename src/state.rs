//! Shared application state for all routes.

use crate::repository::CustomerRepository;
use crate::service::CustomerService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    /// Same store the service uses; the readiness probe pings it.
    pub repository: Arc<dyn CustomerRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customers: CustomerService::new(repository.clone()),
            repository,
        }
    }
}
