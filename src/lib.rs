//! Customer service: REST CRUD over a single `customer` table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::Customer;
pub use repository::{CustomerRepository, InMemoryCustomerRepository, PgCustomerRepository};
pub use routes::{app_router, common_routes_with_ready, customer_routes};
pub use service::CustomerService;
pub use state::AppState;
pub use store::{ensure_customer_table, ensure_database_exists};
