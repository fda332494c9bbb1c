//! CustomerService: the five customer operations over a repository.

mod customer;
pub use customer::CustomerService;
