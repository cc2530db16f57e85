//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod crud_service;
pub mod review_service;

pub use crud_service::CrudService;
pub use review_service::ReviewService;
