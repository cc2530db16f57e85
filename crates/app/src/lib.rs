//! # campuscoffee-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven/outbound port adapters must implement:
//!   - `CrudRepository`: get/list/upsert/delete/clear for one entity type
//! - Define the driving/inbound use-cases:
//!   - `CrudService`: create-vs-update policy on top of any `CrudRepository`
//!   - `ReviewService`: review submission and peer approval
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `campuscoffee-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
