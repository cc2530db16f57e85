//! # campuscoffee-domain
//!
//! Pure domain model for the campuscoffee review platform.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, the error taxonomy
//! - The [`Identifiable`](entity::Identifiable) contract shared by all managed types
//! - Define **Users** (accounts that write and approve reviews)
//! - Define **Reviews** (text reviews of a point of sale, peer approved)
//! - Hold approval settings and enforce review invariants
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod approval;
pub mod entity;
pub mod error;
pub mod id;
pub mod review;
pub mod user;
