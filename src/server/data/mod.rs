//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same calls run on the pooled
//! connection or inside a transaction owned by a service.

pub mod flight;
pub mod totals;
