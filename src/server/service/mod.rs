//! Service layer for business logic.
//!
//! Services validate input and coordinate repositories. Every flight mutation and the
//! recalculation of the owner's totals commit together in one transaction.

pub mod flight;
pub mod totals;
pub mod validation;
