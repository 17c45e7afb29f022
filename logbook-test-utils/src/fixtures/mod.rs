//! Test fixture modules for database record creation.
//!
//! - `flight` - flight records, per-owner totals rows, and in-memory model factories

pub mod flight;
