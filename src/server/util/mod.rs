//! Utility functions and helpers for server operations.
//!
//! Flight hour arithmetic shared by storage and recalculation, and date parsing for
//! request validation.

pub mod hours;
pub mod time;
