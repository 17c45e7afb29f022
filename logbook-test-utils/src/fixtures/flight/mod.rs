//! Flight record and totals fixture utilities.
//!
//! `data` inserts records into the test database, `factory` builds in-memory models.

use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn flight<'a>(&'a mut self) -> FlightFixtures<'a> {
        FlightFixtures { setup: self }
    }
}

pub struct FlightFixtures<'a> {
    pub setup: &'a mut TestContext,
}
