//! Owner identifiers shared across tests.
//!
//! Owners are plain UUIDs, there is no user table to insert them into.

use uuid::Uuid;

/// Owner most tests log flights for.
pub const TEST_OWNER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);

/// Second owner, used to check that one owner's flights never leak into another's.
pub const OTHER_OWNER_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);
