pub use super::flight::Entity as Flight;
pub use super::flight_totals::Entity as FlightTotals;
