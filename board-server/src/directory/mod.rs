//! Station directory.
//!
//! Domain types for stations and the case-insensitive name search used
//! by the station list page.

mod filter;
mod station;

pub use filter::filter_stations;
pub use station::{InvalidStationId, Station, StationId};
