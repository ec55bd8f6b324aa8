//! Schedule processing core.
//!
//! Pure transformations over fetched departure data: stable sort by
//! destination, same-day future filter, destination grouping, and
//! "HH:MM:SS" time parsing/formatting. No I/O, no suspension points.

mod board;
mod time;

pub use board::{
    Departure, DestinationGroup, group_by_destination, is_group_start, sort_by_destination,
    upcoming_only,
};
pub use time::{DepartureTime, TimeError};
