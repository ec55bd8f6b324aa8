//! Comuline API client.
//!
//! HTTP client for the public Comuline commuter-rail API, which serves
//! the station directory and daily departure schedules for the Greater
//! Jakarta KRL network.
//!
//! Key characteristics of the API:
//! - No authentication
//! - Responses wrap their payload in a `{ "data": [...] }` envelope
//! - Times are "HH:MM:SS" strings (local time, daily timetable)

mod client;
mod error;
mod types;

pub use client::{ComulineClient, ComulineConfig};
pub use error::ComulineError;
pub use types::{Envelope, ScheduleDto, StationDto, convert_departures, convert_stations};
