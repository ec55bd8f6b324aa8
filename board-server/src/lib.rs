//! Commuter departure board server.
//!
//! A web application over the Comuline commuter-rail API: browse the
//! station directory, search it by name, and view upcoming departures
//! for a station grouped by destination.

pub mod comuline;
pub mod directory;
pub mod schedule;
pub mod web;
