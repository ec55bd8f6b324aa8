//! Web layer for the departure board.
//!
//! Serves the three pages (home, station list with search, schedule
//! view) plus a JSON API over the same data.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
pub use templates::*;
