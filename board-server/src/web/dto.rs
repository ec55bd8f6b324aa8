//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::directory::Station;
use crate::schedule::Departure;

/// Query parameters for the station list.
#[derive(Debug, Deserialize)]
pub struct StationListQuery {
    /// Substring to match against station names (case-insensitive).
    /// Absent or empty matches everything.
    pub q: Option<String>,
}

/// Query parameters for the schedule view.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// When true, restrict to departures later than the current time.
    pub upcoming: Option<bool>,
}

/// A station in JSON responses.
#[derive(Debug, Serialize)]
pub struct StationResult {
    /// Upstream station id
    pub id: String,

    /// Station name
    pub name: String,
}

impl StationResult {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

/// Response for the station list endpoint.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// Matching stations, in directory order
    pub stations: Vec<StationResult>,
}

/// A departure in JSON responses.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Terminus the train is heading to
    pub destination: String,

    /// Estimated departure time, "HH:MM:SS"
    pub time_estimated: String,
}

impl DepartureResult {
    /// Create from a domain Departure.
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            destination: departure.destination.clone(),
            time_estimated: departure
                .time_estimated
                .time()
                .format("%H:%M:%S")
                .to_string(),
        }
    }
}

/// Response for the schedule endpoint.
#[derive(Debug, Serialize)]
pub struct ScheduleResponse {
    /// Departures sorted by destination (stable)
    pub departures: Vec<DepartureResult>,
}

/// Error body returned by API endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StationId;
    use crate::schedule::DepartureTime;

    #[test]
    fn station_result_from_station() {
        let station = Station::new(StationId::parse("BOO").unwrap(), "Bogor");
        let result = StationResult::from_station(&station);
        assert_eq!(result.id, "BOO");
        assert_eq!(result.name, "Bogor");
    }

    #[test]
    fn departure_result_keeps_seconds() {
        let departure = Departure::new("Bogor", DepartureTime::parse("05:11:30").unwrap());
        let result = DepartureResult::from_departure(&departure);
        assert_eq!(result.time_estimated, "05:11:30");
    }
}
