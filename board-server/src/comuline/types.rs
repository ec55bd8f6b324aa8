//! Wire types for the Comuline API.
//!
//! Both endpoints wrap their payload in a `data` envelope and use
//! camelCase field names. Conversion to domain types happens here, at
//! the fetch boundary, so the processing core only ever sees validated
//! data.

use serde::Deserialize;

use crate::directory::{Station, StationId};
use crate::schedule::{Departure, DepartureTime, TimeError};

/// Envelope wrapping every Comuline response payload.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Vec<T>,
}

/// Raw station record from `GET /station/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationDto {
    pub id: String,
    pub name: String,
}

/// Raw departure record from `GET /schedule/{stationId}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDto {
    pub destination: String,
    /// Estimated departure time as "HH:MM:SS".
    pub time_estimated: String,
}

/// Convert raw station records to domain stations.
///
/// Records with an invalid id are dropped rather than failing the whole
/// directory; the upstream feed occasionally carries placeholder rows.
/// Each dropped row is logged so a wholesale upstream id-format change
/// shows up in the logs instead of as a silently empty directory.
pub fn convert_stations(dtos: Vec<StationDto>) -> Vec<Station> {
    dtos.into_iter()
        .filter_map(|dto| match StationId::parse(&dto.id.to_uppercase()) {
            Ok(id) => Some(Station::new(id, dto.name)),
            Err(e) => {
                tracing::warn!(id = %dto.id, name = %dto.name, error = %e, "dropping station with invalid id");
                None
            }
        })
        .collect()
}

/// Convert raw departure records to domain departures.
///
/// A malformed `timeEstimated` fails the whole conversion: a schedule
/// with an unparseable time is not trustworthy enough to display.
pub fn convert_departures(dtos: Vec<ScheduleDto>) -> Result<Vec<Departure>, TimeError> {
    dtos.into_iter()
        .map(|dto| {
            let time = DepartureTime::parse(&dto.time_estimated)?;
            Ok(Departure::new(dto.destination, time))
        })
        .collect()
}
