//! Askama templates for the web frontend.

use askama::Template;

use crate::directory::Station;
use crate::schedule::DestinationGroup;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with a welcome banner and entry link.
#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate;

/// Station list page with the search box.
#[derive(Template)]
#[template(path = "stations.html")]
pub struct StationListTemplate {
    pub query: String,
    pub stations: Vec<StationView>,
}

/// Schedule page for one station, grouped by destination.
#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub station_id: String,
    pub upcoming: bool,
    pub groups: Vec<ScheduleGroupView>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Station view model for templates.
#[derive(Debug, Clone)]
pub struct StationView {
    pub id: String,
    pub name: String,
}

impl StationView {
    /// Create from a domain Station.
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.as_str().to_string(),
            name: station.name.clone(),
        }
    }
}

/// One destination block on the schedule page.
///
/// The header is the destination name; the body is the formatted
/// departure times ("HH:MM") in upstream order.
#[derive(Debug, Clone)]
pub struct ScheduleGroupView {
    pub destination: String,
    pub times: Vec<String>,
}

impl ScheduleGroupView {
    /// Create from a domain DestinationGroup.
    pub fn from_group(group: &DestinationGroup) -> Self {
        Self {
            destination: group.destination.clone(),
            times: group.times.iter().map(|t| t.to_string()).collect(),
        }
    }
}
