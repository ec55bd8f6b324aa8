//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::comuline::ComulineError;
use crate::directory::{StationId, filter_stations};
use crate::schedule::{group_by_destination, sort_by_destination, upcoming_only};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health))
        .route("/stations", get(station_list_page))
        .route("/stations/:id", get(schedule_page))
        .route("/api/stations", get(list_stations))
        .route("/api/schedule/:id", get(get_schedule))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page with the welcome banner.
async fn home_page() -> impl IntoResponse {
    Html(
        HomeTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// Station list page with name search.
///
/// An upstream failure renders an empty list rather than an error page;
/// the failure is logged. The search query filters server-side.
async fn station_list_page(
    State(state): State<AppState>,
    Query(req): Query<StationListQuery>,
) -> Result<Response, AppError> {
    let stations = match state.comuline.fetch_stations().await {
        Ok(stations) => stations,
        Err(e) => {
            tracing::warn!(error = %e, "failed to fetch station directory");
            Vec::new()
        }
    };

    let query = req.q.unwrap_or_default();
    let matches = filter_stations(&stations, &query);

    let template = StationListTemplate {
        query,
        stations: matches.iter().map(StationView::from_station).collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// Schedule page for one station.
///
/// Departures are sorted by destination and grouped under one header
/// per destination. With `?upcoming=true`, departures earlier than the
/// current wall-clock time are dropped (same-day only). As with the
/// station list, an upstream failure renders an empty board.
async fn schedule_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(req): Query<ScheduleQuery>,
) -> Result<Response, AppError> {
    let station_id = parse_station_id(&id)?;

    let departures = match state.comuline.fetch_schedule(&station_id).await {
        Ok(departures) => departures,
        Err(e) => {
            tracing::warn!(station = %station_id, error = %e, "failed to fetch schedule");
            Vec::new()
        }
    };

    let mut departures = sort_by_destination(departures);

    let upcoming = req.upcoming.unwrap_or(false);
    if upcoming {
        departures = upcoming_only(departures, Local::now().time());
    }

    let groups = group_by_destination(&departures);

    let template = ScheduleTemplate {
        station_id: station_id.as_str().to_string(),
        upcoming,
        groups: groups.iter().map(ScheduleGroupView::from_group).collect(),
    };
    let html = template.render().map_err(|e| AppError::Internal {
        message: format!("Template error: {}", e),
    })?;

    Ok(Html(html).into_response())
}

/// List stations as JSON, optionally filtered by name.
///
/// Unlike the pages, the JSON API propagates upstream failures so that
/// callers can distinguish "no match" from "fetch failed".
async fn list_stations(
    State(state): State<AppState>,
    Query(req): Query<StationListQuery>,
) -> Result<Json<StationListResponse>, AppError> {
    let stations = state.comuline.fetch_stations().await?;

    let query = req.q.unwrap_or_default();
    let matches = filter_stations(&stations, &query);

    Ok(Json(StationListResponse {
        stations: matches.iter().map(StationResult::from_station).collect(),
    }))
}

/// Get the processed schedule for a station as JSON.
///
/// Departures are sorted by destination (stable); with `?upcoming=true`,
/// only departures later than the current time are included.
async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(req): Query<ScheduleQuery>,
) -> Result<Json<ScheduleResponse>, AppError> {
    let station_id = parse_station_id(&id)?;

    let departures = state.comuline.fetch_schedule(&station_id).await?;
    let mut departures = sort_by_destination(departures);

    if req.upcoming.unwrap_or(false) {
        departures = upcoming_only(departures, Local::now().time());
    }

    Ok(Json(ScheduleResponse {
        departures: departures.iter().map(DepartureResult::from_departure).collect(),
    }))
}

/// Parse a station id from a path parameter, accepting lowercase input.
fn parse_station_id(raw: &str) -> Result<StationId, AppError> {
    StationId::parse(&raw.to_uppercase()).map_err(|_| AppError::BadRequest {
        message: format!("Invalid station id: {}", raw),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Upstream { message: String },
    Internal { message: String },
}

impl From<ComulineError> for AppError {
    fn from(e: ComulineError) -> Self {
        AppError::Upstream {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Upstream { message } => (StatusCode::BAD_GATEWAY, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
