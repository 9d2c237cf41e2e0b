use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::calendar::Holiday;
use crate::event::Event;
use crate::member::Member;
use crate::presence::{events_in_range, events_on, members_in_office};
use crate::resolver::{effective_weekly_dates, week_start};
use crate::store::RosterStore;

/// Shared immutable roster snapshot behind the read-only router.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RosterStore>,
}

impl AppState {
    pub fn new(store: RosterStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn with_shared(store: Arc<RosterStore>) -> Self {
        Self { store }
    }

    fn store(&self) -> &RosterStore {
        &self.store
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct PresenceParams {
    date: NaiveDate,
    teams: Option<String>,
    members: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WeekParams {
    date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct EventParams {
    date: Option<NaiveDate>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct WeekBody {
    member: Member,
    week_start: NaiveDate,
    dates: Vec<NaiveDate>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/presence", get(presence))
        .route("/members", get(list_members))
        .route("/members/:id/week", get(member_week))
        .route("/holidays", get(list_holidays))
        .route("/events", get(list_events))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, store: RosterStore) -> std::io::Result<()> {
    let state = AppState::new(store);
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

fn parse_member_list(raw: &str) -> Result<Vec<i32>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| ApiError::invalid(format!("invalid member id '{part}'")))
        })
        .collect()
}

fn parse_team_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

async fn presence(
    State(state): State<AppState>,
    Query(params): Query<PresenceParams>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let member_filter = match params.members.as_deref() {
        Some(raw) => parse_member_list(raw)?,
        None => Vec::new(),
    };
    let team_filter = params
        .teams
        .as_deref()
        .map(parse_team_list)
        .unwrap_or_default();

    let members = members_in_office(state.store(), params.date, &member_filter, &team_filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(members))
}

async fn list_members(State(state): State<AppState>) -> Json<Vec<Member>> {
    Json(state.store().members().to_vec())
}

async fn member_week(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Query(params): Query<WeekParams>,
) -> Result<Json<WeekBody>, ApiError> {
    let store = state.store();
    let member = store
        .member(member_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found(format!("member {member_id} not found")))?;
    let week = week_start(params.date);
    let dates = effective_weekly_dates(store, member_id, week);
    Ok(Json(WeekBody {
        member,
        week_start: week,
        dates,
    }))
}

async fn list_holidays(State(state): State<AppState>) -> Json<Vec<Holiday>> {
    let holidays = state
        .store()
        .calendar()
        .holidays()
        .into_iter()
        .cloned()
        .collect();
    Json(holidays)
}

async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<EventParams>,
) -> Result<Json<Vec<Event>>, ApiError> {
    let store = state.store();
    let events: Vec<Event> = match (params.date, params.start, params.end) {
        (Some(date), None, None) => events_on(store, date).into_iter().cloned().collect(),
        (None, Some(start), Some(end)) => {
            if end < start {
                return Err(ApiError::invalid("range end precedes range start"));
            }
            events_in_range(store, start, end)
                .into_iter()
                .cloned()
                .collect()
        }
        (None, None, None) => store.events().to_vec(),
        _ => return Err(ApiError::invalid("pass either date or both start and end")),
    };
    Ok(Json(events))
}
