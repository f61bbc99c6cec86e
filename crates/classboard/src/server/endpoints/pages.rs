use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::render::html::{today, Tab};
use crate::render::DashboardView;
use crate::server::types::ApiErrorType;
use crate::server::ServerState;
use crate::timetable::{self, RoomFilter};

/// Query parameters shared by the page endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    /// Section to show; unknown values fall back to the dashboard
    pub tab: Option<String>,
    /// Timetable room filter, "all" or a room name
    pub room: Option<String>,
}

/// Renders the dashboard page from the current snapshot.
pub(crate) async fn render_dashboard(s: &ServerState, tab: Tab, filter: &RoomFilter) -> Response {
    let snapshot = s.dashboard.snapshot().await;
    let view = DashboardView::build(&snapshot, s.dashboard.hours(), filter);

    match s.pages.dashboard(&view, tab, &today()) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template rendering error: {}", e);
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render dashboard",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}

/// GET /
///
/// Reloads all data, then renders the page.
///
/// Query parameters:
/// - `tab` (optional): section to show
/// - `room` (optional): timetable filter
pub async fn get_dashboard(
    State(s): State<Arc<ServerState>>,
    Query(params): Query<PageQuery>,
) -> Response {
    info!("GET / (tab={:?}, room={:?})", params.tab, params.room);

    s.dashboard.reload().await;
    let filter = RoomFilter::parse(params.room.as_deref());
    render_dashboard(&s, Tab::parse(params.tab.as_deref()), &filter).await
}

/// GET /timetable.json
///
/// Reloads all data and returns the laid-out grid, including the ids of
/// classes hidden by an earlier class in the same slot.
pub async fn get_timetable_json(
    State(s): State<Arc<ServerState>>,
    Query(params): Query<PageQuery>,
) -> Response {
    info!("GET /timetable.json (room={:?})", params.room);

    s.dashboard.reload().await;
    let snapshot = s.dashboard.snapshot().await;
    let filter = RoomFilter::parse(params.room.as_deref());
    let grid = timetable::layout(&snapshot.classes, s.dashboard.hours(), &filter);

    (StatusCode::OK, Json(grid)).into_response()
}
