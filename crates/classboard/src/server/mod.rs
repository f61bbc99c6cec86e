use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::render::html::PageRenderer;
use crate::server::endpoints::{forms, pages, status};
use crate::state::DashboardState;

mod endpoints;
mod types;

/// State shared by every handler.
pub struct ServerState {
    pub dashboard: DashboardState,
    pub pages: PageRenderer,
}

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(pages::get_dashboard))
        .route("/timetable.json", get(pages::get_timetable_json))
        .route("/classrooms", post(forms::post_classroom))
        .route("/classes", post(forms::post_class))
        .route(
            "/classes/:id/delete",
            get(forms::get_confirm_delete).post(forms::post_delete),
        )
        .route("/health", get(status::get_health))
        .with_state(app_state)
}
