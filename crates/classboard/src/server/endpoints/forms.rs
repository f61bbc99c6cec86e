//! Form submissions from the dashboard page.
//!
//! Each handler forwards to [`crate::actions`], which reloads, and then
//! answers with the freshly rendered page.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::actions::{self, Answer};
use crate::render::html::Tab;
use crate::server::endpoints::pages::render_dashboard;
use crate::server::types::ApiErrorType;
use crate::server::ServerState;
use crate::timetable::RoomFilter;
use crate::types::FormFields;

/// Body of the delete confirmation form.
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmForm {
    /// "yes" to delete; anything else cancels
    #[serde(default)]
    pub confirm: String,
}

/// POST /classrooms
pub async fn post_classroom(
    State(s): State<Arc<ServerState>>,
    Form(fields): Form<FormFields>,
) -> Response {
    info!("POST /classrooms");

    actions::create_classroom(&s.dashboard, &fields).await;
    render_dashboard(&s, Tab::Classrooms, &RoomFilter::All).await
}

/// POST /classes
pub async fn post_class(
    State(s): State<Arc<ServerState>>,
    Form(fields): Form<FormFields>,
) -> Response {
    info!("POST /classes");

    actions::create_class(&s.dashboard, &fields).await;
    render_dashboard(&s, Tab::Timetable, &RoomFilter::All).await
}

/// GET /classes/:id/delete
///
/// Shows the "Delete class?" prompt.
pub async fn get_confirm_delete(
    Path(id): Path<i64>,
    State(s): State<Arc<ServerState>>,
) -> Response {
    info!("GET /classes/{}/delete", id);

    let snapshot = s.dashboard.snapshot().await;
    match s.pages.confirm_delete(id, snapshot.class(id)) {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            error!("Template rendering error: {}", e);
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to render confirmation",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}

/// POST /classes/:id/delete
///
/// Deletes the class if the form says `confirm=yes`.
pub async fn post_delete(
    Path(id): Path<i64>,
    State(s): State<Arc<ServerState>>,
    Form(form): Form<ConfirmForm>,
) -> Response {
    info!("POST /classes/{}/delete (confirm={})", id, form.confirm);

    let answer = Answer(form.confirm == "yes");
    actions::delete_class(&s.dashboard, id, &answer).await;
    render_dashboard(&s, Tab::Classes, &RoomFilter::All).await
}
