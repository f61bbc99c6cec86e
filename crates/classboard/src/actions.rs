//! Form and delete handlers.
//!
//! Every write is followed by a full reload, whatever the server answered.
//! There is no optimistic update: the snapshot only changes once the reload
//! has come back.

use crate::state::DashboardState;
use crate::types::FormFields;
use tracing::{info, warn};

/// Asks the user to approve a destructive action.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

/// An answer that was collected up front, e.g. from a submitted form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

pub const DELETE_PROMPT: &str = "Delete class?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmation was declined; nothing was sent
    Cancelled,
    /// The delete was sent and the data reloaded
    Submitted,
}

/// POSTs a new classroom, then reloads.
pub async fn create_classroom(state: &DashboardState, fields: &FormFields) {
    match state.source().create_classroom(fields).await {
        Ok(outcome) => info!(status = outcome.status, "Classroom submitted"),
        Err(e) => warn!(error = %e, "Failed to submit classroom"),
    }
    state.reload().await;
}

/// POSTs a new class, then reloads.
pub async fn create_class(state: &DashboardState, fields: &FormFields) {
    match state.source().create_class(fields).await {
        Ok(outcome) => info!(status = outcome.status, "Class submitted"),
        Err(e) => warn!(error = %e, "Failed to submit class"),
    }
    state.reload().await;
}

/// Deletes class `id` once `confirm` approves, then reloads.
pub async fn delete_class(state: &DashboardState, id: i64, confirm: &dyn Confirm) -> DeleteOutcome {
    if !confirm.confirm(DELETE_PROMPT) {
        info!(id = id, "Delete cancelled");
        return DeleteOutcome::Cancelled;
    }

    match state.source().delete_class(id).await {
        Ok(outcome) => info!(id = id, status = outcome.status, "Delete submitted"),
        Err(e) => warn!(id = id, error = %e, "Failed to delete class"),
    }
    state.reload().await;
    DeleteOutcome::Submitted
}
