//! In-memory copy of the API collections and the loader that refreshes it.

use crate::source::{DataSource, SourceError};
use crate::types::{ClassSession, Classroom, DashboardStats};
use std::time::Instant;
use tracing::info;

/// Everything the renderers read, replaced wholesale on each reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub classrooms: Vec<Classroom>,
    pub classes: Vec<ClassSession>,
    pub stats: DashboardStats,
}

impl Snapshot {
    /// Looks up a cached class by id.
    pub fn class(&self, id: i64) -> Option<&ClassSession> {
        self.classes.iter().find(|c| c.id == id)
    }
}

/// Issues the three reads concurrently and joins them into a snapshot.
///
/// The first failure aborts the whole load, so a failed stats read also
/// discards classrooms and classes that arrived fine.
pub async fn load(source: &dyn DataSource) -> Result<Snapshot, SourceError> {
    let start = Instant::now();
    let (classrooms, classes, stats) =
        futures::try_join!(source.classrooms(), source.classes(), source.stats())?;

    info!(
        classrooms = classrooms.len(),
        classes = classes.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Loaded dashboard data"
    );

    Ok(Snapshot {
        classrooms,
        classes,
        stats,
    })
}
