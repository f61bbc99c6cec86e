//! Shared dashboard state: the data source plus the current snapshot.

use crate::cache::{self, Snapshot};
use crate::source::DataSource;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::error;

pub struct DashboardState {
    source: Arc<dyn DataSource>,
    snapshot: RwLock<Snapshot>,
    hours: RangeInclusive<u32>,
}

impl DashboardState {
    /// Creates a state with an empty snapshot. Call [`reload`](Self::reload)
    /// to fill it.
    pub fn new(source: Arc<dyn DataSource>, hours: RangeInclusive<u32>) -> Self {
        Self {
            source,
            snapshot: RwLock::new(Snapshot::default()),
            hours,
        }
    }

    pub fn source(&self) -> &dyn DataSource {
        self.source.as_ref()
    }

    pub fn hours(&self) -> RangeInclusive<u32> {
        self.hours.clone()
    }

    /// Refreshes the snapshot from the data source.
    ///
    /// The reads run without holding the lock; only the final assignment
    /// takes it. Concurrent reloads are not ordered, so whichever finishes
    /// last wins. On failure the old snapshot is kept and the error logged.
    pub async fn reload(&self) -> bool {
        match cache::load(self.source.as_ref()).await {
            Ok(fresh) => {
                *self.snapshot.write().await = fresh;
                true
            }
            Err(e) => {
                error!(error = %e, "API error, keeping previous data. Is the backend running?");
                false
            }
        }
    }

    /// A copy of the current snapshot.
    pub async fn snapshot(&self) -> Snapshot {
        self.snapshot.read().await.clone()
    }
}
