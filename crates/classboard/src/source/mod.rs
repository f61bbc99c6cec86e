//! Access to the remote class API.
//!
//! Everything the dashboard knows comes through [`DataSource`]. The HTTP
//! implementation is [`ApiClient`]; tests substitute an in-memory one.

mod client;
mod error;
#[cfg(test)]
pub(crate) mod memory;

pub use client::{ApiClient, WriteOutcome};
pub use error::SourceError;

use crate::types::{ClassSession, Classroom, DashboardStats, FormFields};
use async_trait::async_trait;

/// The operations the dashboard needs from the class API.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// GET the classroom collection.
    async fn classrooms(&self) -> Result<Vec<Classroom>, SourceError>;

    /// GET the class collection.
    async fn classes(&self) -> Result<Vec<ClassSession>, SourceError>;

    /// GET the aggregate counters.
    async fn stats(&self) -> Result<DashboardStats, SourceError>;

    /// POST a new classroom built from raw form fields.
    async fn create_classroom(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError>;

    /// POST a new class built from raw form fields.
    async fn create_class(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError>;

    /// DELETE a class by id.
    async fn delete_class(&self, id: i64) -> Result<WriteOutcome, SourceError>;
}
