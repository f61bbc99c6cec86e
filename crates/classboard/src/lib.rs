//! Classroom scheduling dashboard.
//!
//! Reads classrooms and classes from a remote class API, lays the classes
//! out on a weekly timetable and renders the result as an HTML dashboard or
//! a terminal grid. Writes go straight to the API and are followed by a full
//! reload.

pub mod actions;
pub mod cache;
pub mod config;
pub mod render;
pub mod server;
pub mod source;
pub mod state;
pub mod timetable;
pub mod types;

pub use cache::Snapshot;
pub use config::Config;
pub use source::{ApiClient, DataSource, SourceError};
pub use state::DashboardState;
pub use timetable::{layout, RoomFilter, TimetableGrid};
