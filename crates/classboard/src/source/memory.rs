//! In-memory class API used by tests.
//!
//! Behaves like the real backend: ids are assigned on insert, a class that
//! takes an occupied (room, day, start) slot is refused with 409, and a
//! duplicate classroom name with 400.

use super::{DataSource, SourceError, WriteOutcome};
use crate::types::{ClassSession, Classroom, DashboardStats, FormFields};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemorySource {
    classrooms: Mutex<Vec<Classroom>>,
    classes: Mutex<Vec<ClassSession>>,
    next_id: Mutex<i64>,
    /// When set, the stats read fails with a network error
    pub fail_stats: AtomicBool,
    /// When set, every request fails with a network error
    pub offline: AtomicBool,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self {
            next_id: Mutex::new(1),
            ..Default::default()
        }
    }

    pub fn with_classes(classes: Vec<ClassSession>) -> Self {
        let source = Self::new();
        let next = classes.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        *source.next_id.lock().unwrap() = next;
        *source.classes.lock().unwrap() = classes;
        source
    }

    pub fn add_classroom(&self, name: &str, capacity: i64, equipment: &str) {
        self.classrooms.lock().unwrap().push(Classroom {
            name: name.to_string(),
            capacity,
            equipment: equipment.to_string(),
        });
    }

    pub fn class_ids(&self) -> Vec<i64> {
        self.classes.lock().unwrap().iter().map(|c| c.id).collect()
    }

    fn check_online(&self) -> Result<(), SourceError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(SourceError::Network {
                message: "connection refused".to_string(),
            });
        }
        Ok(())
    }
}

fn field(fields: &FormFields, key: &str) -> String {
    fields.get(key).cloned().unwrap_or_default()
}

#[async_trait]
impl DataSource for MemorySource {
    async fn classrooms(&self) -> Result<Vec<Classroom>, SourceError> {
        self.check_online()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.classrooms.lock().unwrap().clone())
    }

    async fn classes(&self) -> Result<Vec<ClassSession>, SourceError> {
        self.check_online()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.classes.lock().unwrap().clone())
    }

    async fn stats(&self) -> Result<DashboardStats, SourceError> {
        self.check_online()?;
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(SourceError::Network {
                message: "stats unavailable".to_string(),
            });
        }
        Ok(DashboardStats {
            total_classes: self.classes.lock().unwrap().len() as i64,
            total_classrooms: self.classrooms.lock().unwrap().len() as i64,
        })
    }

    async fn create_classroom(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError> {
        self.check_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let name = field(fields, "name");
        let Ok(capacity) = field(fields, "capacity").trim().parse::<i64>() else {
            return Ok(WriteOutcome { status: 422 });
        };

        let mut rooms = self.classrooms.lock().unwrap();
        if rooms.iter().any(|r| r.name == name) {
            return Ok(WriteOutcome { status: 400 });
        }
        rooms.push(Classroom {
            name,
            capacity,
            equipment: field(fields, "equipment"),
        });
        Ok(WriteOutcome { status: 200 })
    }

    async fn create_class(&self, fields: &FormFields) -> Result<WriteOutcome, SourceError> {
        self.check_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let session = ClassSession {
            id: 0,
            class_id: field(fields, "class_id"),
            name: field(fields, "name"),
            teacher: field(fields, "teacher"),
            room_name: field(fields, "room_name"),
            day: field(fields, "day"),
            start_time: field(fields, "start_time"),
            end_time: fields.get("end_time").cloned(),
        };

        let mut classes = self.classes.lock().unwrap();
        let conflict = classes.iter().any(|c| {
            c.room_name == session.room_name
                && c.day == session.day
                && c.start_time == session.start_time
        });
        if conflict {
            return Ok(WriteOutcome { status: 409 });
        }

        let mut next_id = self.next_id.lock().unwrap();
        classes.push(ClassSession {
            id: *next_id,
            ..session
        });
        *next_id += 1;
        Ok(WriteOutcome { status: 200 })
    }

    async fn delete_class(&self, id: i64) -> Result<WriteOutcome, SourceError> {
        self.check_online()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.classes.lock().unwrap().retain(|c| c.id != id);
        Ok(WriteOutcome { status: 200 })
    }
}

/// Builds a session for tests; the remaining fields are derived from the id.
pub fn session(id: i64, day: &str, start_time: &str, room_name: &str) -> ClassSession {
    ClassSession {
        id,
        class_id: format!("C{}", id),
        name: format!("Class {}", id),
        teacher: "Staff".to_string(),
        room_name: room_name.to_string(),
        day: day.to_string(),
        start_time: start_time.to_string(),
        end_time: None,
    }
}
