//! Projections of the cached data into view models.
//!
//! Nothing here touches the network or mutates the snapshot. [`html`] and
//! [`text`] turn the view models into output for a browser or a terminal.

pub mod html;
pub mod text;

use crate::cache::Snapshot;
use crate::timetable::{self, RoomFilter, TimetableGrid};
use crate::types::Weekday;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Pixels of bar height per class in the report.
pub const BAR_PX_PER_CLASS: usize = 20;

/// Counters at the top of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub total_classes: i64,
    pub total_classrooms: i64,
    /// Number of cached classes
    pub active_slots: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassroomCard {
    pub name: String,
    pub capacity: String,
    pub equipment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassRow {
    pub id: i64,
    pub class_id: String,
    pub name: String,
    pub teacher: String,
    pub room_name: String,
    /// "Monday 09:00", with "-10:00" appended when an end time is known
    pub when: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBar {
    pub day: Weekday,
    /// "Mon", "Tue", ...
    pub label: &'static str,
    pub count: usize,
    pub height_px: usize,
}

pub fn counters(snapshot: &Snapshot) -> Counters {
    Counters {
        total_classes: snapshot.stats.total_classes,
        total_classrooms: snapshot.stats.total_classrooms,
        active_slots: snapshot.classes.len(),
    }
}

pub fn classroom_cards(snapshot: &Snapshot) -> Vec<ClassroomCard> {
    snapshot
        .classrooms
        .iter()
        .map(|r| ClassroomCard {
            name: r.name.clone(),
            capacity: format!("Cap: {}", r.capacity),
            equipment: format!("Eq: {}", r.equipment),
        })
        .collect()
}

/// One row per cached class, in cache order. Unlike the timetable, nothing
/// is hidden here.
pub fn class_rows(snapshot: &Snapshot) -> Vec<ClassRow> {
    snapshot
        .classes
        .iter()
        .map(|c| {
            let when = match &c.end_time {
                Some(end) if !end.is_empty() => format!("{} {}-{}", c.day, c.start_time, end),
                _ => format!("{} {}", c.day, c.start_time),
            };
            ClassRow {
                id: c.id,
                class_id: c.class_id.clone(),
                name: c.name.clone(),
                teacher: c.teacher.clone(),
                room_name: c.room_name.clone(),
                when,
            }
        })
        .collect()
}

/// Options for the add-class room select.
pub fn room_options(snapshot: &Snapshot) -> Vec<RoomOption> {
    snapshot
        .classrooms
        .iter()
        .map(|r| RoomOption {
            value: r.name.clone(),
            label: r.name.clone(),
            selected: false,
        })
        .collect()
}

/// Options for the timetable filter: "all" followed by every classroom, with
/// the active filter selected.
pub fn filter_options(snapshot: &Snapshot, filter: &RoomFilter) -> Vec<RoomOption> {
    let mut options = vec![RoomOption {
        value: "all".to_string(),
        label: "All rooms".to_string(),
        selected: *filter == RoomFilter::All,
    }];
    options.extend(room_options(snapshot).into_iter().map(|mut o| {
        o.selected = filter.as_str() == o.value && *filter != RoomFilter::All;
        o
    }));
    options
}

/// Classes per weekday, scaled to bar heights.
pub fn report(snapshot: &Snapshot) -> Vec<DayBar> {
    Weekday::ALL
        .iter()
        .map(|&day| {
            let count = snapshot.classes.iter().filter(|c| day.matches(&c.day)).count();
            DayBar {
                day,
                label: day.short(),
                count,
                height_px: count * BAR_PX_PER_CLASS,
            }
        })
        .collect()
}

/// Everything the dashboard page shows, derived from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub counters: Counters,
    pub classrooms: Vec<ClassroomCard>,
    pub classes: Vec<ClassRow>,
    pub room_options: Vec<RoomOption>,
    pub filter_options: Vec<RoomOption>,
    pub timetable: TimetableGrid,
    pub report: Vec<DayBar>,
}

impl DashboardView {
    pub fn build(snapshot: &Snapshot, hours: RangeInclusive<u32>, filter: &RoomFilter) -> Self {
        Self {
            counters: counters(snapshot),
            classrooms: classroom_cards(snapshot),
            classes: class_rows(snapshot),
            room_options: room_options(snapshot),
            filter_options: filter_options(snapshot, filter),
            timetable: timetable::layout(&snapshot.classes, hours, filter),
            report: report(snapshot),
        }
    }
}
