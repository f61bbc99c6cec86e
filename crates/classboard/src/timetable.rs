//! Weekly timetable layout.
//!
//! Turns the flat class list into an hour x weekday grid. Each cell shows at
//! most one class: when several classes match the same cell, the one earliest
//! in the class list wins and the rest are reported in
//! [`TimetableGrid::hidden`] instead of being shown.

use crate::types::{ClassSession, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Default hour rows, 7:00 through 18:00.
pub const DEFAULT_HOURS: RangeInclusive<u32> = 7..=18;

/// Which rooms the timetable shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomFilter {
    #[default]
    All,
    Room(String),
}

impl RoomFilter {
    /// Parses the filter select's value; "all" (or nothing) means every room.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("all") => RoomFilter::All,
            Some(room) => RoomFilter::Room(room.to_string()),
        }
    }

    pub fn admits(&self, room_name: &str) -> bool {
        match self {
            RoomFilter::All => true,
            RoomFilter::Room(room) => room == room_name,
        }
    }

    /// The value this filter has in the select element.
    pub fn as_str(&self) -> &str {
        match self {
            RoomFilter::All => "all",
            RoomFilter::Room(room) => room,
        }
    }
}

impl From<String> for RoomFilter {
    fn from(value: String) -> Self {
        RoomFilter::parse(Some(&value))
    }
}

impl From<RoomFilter> for String {
    fn from(filter: RoomFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The class placed in a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedClass {
    /// Id to delete when the cell is clicked
    pub id: i64,
    pub name: String,
    pub room_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub day: Weekday,
    pub class: Option<PlacedClass>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRow {
    pub hour: u32,
    /// "H:00"
    pub label: String,
    /// One cell per weekday, Monday first
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimetableGrid {
    pub filter: RoomFilter,
    pub rows: Vec<HourRow>,
    /// Ids of classes that matched an occupied cell and were left out
    pub hidden: Vec<i64>,
}

impl TimetableGrid {
    /// The cell for `hour` and `day`, if `hour` is within the grid.
    pub fn cell(&self, hour: u32, day: Weekday) -> Option<&Cell> {
        self.rows
            .iter()
            .find(|row| row.hour == hour)
            .and_then(|row| row.cells.iter().find(|cell| cell.day == day))
    }

    /// Occupied cells as (hour, day, class id), row by row.
    pub fn placements(&self) -> Vec<(u32, Weekday, i64)> {
        self.rows
            .iter()
            .flat_map(|row| {
                row.cells
                    .iter()
                    .filter_map(move |cell| cell.class.as_ref().map(|c| (row.hour, cell.day, c.id)))
            })
            .collect()
    }
}

/// Lays out `classes` over `hours` x Monday..Friday.
///
/// A class lands in the cell for its weekday and the hour parsed from its
/// start time, provided `filter` admits its room. Classes outside the hour
/// range, on other days, or with an unparseable start time are simply not
/// placed; they are not counted as hidden.
pub fn layout(classes: &[ClassSession], hours: RangeInclusive<u32>, filter: &RoomFilter) -> TimetableGrid {
    let mut hidden = Vec::new();

    let rows = hours
        .map(|hour| {
            let cells = Weekday::ALL
                .iter()
                .map(|&day| {
                    let mut matches = classes.iter().filter(|c| {
                        day.matches(&c.day)
                            && c.start_hour() == Some(hour)
                            && filter.admits(&c.room_name)
                    });

                    let class = matches.next().map(|c| PlacedClass {
                        id: c.id,
                        name: c.name.clone(),
                        room_name: c.room_name.clone(),
                    });
                    for extra in matches {
                        debug!(id = extra.id, day = %day, hour = hour, "Class hidden by an earlier one in the same slot");
                        hidden.push(extra.id);
                    }

                    Cell { day, class }
                })
                .collect();

            HourRow {
                hour,
                label: format!("{}:00", hour),
                cells,
            }
        })
        .collect();

    TimetableGrid {
        filter: filter.clone(),
        rows,
        hidden,
    }
}
