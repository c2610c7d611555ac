//! Class schedule models and weekday grouping.
//!
//! Timetable rows arrive flat from the backend. Screens render them as
//! one section per weekday, so [`group_by_day`] reorders the rows into
//! Monday-to-Sunday groups sorted by start time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use slateport_core::ListSource;
use slateport_core::serde::{deserialize_flexible_id, deserialize_flexible_u32};
use thiserror::Error;

use crate::courses::{Course, CoursePayload};
use crate::teachers::{Teacher, TeacherPayload};

/// Days of the teaching week, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Raised when a string is not a recognizable weekday.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weekday: {0}")]
pub struct ParseDayError(pub String);

impl DayOfWeek {
    /// All days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = ParseDayError;

    /// Accepts full names and three-letter abbreviations, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(DayOfWeek::Monday),
            "tuesday" | "tue" => Ok(DayOfWeek::Tuesday),
            "wednesday" | "wed" => Ok(DayOfWeek::Wednesday),
            "thursday" | "thu" => Ok(DayOfWeek::Thursday),
            "friday" | "fri" => Ok(DayOfWeek::Friday),
            "saturday" | "sat" => Ok(DayOfWeek::Saturday),
            "sunday" | "sun" => Ok(DayOfWeek::Sunday),
            other => Err(ParseDayError(other.to_string())),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A scheduled class, normalized for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    pub id: String,
    pub day: Option<DayOfWeek>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub course_name: String,
    pub room: Option<String>,
    pub semester: Option<u32>,
    pub teacher_name: Option<String>,
}

/// Raw timetable row; `course` and `teacher` may be populated
/// references.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimetablePayload {
    #[serde(alias = "_id", deserialize_with = "deserialize_flexible_id")]
    pub id: Option<String>,
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    #[serde(alias = "subject")]
    pub course_name: Option<String>,
    pub course: Option<CoursePayload>,
    pub room: Option<String>,
    #[serde(deserialize_with = "deserialize_flexible_u32")]
    pub semester: Option<u32>,
    pub teacher_name: Option<String>,
    pub teacher: Option<TeacherPayload>,
}

impl TimetableEntry {
    /// Flattens a raw row.
    ///
    /// An unrecognizable `day` string becomes `None`; such entries are
    /// kept in the flat list but dropped by [`group_by_day`].
    #[must_use]
    pub fn from_payload(payload: TimetablePayload) -> Self {
        let course_name = payload
            .course_name
            .or_else(|| {
                payload
                    .course
                    .map(Course::from_payload)
                    .map(|c| c.name)
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or_default();
        let teacher_name = payload.teacher_name.or_else(|| {
            payload
                .teacher
                .map(Teacher::from_payload)
                .map(|t| t.full_name)
                .filter(|name| !name.is_empty())
        });
        Self {
            id: payload.id.unwrap_or_default(),
            day: payload.day.as_deref().and_then(|s| s.parse().ok()),
            start_time: payload.start_time,
            end_time: payload.end_time,
            course_name,
            room: payload.room,
            semester: payload.semester,
            teacher_name,
        }
    }
}

/// Query filters for the timetable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimetableFilter {
    pub semester: Option<u32>,
    pub day: Option<DayOfWeek>,
}

impl TimetableFilter {
    /// Renders the filter as query parameters, skipping unset fields.
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(semester) = self.semester {
            query.push(("semester", semester.to_string()));
        }
        if let Some(day) = self.day {
            query.push(("day", day.as_str().to_string()));
        }
        query
    }
}

/// A day's classes, sorted by start time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub day: DayOfWeek,
    pub entries: Vec<TimetableEntry>,
}

/// A week of classes grouped per day, tagged with where the rows came
/// from.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekTimetable {
    pub days: Vec<DayGroup>,
    pub source: ListSource,
}

/// Groups entries by weekday in Monday-to-Sunday order.
///
/// Days with no classes are omitted and entries without a recognizable
/// day are dropped. Within a day, entries sort by start time; entries
/// whose start time does not parse as `HH:MM` sort last, keeping their
/// relative order.
#[must_use]
pub fn group_by_day(entries: &[TimetableEntry]) -> Vec<DayGroup> {
    let mut groups: BTreeMap<DayOfWeek, Vec<TimetableEntry>> = BTreeMap::new();
    for entry in entries {
        if let Some(day) = entry.day {
            groups.entry(day).or_default().push(entry.clone());
        }
    }
    groups
        .into_iter()
        .map(|(day, mut entries)| {
            entries.sort_by_key(|entry| {
                entry
                    .start_time
                    .as_deref()
                    .and_then(parse_minutes)
                    .unwrap_or(u32::MAX)
            });
            DayGroup { day, entries }
        })
        .collect()
}

/// Minutes since midnight for a 24-hour `HH:MM` string.
fn parse_minutes(time: &str) -> Option<u32> {
    let (hours, minutes) = time.trim().split_once(':')?;
    let hours: u32 = hours.trim().parse().ok()?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    (hours < 24 && minutes < 60).then_some(hours * 60 + minutes)
}
