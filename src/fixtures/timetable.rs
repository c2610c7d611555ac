//! Sample weekly timetable.

use slateport_models::timetable::{DayOfWeek, TimetableEntry};

fn entry(
    id: &str,
    day: DayOfWeek,
    start_time: &str,
    end_time: &str,
    course_name: &str,
    room: &str,
    teacher_name: &str,
) -> TimetableEntry {
    TimetableEntry {
        id: id.to_string(),
        day: Some(day),
        start_time: Some(start_time.to_string()),
        end_time: Some(end_time.to_string()),
        course_name: course_name.to_string(),
        room: Some(room.to_string()),
        semester: Some(5),
        teacher_name: Some(teacher_name.to_string()),
    }
}

#[must_use]
pub fn sample() -> Vec<TimetableEntry> {
    vec![
        entry(
            "tt-01",
            DayOfWeek::Monday,
            "09:00",
            "10:00",
            "Operating Systems",
            "LH-2",
            "Vikram Desai",
        ),
        entry(
            "tt-02",
            DayOfWeek::Monday,
            "11:00",
            "12:00",
            "Database Systems",
            "LH-1",
            "Farhan Ali",
        ),
        entry(
            "tt-03",
            DayOfWeek::Tuesday,
            "09:00",
            "10:00",
            "Computer Networks",
            "LH-2",
            "Vikram Desai",
        ),
        entry(
            "tt-04",
            DayOfWeek::Wednesday,
            "10:00",
            "11:00",
            "Operating Systems",
            "LAB-3",
            "Vikram Desai",
        ),
        entry(
            "tt-05",
            DayOfWeek::Thursday,
            "09:00",
            "10:00",
            "Database Systems",
            "LH-1",
            "Farhan Ali",
        ),
        entry(
            "tt-06",
            DayOfWeek::Friday,
            "14:00",
            "15:00",
            "Computer Networks",
            "LAB-1",
            "Vikram Desai",
        ),
    ]
}
