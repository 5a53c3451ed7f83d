//! Canonical day and time-slot ordering.
//!
//! Derives the sorted axis labels the layout engine and renderers use.
//! Time slots order by the substring before the first space, which
//! handles `"HH:MM - HH:MM"` labels without parsing times.

use crate::models::ScheduleSession;

/// Fixed weekday vocabulary, in week order.
pub const CANONICAL_DAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jum'at", "Sabtu", "Minggu",
];

/// Position of a day in the canonical week, if it is a known weekday.
pub fn canonical_day_index(day: &str) -> Option<usize> {
    CANONICAL_DAYS.iter().position(|d| *d == day)
}

/// Label portion a time slot sorts by: everything before the first space.
fn time_sort_key(slot: &str) -> &str {
    slot.split(' ').next().unwrap_or(slot)
}

/// Distinct day values, in canonical week order.
///
/// Day names outside the canonical vocabulary sort after every known
/// day and keep their encounter order among themselves. (The relative
/// order of unknown days is a documented choice, not data-driven —
/// source files with free-form day labels are a degenerate case.)
pub fn ordered_days(sessions: &[ScheduleSession]) -> Vec<String> {
    let mut days: Vec<String> = Vec::new();
    for session in sessions {
        if !days.contains(&session.day) {
            days.push(session.day.clone());
        }
    }
    days.sort_by_key(|day| canonical_day_index(day).unwrap_or(CANONICAL_DAYS.len()));
    days
}

/// Distinct time-slot labels, ordered by the prefix before the first space.
pub fn ordered_time_slots(sessions: &[ScheduleSession]) -> Vec<String> {
    let mut slots: Vec<String> = Vec::new();
    for session in sessions {
        if !slots.contains(&session.time_slot) {
            slots.push(session.time_slot.clone());
        }
    }
    slots.sort_by(|a, b| time_sort_key(a).cmp(time_sort_key(b)));
    slots
}

/// Distinct individual class names (comma-joined values split), sorted.
pub fn all_class_names(sessions: &[ScheduleSession]) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for session in sessions {
        for class in session.class_list() {
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_string());
            }
        }
    }
    classes.sort();
    classes
}
