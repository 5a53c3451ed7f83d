//! Double-booking conflict record.

use serde::{Deserialize, Serialize};

/// One teacher booked into two or more classes at the same day and slot.
///
/// Emitted only when the class-name set for a (teacher, day, time slot)
/// key has at least two members; `class_names` keeps first-seen order
/// and never repeats a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Roster name for the teacher, or the `Teacher ID: <id>` fallback.
    pub teacher_label: String,
    /// Day of the collision.
    pub day: String,
    /// Time slot of the collision.
    pub time_slot: String,
    /// Distinct classes competing for the teacher, in first-seen order.
    pub class_names: Vec<String>,
}

impl ConflictRecord {
    /// Creates a conflict record.
    pub fn new(
        teacher_label: impl Into<String>,
        day: impl Into<String>,
        time_slot: impl Into<String>,
        class_names: Vec<String>,
    ) -> Self {
        Self {
            teacher_label: teacher_label.into(),
            day: day.into(),
            time_slot: time_slot.into(),
            class_names,
        }
    }
}
