//! Consolidated schedule session.
//!
//! The canonical unit of the domain: one class period on one day and
//! time slot, carrying every teacher assigned to it. Rows that share the
//! (day, time slot, class, subject) tuple are merged into a single
//! session at normalization time — that is how co-teaching is modeled.

use serde::{Deserialize, Serialize};

/// One class-period instance with one or more teachers.
///
/// `class_name` may itself be a comma-joined list when the source data
/// co-schedules several classes in one row; membership tests split on
/// commas. Teacher id and name lists are parallel and keep encounter
/// order from the input; duplicates are not removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSession {
    /// Day name (canonical weekday vocabulary, or whatever the file says).
    pub day: String,
    /// Time slot label, e.g. `"07:00 - 07:45"`. Ordered by the substring
    /// before the first space.
    pub time_slot: String,
    /// Class name, possibly comma-joined for co-located classes.
    pub class_name: String,
    /// Subject taught in this session.
    pub subject: String,
    /// Teacher ids in encounter order, parallel to `teacher_names`.
    pub teacher_ids: Vec<String>,
    /// Resolved teacher names in encounter order, parallel to `teacher_ids`.
    pub teacher_names: Vec<String>,
    /// Optional numeric day index carried through from the source table.
    pub day_index_hint: Option<String>,
}

impl ScheduleSession {
    /// Creates a session with a single teacher.
    pub fn new(
        day: impl Into<String>,
        time_slot: impl Into<String>,
        class_name: impl Into<String>,
        subject: impl Into<String>,
        teacher_id: impl Into<String>,
        teacher_name: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            time_slot: time_slot.into(),
            class_name: class_name.into(),
            subject: subject.into(),
            teacher_ids: vec![teacher_id.into()],
            teacher_names: vec![teacher_name.into()],
            day_index_hint: None,
        }
    }

    /// Sets the day index hint.
    pub fn with_day_index_hint(mut self, hint: impl Into<String>) -> Self {
        self.day_index_hint = Some(hint.into());
        self
    }

    /// Appends a co-teacher (encounter order, no de-duplication).
    pub fn push_teacher(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.teacher_ids.push(id.into());
        self.teacher_names.push(name.into());
    }

    /// The consolidation identity: (day, time slot, class, subject).
    pub fn consolidation_key(&self) -> (String, String, String, String) {
        (
            self.day.clone(),
            self.time_slot.clone(),
            self.class_name.clone(),
            self.subject.clone(),
        )
    }

    /// Individual class names from the comma-joined `class_name`.
    pub fn class_list(&self) -> Vec<&str> {
        self.class_name
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect()
    }

    /// Whether this session involves the named class.
    pub fn involves_class(&self, class_name: &str) -> bool {
        self.class_list().contains(&class_name)
    }

    /// Whether this session involves the named teacher.
    pub fn involves_teacher(&self, teacher_name: &str) -> bool {
        self.teacher_names.iter().any(|n| n.trim() == teacher_name)
    }

    /// Teacher names joined for display, `"A, B"`.
    pub fn teacher_display(&self) -> String {
        self.teacher_names.join(", ")
    }
}
