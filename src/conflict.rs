//! Teacher double-booking detection.
//!
//! Purely derived from the consolidated session list: every
//! (teacher id, day, time slot) occupancy is accumulated, and any key
//! claimed by two or more distinct classes is a conflict. Independent of
//! grid layout and callable before any rendering concern exists.

use std::collections::HashMap;

use log::debug;

use crate::models::{ConflictRecord, ScheduleSession, TeacherDirectory};

/// Reports every teacher taught in more than one class at the same time.
///
/// A consolidated session contributes one occupancy fact per entry of
/// its teacher-id list, each mapped to the session's full class-name
/// string (comma-joined class labels count as one booking, not several).
/// Class names accumulate per key with set semantics in first-seen order.
///
/// Output is sorted by (teacher label, day, time slot) so repeated runs
/// over the same sessions compare equal. Structurally valid input never
/// fails; an empty session list yields an empty report.
pub fn detect_conflicts(
    sessions: &[ScheduleSession],
    directory: &TeacherDirectory,
) -> Vec<ConflictRecord> {
    let mut occupancy: HashMap<(String, String, String), Vec<String>> = HashMap::new();

    for session in sessions {
        for teacher_id in &session.teacher_ids {
            let key = (
                teacher_id.clone(),
                session.day.clone(),
                session.time_slot.clone(),
            );
            let classes = occupancy.entry(key).or_default();
            if !classes.iter().any(|c| c == &session.class_name) {
                classes.push(session.class_name.clone());
            }
        }
    }

    let mut conflicts: Vec<ConflictRecord> = occupancy
        .into_iter()
        .filter(|(_, classes)| classes.len() >= 2)
        .map(|((teacher_id, day, time_slot), classes)| {
            ConflictRecord::new(directory.label_for(&teacher_id), day, time_slot, classes)
        })
        .collect();

    conflicts.sort_by(|a, b| {
        (&a.teacher_label, &a.day, &a.time_slot).cmp(&(&b.teacher_label, &b.day, &b.time_slot))
    });

    debug!(
        "conflict scan over {} sessions found {} conflicts",
        sessions.len(),
        conflicts.len()
    );
    conflicts
}
