//! Time × day grid layout.
//!
//! Projects consolidated sessions onto a matrix of [`GridCell`]s for a
//! single focus entity (one class or one teacher). Consecutive slots
//! holding the same session identity merge into one spanning anchor
//! cell; the slots it covers become zero-span placeholders a renderer
//! must skip. Runs are contiguous by time-slot *index*, not wall-clock
//! gap — a hole in the slot axis splits the run into separate anchors.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{ScheduleSession, TeacherDirectory};
use crate::ordering::all_class_names;

/// The entity a grid is projected for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridFocus {
    /// Sessions whose comma-split class list contains this class name.
    Class(String),
    /// Sessions whose teacher-name list contains this teacher name.
    Teacher(String),
}

impl GridFocus {
    /// Whether a session belongs in this focus's grid.
    pub fn matches(&self, session: &ScheduleSession) -> bool {
        match self {
            GridFocus::Class(name) => session.involves_class(name),
            GridFocus::Teacher(name) => session.involves_teacher(name),
        }
    }

    /// Identity under which adjacent sessions merge into one span.
    ///
    /// A class grid shows subject + teachers, so sessions merge when both
    /// agree; a teacher grid shows class + subject.
    fn merge_identity(&self, session: &ScheduleSession) -> (String, String) {
        match self {
            GridFocus::Class(_) => (session.subject.clone(), session.teacher_display()),
            GridFocus::Teacher(_) => (session.class_name.clone(), session.subject.clone()),
        }
    }
}

/// One cell of the rendered grid.
///
/// `span >= 1` on an anchor states how many consecutive time rows it
/// occupies. `span == 0` with a session marks a slot covered by the
/// anchor above it — present for coverage queries, skipped by renderers.
/// No session at all is an empty placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// The session occupying this slot, if any.
    pub session: Option<ScheduleSession>,
    /// Rows this cell spans; 0 when covered by an anchor above.
    pub span: usize,
}

impl GridCell {
    /// An unoccupied slot.
    pub fn empty() -> Self {
        Self::default()
    }

    fn anchor(session: ScheduleSession, span: usize) -> Self {
        Self {
            session: Some(session),
            span,
        }
    }

    fn covered(session: ScheduleSession) -> Self {
        Self {
            session: Some(session),
            span: 0,
        }
    }

    /// Whether no session occupies this slot.
    pub fn is_empty(&self) -> bool {
        self.session.is_none()
    }

    /// Whether this cell starts a (possibly single-row) span.
    pub fn is_anchor(&self) -> bool {
        self.session.is_some() && self.span >= 1
    }

    /// Whether this slot is covered by an anchor above it.
    pub fn is_covered(&self) -> bool {
        self.session.is_some() && self.span == 0
    }
}

/// A laid-out grid: `time_slots.len()` rows × `days.len()` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleGrid {
    /// Column labels, in render order.
    pub days: Vec<String>,
    /// Row labels, in render order.
    pub time_slots: Vec<String>,
    /// Cells indexed `[time][day]`.
    pub cells: Vec<Vec<GridCell>>,
}

impl ScheduleGrid {
    /// Cell at (time row, day column), if in range.
    pub fn cell(&self, time_index: usize, day_index: usize) -> Option<&GridCell> {
        self.cells.get(time_index).and_then(|row| row.get(day_index))
    }

    /// Number of cells holding a session (anchors and covered slots).
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }
}

/// Projects sessions matching `focus` onto a time × day grid.
///
/// `days` and `time_slots` are the precomputed axis labels (see
/// [`crate::ordering`]). Within one day, matching sessions that share the
/// focus's merge identity and sit on index-adjacent slots become one
/// anchor cell spanning the run; a slot already claimed by another
/// session ends the run. For "all classes" / "all teachers" views, call
/// once per entity ([`layout_all_classes`], [`layout_all_teachers`]).
pub fn layout(
    sessions: &[ScheduleSession],
    days: &[String],
    time_slots: &[String],
    focus: &GridFocus,
) -> ScheduleGrid {
    let mut cells = vec![vec![GridCell::empty(); days.len()]; time_slots.len()];

    for (day_index, day) in days.iter().enumerate() {
        let day_sessions: Vec<&ScheduleSession> = sessions
            .iter()
            .filter(|s| focus.matches(s) && s.day == *day)
            .collect();

        let mut placed: HashSet<(String, String)> = HashSet::new();
        for session in &day_sessions {
            let identity = focus.merge_identity(session);
            if !placed.insert(identity.clone()) {
                continue;
            }

            // Slot indices of every session sharing this identity today,
            // first session winning when two share a slot.
            let mut members: Vec<(usize, &ScheduleSession)> = day_sessions
                .iter()
                .filter(|s| focus.merge_identity(s) == identity)
                .filter_map(|s| {
                    time_slots
                        .iter()
                        .position(|slot| *slot == s.time_slot)
                        .map(|i| (i, *s))
                })
                .collect();
            members.sort_by_key(|(i, _)| *i);
            members.dedup_by_key(|(i, _)| *i);

            let mut i = 0;
            while i < members.len() {
                if !cells[members[i].0][day_index].is_empty() {
                    i += 1;
                    continue;
                }
                // Grow the run while indices stay adjacent and cells free.
                let start = i;
                let mut end = i + 1;
                while end < members.len()
                    && members[end].0 == members[end - 1].0 + 1
                    && cells[members[end].0][day_index].is_empty()
                {
                    end += 1;
                }

                let (anchor_index, anchor_session) = members[start];
                cells[anchor_index][day_index] =
                    GridCell::anchor(anchor_session.clone(), end - start);
                for &(covered_index, covered_session) in &members[start + 1..end] {
                    cells[covered_index][day_index] = GridCell::covered(covered_session.clone());
                }
                i = end;
            }
        }
    }

    ScheduleGrid {
        days: days.to_vec(),
        time_slots: time_slots.to_vec(),
        cells,
    }
}

/// One grid per individual class name, sorted by class name.
pub fn layout_all_classes(
    sessions: &[ScheduleSession],
    days: &[String],
    time_slots: &[String],
) -> Vec<(String, ScheduleGrid)> {
    all_class_names(sessions)
        .into_iter()
        .map(|name| {
            let grid = layout(sessions, days, time_slots, &GridFocus::Class(name.clone()));
            (name, grid)
        })
        .collect()
}

/// One grid per roster teacher name, sorted by name.
pub fn layout_all_teachers(
    sessions: &[ScheduleSession],
    days: &[String],
    time_slots: &[String],
    directory: &TeacherDirectory,
) -> Vec<(String, ScheduleGrid)> {
    let mut names = directory.sorted_names();
    names.dedup();
    names
        .into_iter()
        .map(|name| {
            let grid = layout(sessions, days, time_slots, &GridFocus::Teacher(name.clone()));
            (name, grid)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeacherEntry;
    use crate::ordering::{ordered_days, ordered_time_slots};

    fn session(day: &str, slot: &str, class: &str, subject: &str, teacher: &str) -> ScheduleSession {
        ScheduleSession::new(day, slot, class, subject, "G001", teacher)
    }

    fn axes(sessions: &[ScheduleSession]) -> (Vec<String>, Vec<String>) {
        (ordered_days(sessions), ordered_time_slots(sessions))
    }

    #[test]
    fn test_single_session_is_span_one_anchor() {
        let sessions = vec![session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi")];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        let cell = grid.cell(0, 0).unwrap();
        assert!(cell.is_anchor());
        assert_eq!(cell.span, 1);
        assert_eq!(cell.session.as_ref().unwrap().subject, "Matematika");
    }

    #[test]
    fn test_unmatched_slots_stay_empty() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Selasa", "08:00 - 08:45", "10-A", "Fisika", "Sari"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        // 2 days × 2 slots, only two occupied.
        assert_eq!(grid.occupied_count(), 2);
        assert!(grid.cell(1, 0).unwrap().is_empty());
        assert!(grid.cell(0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_adjacent_identical_sessions_merge_into_span() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "07:45 - 08:30", "10-A", "Matematika", "Budi"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        let anchor = grid.cell(0, 0).unwrap();
        assert_eq!(anchor.span, 2);
        let covered = grid.cell(1, 0).unwrap();
        assert!(covered.is_covered());
        assert_eq!(
            covered.session.as_ref().unwrap().time_slot,
            "07:45 - 08:30"
        );
    }

    #[test]
    fn test_index_gap_splits_run_into_two_anchors() {
        // 08:00 exists on the slot axis (used by another class), so the
        // matching sessions at 07:00 and 09:00 are not index-adjacent.
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "08:00 - 08:45", "10-B", "Fisika", "Sari"),
            session("Senin", "09:00 - 09:45", "10-A", "Matematika", "Budi"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        assert_eq!(grid.cell(0, 0).unwrap().span, 1);
        assert!(grid.cell(1, 0).unwrap().is_empty());
        assert_eq!(grid.cell(2, 0).unwrap().span, 1);
    }

    #[test]
    fn test_contiguous_without_gap_spans_fully() {
        // Same three slots but the middle one also belongs to 10-A with
        // the same identity: one span of three.
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "08:00 - 08:45", "10-A", "Matematika", "Budi"),
            session("Senin", "09:00 - 09:45", "10-A", "Matematika", "Budi"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        assert_eq!(grid.cell(0, 0).unwrap().span, 3);
        assert!(grid.cell(1, 0).unwrap().is_covered());
        assert!(grid.cell(2, 0).unwrap().is_covered());
    }

    #[test]
    fn test_different_counterpart_does_not_merge_in_class_view() {
        // Same subject, different teacher: two separate anchors.
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "07:45 - 08:30", "10-A", "Matematika", "Sari"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        assert_eq!(grid.cell(0, 0).unwrap().span, 1);
        assert_eq!(grid.cell(1, 0).unwrap().span, 1);
    }

    #[test]
    fn test_teacher_focus_merges_on_class_and_subject() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "07:45 - 08:30", "10-A", "Matematika", "Budi"),
            session("Senin", "08:30 - 09:15", "10-B", "Matematika", "Budi"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Teacher("Budi".into()));

        assert_eq!(grid.cell(0, 0).unwrap().span, 2);
        assert!(grid.cell(1, 0).unwrap().is_covered());
        assert_eq!(grid.cell(2, 0).unwrap().span, 1); // other class
    }

    #[test]
    fn test_class_membership_via_comma_split() {
        let sessions = vec![session(
            "Senin",
            "07:00 - 07:45",
            "10-A, 10-B",
            "Olahraga",
            "Budi",
        )];
        let (days, slots) = axes(&sessions);

        for class in ["10-A", "10-B"] {
            let grid = layout(&sessions, &days, &slots, &GridFocus::Class(class.into()));
            assert!(grid.cell(0, 0).unwrap().is_anchor(), "missing for {class}");
        }
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-C".into()));
        assert!(grid.cell(0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_slot_collision_keeps_first_session() {
        // Two sessions for the same class at the same slot (bad data):
        // the first claims the cell, the second is not placed.
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "07:00 - 07:45", "10-A", "Fisika", "Sari"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        assert_eq!(grid.occupied_count(), 1);
        assert_eq!(
            grid.cell(0, 0).unwrap().session.as_ref().unwrap().subject,
            "Matematika"
        );
    }

    #[test]
    fn test_coverage_no_session_dropped_or_double_counted() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "07:45 - 08:30", "10-A", "Matematika", "Budi"),
            session("Senin", "08:30 - 09:15", "10-A", "Fisika", "Sari"),
            session("Selasa", "07:00 - 07:45", "10-A", "Kimia", "Budi"),
        ];
        let (days, slots) = axes(&sessions);
        let grid = layout(&sessions, &days, &slots, &GridFocus::Class("10-A".into()));

        // Every matching session occupies exactly one cell, anchor or covered.
        let mut seen: Vec<(String, String)> = grid
            .cells
            .iter()
            .flatten()
            .filter_map(|c| c.session.as_ref())
            .map(|s| (s.day.clone(), s.time_slot.clone()))
            .collect();
        seen.sort();
        let mut expected: Vec<(String, String)> = sessions
            .iter()
            .map(|s| (s.day.clone(), s.time_slot.clone()))
            .collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_layout_all_classes_enumerates_each_class() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A, 10-B", "Olahraga", "Budi"),
            session("Selasa", "07:00 - 07:45", "10-C", "Kimia", "Sari"),
        ];
        let (days, slots) = axes(&sessions);
        let grids = layout_all_classes(&sessions, &days, &slots);
        let names: Vec<&str> = grids.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["10-A", "10-B", "10-C"]);
        assert_eq!(grids[0].1.occupied_count(), 1);
    }

    #[test]
    fn test_layout_all_teachers_uses_roster_names() {
        let sessions = vec![
            session("Senin", "07:00 - 07:45", "10-A", "Matematika", "Budi"),
            session("Senin", "08:00 - 08:45", "10-B", "Fisika", "Sari"),
        ];
        let directory = TeacherDirectory::from_entries(vec![
            TeacherEntry::new("G002", "Sari"),
            TeacherEntry::new("G001", "Budi"),
        ]);
        let (days, slots) = axes(&sessions);
        let grids = layout_all_teachers(&sessions, &days, &slots, &directory);
        let names: Vec<&str> = grids.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Budi", "Sari"]);
        assert_eq!(grids[1].1.occupied_count(), 1);
    }

    #[test]
    fn test_empty_sessions_yield_empty_grid() {
        let grid = layout(&[], &[], &[], &GridFocus::Class("10-A".into()));
        assert!(grid.cells.is_empty());
        assert_eq!(grid.occupied_count(), 0);
    }
}
