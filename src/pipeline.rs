//! End-to-end pipeline: two raw text blobs in, normalized model out.
//!
//! Wires reader → directory → normalizer → ordering into one call, the
//! way an ingesting application re-runs the whole chain whenever either
//! input text changes. Every rebuild is a total replace over private
//! structures — no incremental update, no shared state — so the model
//! is safe to construct on any thread and snapshot for collaborators.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::conflict::detect_conflicts;
use crate::error::DataFormatError;
use crate::grid::{layout, layout_all_classes, layout_all_teachers, GridFocus, ScheduleGrid};
use crate::models::{ConflictRecord, ScheduleSession, TeacherDirectory};
use crate::normalize::{build_teacher_directory, normalize_schedule};
use crate::ordering::{all_class_names, ordered_days, ordered_time_slots};
use crate::reader::{read_table, ROSTER_DELIMITERS, SCHEDULE_DELIMITERS};

/// The normalized, grid-ready schedule model.
///
/// Conflict reports and grids are derived views recomputed on demand;
/// nothing here mutates after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleModel {
    /// Consolidated sessions in first-seen order.
    pub sessions: Vec<ScheduleSession>,
    /// Teacher roster directory.
    pub directory: TeacherDirectory,
    /// Distinct days, canonical week order.
    pub days: Vec<String>,
    /// Distinct time slots, ordered by label prefix.
    pub time_slots: Vec<String>,
}

impl ScheduleModel {
    /// Parses and normalizes the two raw inputs.
    ///
    /// The schedule text is sniffed with the semicolon-first candidate
    /// order, the roster with the comma-first order. Fails only on a
    /// missing required schedule column or a non-empty but unusable
    /// roster; invalid rows are dropped silently.
    pub fn from_texts(schedule_text: &str, roster_text: &str) -> Result<Self, DataFormatError> {
        let roster = read_table(roster_text, &ROSTER_DELIMITERS);
        let directory = build_teacher_directory(&roster)?;

        let schedule = read_table(schedule_text, &SCHEDULE_DELIMITERS);
        let sessions = normalize_schedule(&schedule, &directory)?;

        let days = ordered_days(&sessions);
        let time_slots = ordered_time_slots(&sessions);
        debug!(
            "model built: {} sessions across {} days and {} slots",
            sessions.len(),
            days.len(),
            time_slots.len()
        );

        Ok(Self {
            sessions,
            directory,
            days,
            time_slots,
        })
    }

    /// Double-booking report for the current sessions.
    pub fn conflicts(&self) -> Vec<ConflictRecord> {
        detect_conflicts(&self.sessions, &self.directory)
    }

    /// Grid for one class or teacher.
    pub fn grid_for(&self, focus: &GridFocus) -> ScheduleGrid {
        layout(&self.sessions, &self.days, &self.time_slots, focus)
    }

    /// One grid per class, sorted by class name.
    pub fn class_grids(&self) -> Vec<(String, ScheduleGrid)> {
        layout_all_classes(&self.sessions, &self.days, &self.time_slots)
    }

    /// One grid per roster teacher, sorted by name.
    pub fn teacher_grids(&self) -> Vec<(String, ScheduleGrid)> {
        layout_all_teachers(&self.sessions, &self.days, &self.time_slots, &self.directory)
    }

    /// Distinct individual class names, sorted.
    pub fn class_names(&self) -> Vec<String> {
        all_class_names(&self.sessions)
    }

    /// Roster teacher names, sorted.
    pub fn teacher_names(&self) -> Vec<String> {
        self.directory.sorted_names()
    }
}
