//! Schedule normalization.
//!
//! Maps roster records into the teacher directory, resolves teacher
//! names on schedule records, and consolidates co-taught rows into
//! single sessions. Ingestion is lenient by design: rows that cannot
//! become a valid session are dropped silently, and only structural
//! problems (missing required columns, an unusable roster) are errors.

use std::collections::HashMap;

use log::debug;

use crate::error::DataFormatError;
use crate::models::{ScheduleSession, Table, TeacherDirectory, TeacherEntry};

/// Schedule column: day name.
pub const COL_DAY: &str = "Hari";
/// Schedule column: period label.
pub const COL_PERIOD: &str = "Jam Ke";
/// Schedule column: class name.
pub const COL_CLASS: &str = "Kelas";
/// Schedule column: subject.
pub const COL_SUBJECT: &str = "Mata Pelajaran";
/// Schedule column: time slot.
pub const COL_TIME: &str = "waktu";
/// Schedule column (advisory): teacher id.
pub const COL_TEACHER_ID: &str = "idGuru";
/// Schedule column (advisory): teacher name.
pub const COL_TEACHER_NAME: &str = "Guru";
/// Schedule column (advisory): numeric day index.
pub const COL_DAY_INDEX: &str = "IDHari";

/// Columns a schedule table must declare before any row is processed.
pub const REQUIRED_COLUMNS: [&str; 5] = [COL_DAY, COL_PERIOD, COL_CLASS, COL_SUBJECT, COL_TIME];

/// Subject marker for break periods; such rows never become sessions.
pub const BREAK_SUBJECT: &str = "Istirahat";

/// Builds the id → name directory from a roster table.
///
/// Columns are positional regardless of header text: column 0 is the id,
/// column 1 the name, and a row counts only when both are non-empty.
/// An empty roster (no data rows at all) is a valid empty directory; a
/// roster whose rows are all unusable is a [`DataFormatError`].
pub fn build_teacher_directory(table: &Table) -> Result<TeacherDirectory, DataFormatError> {
    if table.records.is_empty() {
        return Ok(TeacherDirectory::new());
    }

    let entries: Vec<TeacherEntry> = table
        .records
        .iter()
        .filter_map(|record| {
            let id = record.value_at(0).unwrap_or("");
            let name = record.value_at(1).unwrap_or("");
            if id.is_empty() || name.is_empty() {
                return None;
            }
            Some(TeacherEntry::new(id, name))
        })
        .collect();

    if entries.is_empty() {
        return Err(DataFormatError::NoUsableTeachers);
    }

    debug!("roster yielded {} teacher entries", entries.len());
    Ok(TeacherDirectory::from_entries(entries))
}

/// Whether a time-slot label looks like a time value (two leading digits).
fn is_time_like(slot: &str) -> bool {
    let bytes = slot.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_digit() && bytes[1].is_ascii_digit()
}

/// Normalizes schedule records into consolidated sessions.
///
/// Fails fast when any required column is absent, naming every missing
/// column. Valid rows are grouped by the (day, time slot, class, subject)
/// tuple in input order; rows sharing a tuple append their teacher id and
/// resolved name to the existing session, which is how a co-taught period
/// becomes one session with multiple teacher identities.
///
/// A row is dropped (never an error) when its teacher id, day, time slot,
/// or class is empty, its teacher id is `-`, its subject is the break
/// marker, or its time slot does not start with two digits.
pub fn normalize_schedule(
    table: &Table,
    directory: &TeacherDirectory,
) -> Result<Vec<ScheduleSession>, DataFormatError> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !table.has_column(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(DataFormatError::MissingColumns { missing });
    }

    let mut sessions: Vec<ScheduleSession> = Vec::new();
    let mut by_key: HashMap<(String, String, String, String), usize> = HashMap::new();
    let mut dropped = 0usize;

    for record in &table.records {
        let day = record.get_or_empty(COL_DAY);
        let time_slot = record.get_or_empty(COL_TIME);
        let class_name = record.get_or_empty(COL_CLASS);
        let subject = record.get_or_empty(COL_SUBJECT);
        let teacher_id = record.get_or_empty(COL_TEACHER_ID).trim();

        if teacher_id.is_empty()
            || teacher_id == "-"
            || day.is_empty()
            || time_slot.is_empty()
            || class_name.is_empty()
            || subject == BREAK_SUBJECT
            || !is_time_like(time_slot)
        {
            dropped += 1;
            continue;
        }

        // Roster lookup miss keeps the name text from the row itself.
        let teacher_name = directory
            .name_for(teacher_id)
            .unwrap_or(record.get_or_empty(COL_TEACHER_NAME))
            .to_string();

        let key = (
            day.to_string(),
            time_slot.to_string(),
            class_name.to_string(),
            subject.to_string(),
        );
        match by_key.get(&key) {
            Some(&index) => sessions[index].push_teacher(teacher_id, teacher_name),
            None => {
                let mut session =
                    ScheduleSession::new(day, time_slot, class_name, subject, teacher_id, teacher_name);
                let hint = record.get_or_empty(COL_DAY_INDEX);
                if !hint.is_empty() {
                    session = session.with_day_index_hint(hint);
                }
                by_key.insert(key, sessions.len());
                sessions.push(session);
            }
        }
    }

    debug!(
        "normalized {} rows into {} sessions ({} dropped)",
        table.records.len(),
        sessions.len(),
        dropped
    );
    Ok(sessions)
}
