//! Timetable domain models.
//!
//! Core data types flowing through the pipeline, in dependency order:
//! raw records out of the reader, the roster directory, consolidated
//! sessions, and derived conflict records. Grid cells live with the
//! layout engine in [`crate::grid`].

mod conflict;
mod directory;
mod record;
mod session;

pub use conflict::ConflictRecord;
pub use directory::{TeacherDirectory, TeacherEntry};
pub use record::{RawRecord, Table};
pub use session::ScheduleSession;
