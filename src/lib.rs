//! Timetable normalization and layout pipeline.
//!
//! Ingests two loosely delimited text tables — a class schedule and a
//! teacher roster — normalizes them into a canonical session model,
//! detects teacher double-booking, and projects sessions onto a
//! time × day grid with row-span merging. The whole chain is a pure,
//! synchronous transform: re-running it on the same inputs yields the
//! same model, and every derived view is recomputed from scratch.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `RawRecord`, `Table`, `TeacherDirectory`,
//!   `ScheduleSession`, `ConflictRecord`
//! - **`reader`**: Delimiter-sniffing tabular reader
//! - **`normalize`**: Roster directory + co-teaching consolidation
//! - **`conflict`**: Teacher double-booking detection
//! - **`grid`**: Time × day projection with spanning cells
//! - **`ordering`**: Canonical day/time-slot axes
//! - **`pipeline`**: `ScheduleModel` — the whole chain in one call
//!
//! # Example
//!
//! ```
//! use timetable_core::pipeline::ScheduleModel;
//! use timetable_core::grid::GridFocus;
//!
//! let roster = "idGuru,Nama Guru\nG001,Budi";
//! let schedule = "\
//! Hari;Jam Ke;Kelas;Mata Pelajaran;waktu;idGuru;Guru
//! Senin;1;10-A;Matematika;07:00 - 07:45;G001;Budi";
//!
//! let model = ScheduleModel::from_texts(schedule, roster)?;
//! assert_eq!(model.sessions.len(), 1);
//! assert!(model.conflicts().is_empty());
//!
//! let grid = model.grid_for(&GridFocus::Class("10-A".into()));
//! assert!(grid.cell(0, 0).unwrap().is_anchor());
//! # Ok::<(), timetable_core::error::DataFormatError>(())
//! ```

pub mod conflict;
pub mod error;
pub mod grid;
pub mod models;
pub mod normalize;
pub mod ordering;
pub mod pipeline;
pub mod reader;
