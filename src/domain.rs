//! Domain models for student records.
//!
//! This module contains the core domain types including students, roll
//! numbers, marks and grades, the in-memory roster, and configuration.

/// Student record and its typed fields.
pub mod student;
pub use student::{Marks, RollNo, Student};

/// Letter grades derived from marks.
pub mod grade;
pub use grade::Grade;

mod roster;
pub use roster::{Roster, RosterError};

mod config;
pub use config::Config;
