//! In-memory store of student records.
//!
//! The [`Roster`] knows nothing about the console or about how records were
//! read. It keeps records in insertion order and guarantees that roll numbers
//! are unique.

use thiserror::Error;
use tracing::instrument;

use super::{RollNo, Student};

/// Errors raised by [`Roster`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    /// A record with this roll number is already stored.
    #[error("A student with Roll No {0} already exists.")]
    DuplicateKey(RollNo),
    /// No record with this roll number is stored.
    #[error("Student with Roll No {0} not found.")]
    NotFound(RollNo),
}

/// The collection of student records held for the current session.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            students: Vec::new(),
        }
    }

    /// Creates an empty roster with room for `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            students: Vec::with_capacity(capacity),
        }
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::DuplicateKey`] if a record with the same roll
    /// number exists. The roster is left unchanged in that case.
    #[instrument(level = "debug", skip(self, student), fields(roll_no = %student.roll_no))]
    pub fn add(&mut self, student: Student) -> Result<(), RosterError> {
        if self.contains(student.roll_no) {
            tracing::debug!("rejected duplicate roll number");
            return Err(RosterError::DuplicateKey(student.roll_no));
        }
        self.students.push(student);
        tracing::debug!(len = self.students.len(), "record added");
        Ok(())
    }

    /// Finds the first record with the given roll number.
    #[must_use]
    pub fn find_by_roll(&self, roll_no: RollNo) -> Option<&Student> {
        self.iter().find(|s| s.roll_no == roll_no)
    }

    /// Looks up a record by roll number.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] if there is no such record.
    pub fn get(&self, roll_no: RollNo) -> Result<&Student, RosterError> {
        self.find_by_roll(roll_no)
            .ok_or(RosterError::NotFound(roll_no))
    }

    /// Whether a record with the given roll number exists.
    #[must_use]
    pub fn contains(&self, roll_no: RollNo) -> bool {
        self.find_by_roll(roll_no).is_some()
    }

    /// Number of stored records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students.iter()
    }
}
