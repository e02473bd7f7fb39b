//! Each parser takes a single line as typed by the user, trims surrounding
//! whitespace, and either produces a typed value or an [`InputError`]. The
//! parsers never retry; the caller aborts the current operation on error.

use std::fmt;

use non_empty_string::NonEmptyString;

use crate::domain::{Marks, RollNo, student::InvalidMarksError};

/// The fields of a student record that are read from the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The roll number.
    RollNo,
    /// The student's name.
    Name,
    /// The student's email address.
    Email,
    /// The course name.
    Course,
    /// The marks.
    Marks,
}

impl Field {
    /// The label used for this field in prompts and messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RollNo => "Roll No",
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Course => "Course",
            Self::Marks => "Marks",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a line of input was rejected.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InputError {
    /// The line was empty after trimming.
    #[error("{0} cannot be empty.")]
    Empty(Field),

    /// A numeric field did not parse as a number.
    #[error("Invalid number format for {field}: '{input}'.")]
    InvalidNumber {
        /// The field being read.
        field: Field,
        /// The offending (trimmed) input.
        input: String,
    },

    /// The marks parsed but lie outside `[0, 100]`.
    #[error("Marks must be between 0 and 100.")]
    OutOfRange(f64),
}

impl From<InvalidMarksError> for InputError {
    fn from(err: InvalidMarksError) -> Self {
        Self::OutOfRange(err.0)
    }
}

fn non_empty(field: Field, raw: &str) -> Result<&str, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty(field))
    } else {
        Ok(trimmed)
    }
}

/// Parses a required free-text field (name, email or course).
///
/// # Errors
///
/// Returns [`InputError::Empty`] if the input is blank.
pub fn parse_text(field: Field, raw: &str) -> Result<NonEmptyString, InputError> {
    let trimmed = non_empty(field, raw)?;
    NonEmptyString::new(trimmed.to_string()).map_err(|_| InputError::Empty(field))
}

/// Parses a roll number.
///
/// # Errors
///
/// Returns [`InputError::Empty`] if the input is blank, or
/// [`InputError::InvalidNumber`] if it is not an integer.
pub fn parse_roll_no(raw: &str) -> Result<RollNo, InputError> {
    let trimmed = non_empty(Field::RollNo, raw)?;
    trimmed
        .parse::<i32>()
        .map(RollNo::new)
        .map_err(|_| InputError::InvalidNumber {
            field: Field::RollNo,
            input: trimmed.to_string(),
        })
}

/// Parses a marks value.
///
/// # Errors
///
/// Returns [`InputError::Empty`] if the input is blank,
/// [`InputError::InvalidNumber`] if it is not a real number, or
/// [`InputError::OutOfRange`] if it is outside `[0, 100]`.
pub fn parse_marks(raw: &str) -> Result<Marks, InputError> {
    let trimmed = non_empty(Field::Marks, raw)?;
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field: Field::Marks,
            input: trimmed.to_string(),
        })?;
    Ok(Marks::new(value)?)
}
