use std::fmt;

use non_empty_string::NonEmptyString;

/// The roll number uniquely identifying a student record.
///
/// Roll numbers are positive by convention, but any integer is accepted; the
/// only rule enforced is uniqueness within a [`Roster`](crate::Roster).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RollNo(i32);

impl RollNo {
    /// Creates a roll number from its integer value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl From<i32> for RollNo {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for RollNo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marks awarded to a student, guaranteed to lie within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Marks(f64);

impl Marks {
    /// The lowest accepted value.
    pub const MIN: f64 = 0.0;
    /// The highest accepted value.
    pub const MAX: f64 = 100.0;

    /// Creates a new `Marks` value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMarksError`] if the value is outside `[0, 100]`. NaN
    /// and the infinities are always rejected.
    pub fn new(value: f64) -> Result<Self, InvalidMarksError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidMarksError(value))
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Marks {
    type Error = InvalidMarksError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Marks {
    /// Whole values keep a single decimal place (`95.0`), anything else is
    /// printed in full (`72.25`).
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Error returned when a marks value lies outside `[0, 100]`.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("Marks must be between 0 and 100 (got {0}).")]
pub struct InvalidMarksError(pub f64);

/// A single student record.
///
/// Records are only ever built from validated input and are never modified
/// once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique key of the record.
    pub roll_no: RollNo,
    /// Full name.
    pub name: NonEmptyString,
    /// Contact email. The format is not checked.
    pub email: NonEmptyString,
    /// Course the student is enrolled in.
    pub course: NonEmptyString,
    /// Marks in `[0, 100]`.
    pub marks: Marks,
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(0.0; "lower bound")]
    #[test_case(100.0; "upper bound")]
    #[test_case(55.5; "fractional")]
    fn marks_in_range_accepted(value: f64) {
        assert_eq!(Marks::new(value).unwrap().get(), value);
    }

    #[test_case(-1.0; "below range")]
    #[test_case(101.0; "above range")]
    #[test_case(-0.001; "just below")]
    #[test_case(100.001; "just above")]
    #[test_case(f64::INFINITY; "infinity")]
    #[test_case(f64::NEG_INFINITY; "negative infinity")]
    fn marks_out_of_range_rejected(value: f64) {
        assert_eq!(Marks::new(value), Err(InvalidMarksError(value)));
    }

    #[test]
    fn marks_nan_rejected() {
        assert!(Marks::new(f64::NAN).is_err());
    }

    #[test_case(95.0, "95.0"; "whole value")]
    #[test_case(0.0, "0.0"; "zero")]
    #[test_case(72.5, "72.5"; "one decimal")]
    #[test_case(88.25, "88.25"; "two decimals")]
    fn marks_display(value: f64, expected: &str) {
        assert_eq!(Marks::new(value).unwrap().to_string(), expected);
    }

    #[test]
    fn roll_no_display_and_value() {
        let roll = RollNo::new(-7);
        assert_eq!(roll.get(), -7);
        assert_eq!(roll.to_string(), "-7");
        assert_eq!(RollNo::from(42), RollNo::new(42));
    }
}
