use std::fmt;

use super::Marks;

/// A letter grade derived deterministically from marks.
///
/// Each band is inclusive at its lower bound:
///
/// | Marks      | Grade |
/// |------------|-------|
/// | 90 – 100   | A     |
/// | 75 – <90   | B     |
/// | 60 – <75   | C     |
/// | 40 – <60   | D     |
/// | below 40   | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    /// 90 and above.
    A,
    /// 75 and above.
    B,
    /// 60 and above.
    C,
    /// 40 and above.
    D,
    /// Below 40.
    F,
}

impl Grade {
    /// Derives the grade for the given marks.
    ///
    /// ```
    /// use records::{Grade, Marks};
    ///
    /// let marks = Marks::new(90.0).unwrap();
    /// assert_eq!(Grade::from_marks(marks), Grade::A);
    /// ```
    #[must_use]
    pub fn from_marks(marks: Marks) -> Self {
        let value = marks.get();
        if value >= 90.0 {
            Self::A
        } else if value >= 75.0 {
            Self::B
        } else if value >= 60.0 {
            Self::C
        } else if value >= 40.0 {
            Self::D
        } else {
            Self::F
        }
    }

    /// Returns the single-letter name of the grade.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label shown for a possibly-missing marks value: the grade letter, or
/// `"N/A"` when no marks are recorded.
#[must_use]
pub fn grade_label(marks: Option<Marks>) -> &'static str {
    marks.map_or("N/A", |marks| Grade::from_marks(marks).as_str())
}
