//! The error returned when a date cannot be resolved.

use thiserror::Error;

/// A date that failed validation.
///
/// This is the only error surfaced by the crate. The wrapped [`Constraint`]
/// tells which check failed.
///
/// # Example
///
/// ```
/// use amlich::LunarYmd;
///
/// let err = LunarYmd::new(2023, 3, 30).resolve().unwrap_err();
/// assert_eq!("Invalid date: day 30 exceeds month length 29", err.to_string());
/// ```
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
#[error("Invalid date: {0}")]
pub struct InvalidDate(pub Constraint);

impl InvalidDate {
    /// Returns the failed constraint.
    pub fn constraint(&self) -> Constraint {
        self.0
    }
}

impl From<Constraint> for InvalidDate {
    fn from(c: Constraint) -> Self {
        Self(c)
    }
}

/// The check a date failed.
#[derive(Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Constraint {
    #[error("year {0} outside supported range 1200..=2199")]
    YearOutOfRange(i32),
    #[error("month {0} not in 1..=12")]
    MonthOutOfRange(u32),
    #[error("day {0} out of range")]
    DayOutOfRange(u32),
    #[error("day {day} exceeds month length {length}")]
    DayExceedsMonth { day: u32, length: u32 },
    #[error("{0:04}-{1:02}-{2:02} does not exist in the civil calendar")]
    NonexistentCivilDate(i32, u32, u32),
    #[error("date precedes the first supported day")]
    BeforeFirstDay,
    #[error("date follows the last supported day")]
    AfterLastDay,
}
