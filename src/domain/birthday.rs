//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for birthdays.
///
/// Birthdays are entered as eight digits in `ddmmyyyy` order. The string
/// must also denote a real calendar date (so `31022000` is rejected, and
/// `29021990` is rejected because 1990 is not a leap year). Validating at
/// construction time keeps the day-counting math total.
///
/// # Example
///
/// ```
/// use abook::domain::Birthday;
///
/// let birthday = Birthday::new("15031990").unwrap();
/// assert_eq!(birthday.day(), 15);
/// assert_eq!(birthday.month(), 3);
/// assert_eq!(birthday.year(), 1990);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must be exactly 8 characters long
    /// - Every character must be an ASCII digit
    /// - The digits must form a valid `ddmmyyyy` calendar date
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if any rule fails.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let birthday = birthday.into();

        if Self::parse_date(&birthday).is_none() {
            return Err(ValidationError::InvalidBirthday(birthday));
        }

        Ok(Self(birthday))
    }

    /// Parse `ddmmyyyy` into a calendar date, or None if malformed.
    fn parse_date(s: &str) -> Option<NaiveDate> {
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let day: u32 = s[0..2].parse().ok()?;
        let month: u32 = s[2..4].parse().ok()?;
        let year: i32 = s[4..8].parse().ok()?;

        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// Get the raw `ddmmyyyy` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.date().day()
    }

    /// Month of year (1-12).
    pub fn month(&self) -> u32 {
        self.date().month()
    }

    /// Four-digit birth year.
    pub fn year(&self) -> i32 {
        self.date().year()
    }

    /// The full birth date.
    pub fn date(&self) -> NaiveDate {
        // Invariant: the string was validated at construction.
        Self::parse_date(&self.0).unwrap_or_default()
    }

    /// The next calendar occurrence of this birthday on or after `today`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.occurrence_in(today.year());
        if this_year >= today {
            this_year
        } else {
            self.occurrence_in(today.year() + 1)
        }
    }

    /// Number of days from `today` to the next occurrence (0 on the day itself).
    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }

    /// The observed birthday in a given year.
    fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.month(), self.day())
            // Feb 29 in a non-leap year
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
            .unwrap_or_default()
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
