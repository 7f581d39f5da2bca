//! Calendar dates written as `MM/DD/YYYY`.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use thiserror::Error;

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
};

const SEPARATOR: char = '/';
const FEBRUARY: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("expected MM/DD/YYYY, got '{0}'")]
    Format(String),
    #[error("date component '{0}' is not a number")]
    Component(String),
}

/// A month/day/year triple.
///
/// Parsing only checks the shape of the text, so a `Date` may hold an
/// impossible day such as `2/30/2021`; use [`Date::is_valid`] before trusting
/// it. Ordering is chronological (year, then month, then day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: i32,
    day: i32,
}

impl Date {
    pub const fn new(year: i32, month: i32, day: i32) -> Self {
        Self { year, month, day }
    }

    /// Read `MM/DD/YYYY` leniently.
    ///
    /// Components are read month first. Reading stops at the first one that
    /// is not a number, leaving it and the remaining components at 0; text
    /// without exactly three components gives `0/0/0`. Such dates are never
    /// valid.
    pub fn parse(s: &str) -> Self {
        let mut fields = [0; 3];
        let parts = components(s);
        if parts.len() == fields.len() {
            for (field, part) in fields.iter_mut().zip(&parts) {
                match part.parse() {
                    Ok(value) => *field = value,
                    Err(_) => break,
                }
            }
        }
        let [month, day, year] = fields;
        Self::new(year, month, day)
    }

    /// Today's date on the local calendar.
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self::new(now.year(), now.month() as i32, now.day() as i32)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> i32 {
        self.month
    }

    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Whether this is a real Gregorian date with a non-negative year.
    pub fn is_valid(&self) -> bool {
        if self.year < 0 || !(1..=12).contains(&self.month) || self.day < 1 {
            return false;
        }
        self.day <= days_in_month(self.year, self.month)
    }

    /// Full years elapsed between this date and `today`.
    pub fn age_on(&self, today: &Date) -> i32 {
        let age = today.year - self.year;
        if (today.month, today.day) < (self.month, self.day) {
            age - 1
        } else {
            age
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % GREGORIAN_CYCLE == 0 || (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0)
}

fn days_in_month(year: i32, month: i32) -> i32 {
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = components(s);
        let [month, day, year] = parts.as_slice() else {
            return Err(DateError::Format(s.to_string()));
        };
        let number = |part: &str| {
            part.parse::<i32>()
                .map_err(|_| DateError::Component(part.to_string()))
        };
        Ok(Self::new(number(*year)?, number(*month)?, number(*day)?))
    }
}

/// Split on the separator, ignoring trailing empty components.
fn components(s: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = s.split(SEPARATOR).collect();
    while parts.len() > 1 && parts.last() == Some(&"") {
        parts.pop();
    }
    parts
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}{SEPARATOR}{}", self.month, self.day, self.year)
    }
}
