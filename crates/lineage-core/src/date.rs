//! Calendar dates as written in family tree sources.
//!
//! Dates use the day-month-year layout `D{1,2}/D{1,2}/D{4}`. No calendar
//! validation takes place: `31/02/2000` is a perfectly good [`Date`] here, and
//! only consumers that need real calendar arithmetic have to care.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Error returned when text does not have the `DD/MM/YYYY` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date `{text}`: expected DD/MM/YYYY")]
pub struct DateError {
    text: String,
}

impl DateError {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// The rejected input.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// A day-month-year triple, ordered chronologically.
///
/// Field order matters: the derived [`Ord`] compares year, then month, then
/// day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

impl Date {
    /// Creates a date without any calendar check.
    pub fn new(day: u8, month: u8, year: u16) -> Self {
        Self { year, month, day }
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    /// The century the date falls in, counted as `year / 100`.
    pub fn century(&self) -> u16 {
        self.year / 100
    }
}

/// Parses a run of ASCII digits whose length lies in `min..=max`.
fn digits<T: FromStr>(part: &str, min: usize, max: usize) -> Option<T> {
    if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(DateError::new(s));
        };

        let day = digits(day, 1, 2).ok_or_else(|| DateError::new(s))?;
        let month = digits(month, 1, 2).ok_or_else(|| DateError::new(s))?;
        let year = digits(year, 4, 4).ok_or_else(|| DateError::new(s))?;

        Ok(Self::new(day, month, year))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_padded_and_unpadded() {
        assert_eq!("01/06/1930".parse::<Date>().unwrap(), Date::new(1, 6, 1930));
        assert_eq!("1/6/1930".parse::<Date>().unwrap(), Date::new(1, 6, 1930));
    }

    #[test]
    fn test_no_calendar_validation() {
        let date: Date = "31/02/2000".parse().unwrap();
        assert_eq!(date.day(), 31);
        assert_eq!(date.month(), 2);

        let date: Date = "99/99/2000".parse().unwrap();
        assert_eq!(date.to_string(), "99/99/2000");
    }

    #[test]
    fn test_rejects_other_shapes() {
        for text in ["", "1/1/19", "1/1/19000", "123/1/1900", "a/1/1900", "1-1-1900", "1/1/1900/1"] {
            let err = text.parse::<Date>().unwrap_err();
            assert_eq!(err.text(), text);
        }
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(Date::new(3, 7, 1905).to_string(), "03/07/1905");
    }

    #[test]
    fn test_chronological_order() {
        let a: Date = "31/12/1899".parse().unwrap();
        let b: Date = "01/01/1900".parse().unwrap();
        let c: Date = "02/01/1900".parse().unwrap();
        let d: Date = "01/02/1900".parse().unwrap();

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
        assert_eq!(b.century(), 19);
    }
}
