// 📅 Birth Date - calendar date with its digit decomposition
// Only two things are consumed downstream: the digits of YYYY-MM-DD and the day

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn new(date: NaiveDate) -> Self {
        BirthDate(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(BirthDate)
    }

    /// Parse `YYYY-MM-DD` (surrounding whitespace ignored)
    pub fn parse(s: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map(BirthDate)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Zero-padded `YYYY-MM-DD` text, the form life path digits are read from
    pub fn to_iso_string(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// Every decimal digit of the ISO rendering, separators dropped
    pub fn digits(&self) -> Vec<u32> {
        self.to_iso_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

impl FromStr for BirthDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BirthDate::parse(s)
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        BirthDate(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = BirthDate::parse("1980-01-01").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1980, 1, 1).unwrap());
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(BirthDate::parse("").is_err());
        assert!(BirthDate::parse("1980/01/01").is_err());
        assert!(BirthDate::parse("1980-02-30").is_err());
    }

    #[test]
    fn test_digits_are_zero_padded() {
        let date = BirthDate::from_ymd(1980, 1, 1).unwrap();
        assert_eq!(date.to_iso_string(), "1980-01-01");
        assert_eq!(date.digits(), vec![1, 9, 8, 0, 0, 1, 0, 1]);
    }

    #[test]
    fn test_serde_uses_iso_text() {
        let date = BirthDate::from_ymd(2001, 12, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2001-12-31\"");

        let back: BirthDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
