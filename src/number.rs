// 🔢 Numerology Number - a reduced value (1-9 or a master number)

use crate::reduce::{is_master, reduce};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumerologyNumber(u32);

impl NumerologyNumber {
    /// Accepts 1-9, 11, 22 and 33. Zero (an empty name) and unreduced
    /// values are rejected.
    pub fn new(value: u32) -> Option<Self> {
        if (1..=9).contains(&value) || is_master(value as u64) {
            Some(NumerologyNumber(value))
        } else {
            None
        }
    }

    /// Reduce any positive total into a number. `None` only for 0.
    pub fn from_total(total: u64) -> Option<Self> {
        Self::new(reduce(total))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn is_master(&self) -> bool {
        self.0 > 9
    }
}

impl fmt::Display for NumerologyNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for NumerologyNumber {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NumerologyNumber::new(value)
            .ok_or_else(|| format!("{} is not a numerology number (1-9, 11, 22, 33)", value))
    }
}

impl From<NumerologyNumber> for u32 {
    fn from(n: NumerologyNumber) -> u32 {
        n.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_digits_and_masters() {
        for v in [1, 5, 9, 11, 22, 33] {
            assert_eq!(NumerologyNumber::new(v).map(|n| n.value()), Some(v));
        }
    }

    #[test]
    fn test_rejects_zero_and_unreduced() {
        for v in [0, 10, 12, 21, 34, 44] {
            assert!(NumerologyNumber::new(v).is_none(), "{} should be rejected", v);
        }
    }

    #[test]
    fn test_from_total() {
        assert_eq!(NumerologyNumber::from_total(36).map(|n| n.value()), Some(9));
        assert_eq!(NumerologyNumber::from_total(29).map(|n| n.value()), Some(11));
        assert!(NumerologyNumber::from_total(0).is_none());
    }

    #[test]
    fn test_is_master() {
        assert!(NumerologyNumber::new(22).unwrap().is_master());
        assert!(!NumerologyNumber::new(7).unwrap().is_master());
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let ok: NumerologyNumber = serde_json::from_str("11").unwrap();
        assert_eq!(ok.value(), 11);
        assert_eq!(serde_json::to_string(&ok).unwrap(), "11");

        let bad: Result<NumerologyNumber, _> = serde_json::from_str("12");
        assert!(bad.is_err());
    }
}
