use crate::error::{BasketError, Result};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

const SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar month index, 0 = January through 11 = December.
///
/// Every constructor normalizes into range, so a `Month` is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct Month(u8);

impl Month {
    pub const COUNT: i32 = 12;

    /// Wraps any integer onto the calendar, so `-1` is December and `12` is January.
    pub fn wrapping(value: i32) -> Self {
        Month(value.rem_euclid(Self::COUNT) as u8)
    }

    /// Builds a month from a 1-based calendar number (1 = January).
    pub fn from_number(number: u32) -> Option<Self> {
        if (1..=12).contains(&number) {
            Some(Month((number - 1) as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn short_name(self) -> &'static str {
        SHORT_NAMES[self.0 as usize]
    }

    /// Shifts by a signed number of months, wrapping across the year boundary.
    pub fn shifted(self, months: i32) -> Self {
        Self::wrapping(self.0 as i32 + months)
    }

    /// Forward distance in months from `self` to `target`, in `0..12`.
    pub fn distance_to(self, target: Month) -> u8 {
        Self::wrapping(target.0 as i32 - self.0 as i32).0
    }

    pub fn all() -> impl Iterator<Item = Month> {
        (0..Self::COUNT).map(Month::wrapping)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i32::deserialize(deserializer)?;
        if !(0..Self::COUNT).contains(&raw) {
            return Err(serde::de::Error::custom(format!(
                "month index {} out of range 0..=11",
                raw
            )));
        }
        Ok(Month(raw as u8))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

impl FromStr for Month {
    type Err = BasketError;

    /// Accepts a 1-based number (`11`) or an English month name (`nov`, `November`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Ok(number) = trimmed.parse::<u32>() {
            return Month::from_number(number)
                .ok_or_else(|| BasketError::Parse(format!("Invalid month number: {}", s)));
        }

        let lower = trimmed.to_ascii_lowercase();
        Month::all()
            .find(|m| {
                let full = chrono::Month::try_from(m.index() + 1)
                    .map(|c| c.name().to_ascii_lowercase())
                    .unwrap_or_default();
                lower == m.short_name().to_ascii_lowercase() || lower == full
            })
            .ok_or_else(|| BasketError::Parse(format!("Invalid month: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_normalizes_any_integer() {
        assert_eq!(Month::wrapping(-1).index(), 11);
        assert_eq!(Month::wrapping(12).index(), 0);
        assert_eq!(Month::wrapping(-25).index(), 11);
        assert_eq!(Month::wrapping(100).index(), 4);
    }

    #[test]
    fn test_distance_is_forward_and_circular() {
        let oct = Month::wrapping(9);
        assert_eq!(oct.distance_to(Month::wrapping(10)), 1);
        assert_eq!(oct.distance_to(Month::wrapping(2)), 5);
        assert_eq!(oct.distance_to(oct), 0);
        assert_eq!(Month::wrapping(10).distance_to(oct), 11);
    }

    #[test]
    fn test_parse_month_names_and_numbers() {
        assert_eq!("11".parse::<Month>().unwrap().index(), 10);
        assert_eq!("nov".parse::<Month>().unwrap().index(), 10);
        assert_eq!("November".parse::<Month>().unwrap().index(), 10);
        assert!("0".parse::<Month>().is_err());
        assert!("13".parse::<Month>().is_err());
        assert!("no".parse::<Month>().is_err());
        assert_eq!("DEC".parse::<Month>().unwrap().index(), 11);
        for word in ["junk", "marmalade", "decimal", "Augustus", "maybe", "sept"] {
            assert!(word.parse::<Month>().is_err(), "{} parsed as a month", word);
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Month>("12").is_err());
        assert_eq!(serde_json::from_str::<Month>("3").unwrap().short_name(), "Apr");
    }
}
