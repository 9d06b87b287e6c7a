//! `Period` — the recurrence unit of a billing cycle.

use bl_core::errors::{Error, Result};
use bl_core::Real;

/// A billing recurrence unit.
///
/// Each unit carries an approximate length in days, used only to order
/// cycles of different units against each other (see
/// [`BillingCycle::periodicity`](crate::BillingCycle::periodicity)).
/// Calendar-correct date shifting never goes through these lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// Calendar days.
    Day,
    /// Calendar weeks (7 days).
    Week,
    /// Half months, billed twice per month.
    Semimonth,
    /// Calendar months.
    Month,
    /// Calendar years (12 months).
    Year,
}

impl Period {
    /// Approximate length of one unit in days.
    ///
    /// Day and week are exact; the rest average over a 365-day year.
    /// Semimonth is 365/24 truncated to whole days.
    pub fn day_length(self) -> Real {
        match self {
            Period::Day => 1.0,
            Period::Week => 7.0,
            Period::Semimonth => 15.0,
            Period::Month => 365.0 / 12.0,
            Period::Year => 365.0,
        }
    }
}

impl std::str::FromStr for Period {
    type Err = Error;

    /// Parse a recurrence-unit name.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPeriod`] for anything other than the five
    /// recognized unit names.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "day" => Ok(Period::Day),
            "week" => Ok(Period::Week),
            "semimonth" => Ok(Period::Semimonth),
            "month" => Ok(Period::Month),
            "year" => Ok(Period::Year),
            other => Err(Error::InvalidPeriod(other.to_string())),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Day => write!(f, "day"),
            Period::Week => write!(f, "week"),
            Period::Semimonth => write!(f, "semimonth"),
            Period::Month => write!(f, "month"),
            Period::Year => write!(f, "year"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!("semimonth".parse::<Period>().unwrap(), Period::Semimonth);
        assert_eq!("year".parse::<Period>().unwrap(), Period::Year);
    }

    #[test]
    fn parse_unrecognized() {
        assert_eq!(
            "fortnight".parse::<Period>(),
            Err(Error::InvalidPeriod("fortnight".into()))
        );
        assert!("Month".parse::<Period>().is_err());
        assert!("".parse::<Period>().is_err());
    }

    #[test]
    fn display_roundtrip() {
        for p in [
            Period::Day,
            Period::Week,
            Period::Semimonth,
            Period::Month,
            Period::Year,
        ] {
            assert_eq!(p.to_string().parse::<Period>().unwrap(), p);
        }
    }

    #[test]
    fn day_lengths_strictly_increase() {
        let lengths = [
            Period::Day,
            Period::Week,
            Period::Semimonth,
            Period::Month,
            Period::Year,
        ]
        .map(Period::day_length);
        assert!(lengths.windows(2).all(|w| w[0] < w[1]), "{lengths:?}");
    }
}
