//! `BillingCycle` — a recurring billing period anchored on an anniversary
//! date.

use std::cmp::Ordering;

use bl_core::errors::{Error, Result};
use bl_core::{ensure, Days, Real};
use chrono::{Days as CalendarDays, Months, NaiveDate};

use crate::period::Period;

/// Direction of a cycle-length date shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Shift toward later dates.
    Forward,
    /// Shift toward earlier dates.
    Backward,
}

/// A recurring billing cycle: a [`Period`], a positive frequency multiplier,
/// and an optional anniversary date.
///
/// The anniversary is the reference date from which cycle boundaries are
/// computed; it is required only by the date-shifting operations
/// ([`next_payment_date`](Self::next_payment_date) and friends).
/// `BillingCycle` is an immutable value object — every operation is a pure
/// function of its fields and arguments.
///
/// Cycles are ordered by [`periodicity`](Self::periodicity), ascending, so a
/// shorter cycle compares less than a longer one regardless of which units
/// the two are expressed in. Equality follows the same rule: a 7-day cycle
/// and a 1-week cycle compare equal.
#[derive(Debug, Clone, Copy)]
pub struct BillingCycle {
    period: Period,
    frequency: u32,
    anniversary: Option<NaiveDate>,
}

impl BillingCycle {
    /// Create a new billing cycle.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFrequency`] if `frequency` is zero.
    pub fn new(period: Period, frequency: u32, anniversary: Option<NaiveDate>) -> Result<Self> {
        ensure!(frequency > 0, Error::InvalidFrequency(frequency));
        Ok(Self {
            period,
            frequency,
            anniversary,
        })
    }

    /// Begin building a cycle with the given period, frequency 1, and no
    /// anniversary.
    pub fn builder(period: Period) -> BillingCycleBuilder {
        BillingCycleBuilder::new(period)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The recurrence unit.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Number of units per cycle.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// The anniversary date, if one was set.
    pub fn anniversary(&self) -> Option<NaiveDate> {
        self.anniversary
    }

    /// Approximate cycle length in days: `frequency × day length of period`.
    ///
    /// Used purely for ordering cycles of different units against each
    /// other; never for date arithmetic.
    pub fn periodicity(&self) -> Real {
        self.period.day_length() * Real::from(self.frequency)
    }

    // ── Date shifting ─────────────────────────────────────────────────────────

    /// Date on which the next payment is due: the anniversary advanced
    /// forward by exactly one cycle.
    ///
    /// This is a pure shift — it never consults the current date. The
    /// caller decides whether the returned date actually lies in the
    /// future.
    ///
    /// # Errors
    /// [`Error::MissingAnniversary`] if no anniversary is set, plus the
    /// errors of [`shift_date_by_period`](Self::shift_date_by_period).
    pub fn next_payment_date(&self) -> Result<NaiveDate> {
        self.nth_payment_date(1)
    }

    /// The anniversary advanced forward by `n` whole cycles.
    ///
    /// Every date is anchored at the stored anniversary, so for month and
    /// year periods end-of-month clamping never compounds:
    /// `nth_payment_date(n)` equals the anniversary plus `n × frequency`
    /// calendar months, not `next_payment_date` applied `n` times to a
    /// date already clamped.
    pub fn nth_payment_date(&self, n: u32) -> Result<NaiveDate> {
        let anniversary = self.anniversary.ok_or(Error::MissingAnniversary)?;
        self.shift(anniversary, ShiftDirection::Forward, n)
    }

    /// The cycle boundary nearest to `date`: the anniversary shifted
    /// backward by one cycle if `date` precedes it, forward otherwise.
    pub fn closest_anniversary_date_including(&self, date: NaiveDate) -> Result<NaiveDate> {
        let anniversary = self.anniversary.ok_or(Error::MissingAnniversary)?;
        if date < anniversary {
            self.shift(anniversary, ShiftDirection::Backward, 1)
        } else {
            self.shift(anniversary, ShiftDirection::Forward, 1)
        }
    }

    /// Length in days of the cycle containing `date`, measured between the
    /// stored anniversary and `date`'s closest cycle boundary.
    ///
    /// The input for proration of a partial period; always non-negative.
    pub fn days_in_billing_cycle_including(&self, date: NaiveDate) -> Result<Days> {
        let anniversary = self.anniversary.ok_or(Error::MissingAnniversary)?;
        let closest = self.closest_anniversary_date_including(date)?;
        Ok(closest.signed_duration_since(anniversary).num_days().abs())
    }

    /// Shift an arbitrary date by one cycle in the given direction.
    ///
    /// Year and month periods shift by calendar months (`frequency × 12`
    /// and `frequency` respectively), with the day-of-month clamped to the
    /// target month's length when it would not otherwise exist there.
    /// Week and day periods shift by exact day counts (`frequency × 7` and
    /// `frequency`).
    ///
    /// # Errors
    /// [`Error::UnsupportedShift`] for semimonth periods, which have no
    /// defined shift behavior, and [`Error::DateOutOfRange`] when the
    /// result falls outside the representable calendar range.
    pub fn shift_date_by_period(
        &self,
        date: NaiveDate,
        direction: ShiftDirection,
    ) -> Result<NaiveDate> {
        self.shift(date, direction, 1)
    }

    /// Shift `date` by `times` whole cycles.
    fn shift(&self, date: NaiveDate, direction: ShiftDirection, times: u32) -> Result<NaiveDate> {
        let steps = u64::from(times) * u64::from(self.frequency);
        match self.period {
            Period::Year => self.shift_months(date, direction, steps * 12),
            Period::Month => self.shift_months(date, direction, steps),
            Period::Week => self.shift_days(date, direction, steps * 7),
            Period::Day => self.shift_days(date, direction, steps),
            Period::Semimonth => Err(Error::UnsupportedShift(self.period.to_string())),
        }
    }

    fn shift_months(&self, date: NaiveDate, direction: ShiftDirection, months: u64) -> Result<NaiveDate> {
        let months = u32::try_from(months)
            .ok()
            .map(Months::new)
            .ok_or_else(|| Error::DateOutOfRange(format!("{months} months from {date}")))?;
        match direction {
            ShiftDirection::Forward => date.checked_add_months(months),
            ShiftDirection::Backward => date.checked_sub_months(months),
        }
        .ok_or_else(|| Error::DateOutOfRange(format!("{months:?} from {date}")))
    }

    fn shift_days(&self, date: NaiveDate, direction: ShiftDirection, days: u64) -> Result<NaiveDate> {
        let days = CalendarDays::new(days);
        match direction {
            ShiftDirection::Forward => date.checked_add_days(days),
            ShiftDirection::Backward => date.checked_sub_days(days),
        }
        .ok_or_else(|| Error::DateOutOfRange(format!("{days:?} from {date}")))
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

// Equality and ordering are both defined through periodicity so that they
// agree with each other; `Hash` is deliberately left unimplemented (it could
// not be made consistent with cross-unit equality such as 7×day == 1×week).

impl PartialEq for BillingCycle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BillingCycle {}

impl PartialOrd for BillingCycle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BillingCycle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.periodicity().total_cmp(&other.periodicity())
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "every {} {}(s)", self.frequency, self.period)?;
        if let Some(anniversary) = self.anniversary {
            write!(f, " from {anniversary}")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`BillingCycle`], for configuration-style construction.
///
/// `frequency` defaults to 1 and `anniversary` to unset.
#[derive(Debug, Clone, Copy)]
pub struct BillingCycleBuilder {
    period: Period,
    frequency: u32,
    anniversary: Option<NaiveDate>,
}

impl BillingCycleBuilder {
    /// Begin building a cycle with the given period.
    pub fn new(period: Period) -> Self {
        Self {
            period,
            frequency: 1,
            anniversary: None,
        }
    }

    /// Set the frequency multiplier.
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the anniversary date.
    pub fn with_anniversary(mut self, anniversary: NaiveDate) -> Self {
        self.anniversary = Some(anniversary);
        self
    }

    /// Build the cycle.
    ///
    /// # Errors
    /// Returns [`Error::InvalidFrequency`] if the frequency was set to zero.
    pub fn build(self) -> Result<BillingCycle> {
        BillingCycle::new(self.period, self.frequency, self.anniversary)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builder_defaults() {
        let cycle = BillingCycle::builder(Period::Month).build().unwrap();
        assert_eq!(cycle.period(), Period::Month);
        assert_eq!(cycle.frequency(), 1);
        assert_eq!(cycle.anniversary(), None);
    }

    #[test]
    fn zero_frequency_rejected() {
        assert_eq!(
            BillingCycle::new(Period::Day, 0, None),
            Err(Error::InvalidFrequency(0))
        );
        assert!(BillingCycle::builder(Period::Day)
            .with_frequency(0)
            .build()
            .is_err());
    }

    #[test]
    fn missing_anniversary() {
        let cycle = BillingCycle::builder(Period::Month).build().unwrap();
        assert_eq!(cycle.next_payment_date(), Err(Error::MissingAnniversary));
        assert_eq!(
            cycle.closest_anniversary_date_including(date(2013, 5, 27)),
            Err(Error::MissingAnniversary)
        );
        assert_eq!(
            cycle.days_in_billing_cycle_including(date(2013, 5, 27)),
            Err(Error::MissingAnniversary)
        );
    }

    #[test]
    fn semimonth_shift_unsupported() {
        let cycle = BillingCycle::builder(Period::Semimonth)
            .with_anniversary(date(2013, 5, 27))
            .build()
            .unwrap();
        assert_eq!(
            cycle.next_payment_date(),
            Err(Error::UnsupportedShift("semimonth".into()))
        );
    }

    #[test]
    fn cross_unit_equality() {
        let seven_days = BillingCycle::builder(Period::Day)
            .with_frequency(7)
            .build()
            .unwrap();
        let one_week = BillingCycle::builder(Period::Week).build().unwrap();
        assert_eq!(seven_days, one_week);
        assert_eq!(seven_days.cmp(&one_week), Ordering::Equal);
    }

    #[test]
    fn display() {
        let cycle = BillingCycle::builder(Period::Month)
            .with_frequency(2)
            .with_anniversary(date(2013, 5, 27))
            .build()
            .unwrap();
        assert_eq!(cycle.to_string(), "every 2 month(s) from 2013-05-27");
    }

    #[test]
    fn month_end_clamping() {
        let cycle = BillingCycle::builder(Period::Month)
            .with_anniversary(date(2023, 1, 31))
            .build()
            .unwrap();
        // Jan 31 + 1 month = Feb 28 (non-leap)
        assert_eq!(cycle.next_payment_date().unwrap(), date(2023, 2, 28));
    }

    #[test]
    fn backward_shift() {
        let cycle = BillingCycle::builder(Period::Month)
            .with_anniversary(date(2013, 5, 27))
            .build()
            .unwrap();
        assert_eq!(
            cycle
                .shift_date_by_period(date(2013, 5, 27), ShiftDirection::Backward)
                .unwrap(),
            date(2013, 4, 27)
        );
    }
}
