//! `PaymentSchedule` — an ordered sequence of upcoming payment dates.

use bl_core::errors::Result;
use chrono::NaiveDate;

use crate::billing_cycle::BillingCycle;

/// The upcoming payment dates of a [`BillingCycle`], in ascending order.
///
/// Date *k* (1-based) is the anniversary advanced by *k* whole cycles, each
/// anchored at the original anniversary rather than at the previously
/// generated date, so end-of-month clamping never compounds across periods
/// (an anniversary on Jan 31 yields Feb 28, Mar 31, Apr 30, … rather than
/// drifting to the 28th for good).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSchedule {
    dates: Vec<NaiveDate>,
}

impl PaymentSchedule {
    /// Generate the next `count` payment dates of `cycle`.
    ///
    /// # Errors
    /// Propagates the errors of
    /// [`BillingCycle::nth_payment_date`](BillingCycle::nth_payment_date):
    /// a missing anniversary, an unshiftable (semimonth) period, or date
    /// arithmetic leaving the representable range.
    pub fn generate(cycle: &BillingCycle, count: u32) -> Result<Self> {
        let mut dates = Vec::with_capacity(count as usize);
        for k in 1..=count {
            dates.push(cycle.nth_payment_date(k)?);
        }
        Ok(Self { dates })
    }

    /// Build a schedule from an explicit list of dates.
    pub fn from_dates(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }

    /// All dates in the schedule.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Number of dates.
    pub fn size(&self) -> usize {
        self.dates.len()
    }

    /// Return `true` if the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Return the `i`-th date.
    ///
    /// # Panics
    /// Panics if `i` is out of bounds.
    pub fn date(&self, i: usize) -> NaiveDate {
        self.dates[i]
    }

    /// The first (earliest) payment date.
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// The last payment date in the schedule.
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }
}

impl<'a> IntoIterator for &'a PaymentSchedule {
    type Item = NaiveDate;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NaiveDate>>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter().copied()
    }
}
