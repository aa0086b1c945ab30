use chrono::NaiveDate;

/// An inclusive calendar date range, start date through end date.
///
/// An inverted range (start after end) contains no dates.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DateRange(pub NaiveDate, pub NaiveDate);

impl DateRange {
    /// Range wide enough to hold any date.
    pub const UNBOUNDED: DateRange = DateRange(NaiveDate::MIN, NaiveDate::MAX);

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.1
    }

    pub fn is_inverted(&self) -> bool {
        self.0 > self.1
    }
}
