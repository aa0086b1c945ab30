use crate::dataset::Dataset;
use crate::date_range::DateRange;
use crate::record::Record;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Station set and inclusive date range selecting a subset of a dataset.
///
/// `start_date <= end_date` is not enforced; an inverted range selects
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub stations: BTreeSet<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FilterSpec {
    pub fn new<I, S>(stations: I, start_date: NaiveDate, end_date: NaiveDate) -> FilterSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterSpec {
            stations: stations.into_iter().map(Into::into).collect(),
            start_date,
            end_date,
        }
    }

    /// Every station of the dataset over its full date span. For an empty
    /// dataset the date range is unbounded.
    pub fn covering(dataset: &Dataset) -> FilterSpec {
        let DateRange(start_date, end_date) = dataset
            .date_bounds()
            .map(|(min, max)| DateRange(min, max))
            .unwrap_or(DateRange::UNBOUNDED);
        FilterSpec::new(dataset.stations(), start_date, end_date)
    }

    pub fn date_range(&self) -> DateRange {
        DateRange(self.start_date, self.end_date)
    }

    /// Station membership and calendar-date containment.
    pub fn matches(&self, record: &Record) -> bool {
        self.stations.contains(&record.station) && self.date_range().contains(record.date())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn covering_selects_everything() {
        let dataset = Dataset::new(
            Schema::standard(),
            vec![
                Record::new("B", date(2024, 3, 1)),
                Record::new("A", date(2024, 1, 1)),
            ],
        );
        let spec = FilterSpec::covering(&dataset);
        assert_eq!(spec.start_date, date(2024, 1, 1));
        assert_eq!(spec.end_date, date(2024, 3, 1));
        assert_eq!(spec.stations.len(), 2);
        assert!(dataset.iter().all(|r| spec.matches(r)));
    }

    #[test]
    fn covering_empty_dataset() {
        let spec = FilterSpec::covering(&Dataset::empty(Schema::standard()));
        assert!(spec.stations.is_empty());
        assert_eq!(spec.date_range(), DateRange::UNBOUNDED);
    }

    #[test]
    fn matches_truncates_time_of_day() {
        let mut record = Record::new("A", date(2024, 1, 31));
        record.observed_at = date(2024, 1, 31).and_hms_opt(23, 59, 0).unwrap();
        let spec = FilterSpec::new(["A"], date(2024, 1, 1), date(2024, 1, 31));
        assert!(spec.matches(&record));
    }

    #[test]
    fn matches_requires_station() {
        let record = Record::new("C", date(2024, 1, 10));
        let spec = FilterSpec::new(["A", "B"], date(2024, 1, 1), date(2024, 1, 31));
        assert!(!spec.matches(&record));
    }
}
