//! Contribution-calendar data models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::level::{classify, LevelThresholds};

/// One calendar day of contribution activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub count: u32,
    pub level: u8,
}

impl DailyRecord {
    /// Build a record with its level derived from `count`, so the two fields
    /// can never disagree.
    pub fn new(date: NaiveDate, count: u32, thresholds: &LevelThresholds) -> Self {
        Self {
            date,
            count,
            level: classify(count, thresholds),
        }
    }
}

/// A trailing-year sequence of daily records, ascending by date.
///
/// Built once per run and only read afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ContributionSeries {
    records: Vec<DailyRecord>,
}

impl ContributionSeries {
    pub fn new(records: Vec<DailyRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DailyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DailyRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ContributionSeries {
    type Item = &'a DailyRecord;
    type IntoIter = std::slice::Iter<'a, DailyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// A resolved series tagged with where it came from.
///
/// Resolved once per run: real calendar data when the API call succeeds,
/// synthetic data otherwise.
#[derive(Debug, Clone)]
pub enum ContributionData {
    Real(ContributionSeries),
    Synthetic(ContributionSeries),
}

impl ContributionData {
    pub fn series(&self) -> &ContributionSeries {
        match self {
            ContributionData::Real(series) => series,
            ContributionData::Synthetic(series) => series,
        }
    }

    pub fn into_series(self) -> ContributionSeries {
        match self {
            ContributionData::Real(series) => series,
            ContributionData::Synthetic(series) => series,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self, ContributionData::Synthetic(_))
    }

    pub fn origin(&self) -> &'static str {
        match self {
            ContributionData::Real(_) => "real",
            ContributionData::Synthetic(_) => "synthetic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_level_follows_count() {
        let thresholds = LevelThresholds::default();
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        assert_eq!(DailyRecord::new(date, 0, &thresholds).level, 0);
        assert_eq!(DailyRecord::new(date, 2, &thresholds).level, 1);
        assert_eq!(DailyRecord::new(date, 9, &thresholds).level, 4);
    }

    #[test]
    fn record_serializes_camel_case_with_iso_date() {
        let thresholds = LevelThresholds::default();
        let record = DailyRecord::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), 3, &thresholds);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"date":"2026-01-05","count":3,"level":2}"#);
    }

    #[test]
    fn series_serializes_as_plain_array() {
        let thresholds = LevelThresholds::default();
        let series = ContributionSeries::new(vec![DailyRecord::new(
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
            0,
            &thresholds,
        )]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.starts_with('['), "expected a JSON array, got {json}");
    }
}
