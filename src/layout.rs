//! Week-major placement of a series onto the fixed 53x7 brick grid.

use crate::models::{ContributionSeries, DailyRecord};

/// Grid width in weeks, matching the contribution graph.
pub const WEEKS_IN_YEAR: usize = 53;
/// Grid height: one row per day of the week.
pub const DAYS_IN_WEEK: usize = 7;

/// One position in the virtual grid.
#[derive(Debug, Clone, Copy)]
pub struct GridCell<'a> {
    pub week: usize,
    pub day: usize,
    pub record: Option<&'a DailyRecord>,
}

/// A series poured into 53x7 positions, with the summary aggregates
/// accumulated during the fill.
///
/// Fill order is the one the contribution graph uses: week index as the
/// outer loop, day-of-week as the inner loop, consuming records in date
/// order. Filling stops when the series is exhausted, so trailing cells stay
/// empty; records beyond the grid capacity are dropped, never wrapped.
pub struct Grid<'a> {
    cells: Vec<Option<&'a DailyRecord>>,
    total_contributions: u64,
    active_days: usize,
}

impl<'a> Grid<'a> {
    pub fn from_series(series: &'a ContributionSeries) -> Self {
        let mut cells: Vec<Option<&DailyRecord>> = vec![None; WEEKS_IN_YEAR * DAYS_IN_WEEK];
        let mut total_contributions = 0u64;
        let mut active_days = 0usize;

        // zip stops at the shorter side, which is exactly the fill policy.
        for (slot, record) in cells.iter_mut().zip(series.iter()) {
            *slot = Some(record);
            total_contributions += u64::from(record.count);
            if record.count > 0 {
                active_days += 1;
            }
        }

        Self {
            cells,
            total_contributions,
            active_days,
        }
    }

    pub fn cell(&self, week: usize, day: usize) -> Option<&'a DailyRecord> {
        if week >= WEEKS_IN_YEAR || day >= DAYS_IN_WEEK {
            return None;
        }
        self.cells[week * DAYS_IN_WEEK + day]
    }

    /// All 53x7 positions in fill order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'a>> + '_ {
        self.cells.iter().enumerate().map(|(index, record)| GridCell {
            week: index / DAYS_IN_WEEK,
            day: index % DAYS_IN_WEEK,
            record: *record,
        })
    }

    /// Only the occupied positions, in fill order.
    pub fn bricks(&self) -> impl Iterator<Item = (usize, usize, &'a DailyRecord)> + '_ {
        self.cells()
            .filter_map(|cell| cell.record.map(|record| (cell.week, cell.day, record)))
    }

    /// Sum of counts over the placed records.
    pub fn total_contributions(&self) -> u64 {
        self.total_contributions
    }

    /// Number of placed records with at least one contribution.
    pub fn active_days(&self) -> usize {
        self.active_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::level::LevelThresholds;

    fn series_of(counts: &[u32]) -> ContributionSeries {
        let thresholds = LevelThresholds::default();
        let start = NaiveDate::from_ymd_opt(2025, 8, 4).unwrap();
        let records = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                DailyRecord::new(start + chrono::Duration::days(i as i64), count, &thresholds)
            })
            .collect();
        ContributionSeries::new(records)
    }

    #[test]
    fn fills_week_major_in_record_order() {
        let series = series_of(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        let grid = Grid::from_series(&series);

        // First week fills all seven days, then the second week starts.
        assert_eq!(grid.cell(0, 0).unwrap().count, 1);
        assert_eq!(grid.cell(0, 6).unwrap().count, 7);
        assert_eq!(grid.cell(1, 0).unwrap().count, 8);
        assert_eq!(grid.cell(1, 1).unwrap().count, 9);
        assert!(grid.cell(1, 2).is_none());
    }

    #[test]
    fn every_record_lands_in_exactly_one_cell() {
        let series = series_of(&[0; 365]);
        let grid = Grid::from_series(&series);
        let placed: Vec<_> = grid.bricks().collect();
        assert_eq!(placed.len(), series.len());
        for (i, (week, day, record)) in placed.iter().enumerate() {
            assert_eq!(week * DAYS_IN_WEEK + day, i);
            assert_eq!(*record, &series.records()[i]);
        }
    }

    #[test]
    fn excess_records_are_dropped_not_wrapped() {
        let capacity = WEEKS_IN_YEAR * DAYS_IN_WEEK;
        let series = series_of(&vec![1; capacity + 10]);
        let grid = Grid::from_series(&series);
        assert_eq!(grid.bricks().count(), capacity);
        // Aggregates only cover placed records.
        assert_eq!(grid.total_contributions(), capacity as u64);
        assert_eq!(grid.active_days(), capacity);
    }

    #[test]
    fn unfilled_cells_render_empty() {
        let series = series_of(&[1, 2, 3]);
        let grid = Grid::from_series(&series);
        assert_eq!(grid.cells().count(), WEEKS_IN_YEAR * DAYS_IN_WEEK);
        assert_eq!(grid.cells().filter(|c| c.record.is_some()).count(), 3);
    }

    #[test]
    fn aggregates_match_series_totals() {
        let counts = [0, 3, 0, 7, 1, 0, 12];
        let series = series_of(&counts);
        let grid = Grid::from_series(&series);
        assert_eq!(
            grid.total_contributions(),
            counts.iter().map(|&c| u64::from(c)).sum::<u64>()
        );
        assert_eq!(
            grid.active_days(),
            counts.iter().filter(|&&c| c > 0).count()
        );
    }

    #[test]
    fn out_of_range_lookup_is_none() {
        let series = series_of(&[1]);
        let grid = Grid::from_series(&series);
        assert!(grid.cell(WEEKS_IN_YEAR, 0).is_none());
        assert!(grid.cell(0, DAYS_IN_WEEK).is_none());
    }
}
