use chrono::{Datelike, Months, NaiveDate, Weekday};
use rand::Rng;

use crate::level::LevelThresholds;
use crate::models::{ContributionSeries, DailyRecord};
use crate::synthesis::config::SynthesisConfig;

/// Months with reduced workday activity when the seasonal adjustment is on.
const VACATION_MONTHS: [u32; 2] = [7, 8];

/// The calendar window a series covers: the same date one year back through
/// `today`, inclusive of both endpoints. Month arithmetic clamps Feb 29 to
/// Feb 28 when the previous year is not a leap year.
pub fn trailing_year(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.checked_sub_months(Months::new(12)).unwrap_or(today);
    (start, today)
}

/// Generate a plausible contribution series for `[start, end]`.
///
/// Weekends draw from a low bound, July/August workdays from the vacation
/// bound when configured, everything else from the workday bound. A second
/// independent draw intermittently forces zero-activity days. The result
/// approximates a human contribution pattern, not a statistical guarantee.
///
/// An inverted range yields an empty series rather than an error.
pub fn synthesize<R: Rng>(
    start: NaiveDate,
    end: NaiveDate,
    config: &SynthesisConfig,
    thresholds: &LevelThresholds,
    rng: &mut R,
) -> ContributionSeries {
    let mut records = Vec::new();
    if end < start {
        return ContributionSeries::new(records);
    }

    let mut date = start;
    while date <= end {
        let base = base_draw(date, config, rng);
        let count = if rng.gen::<f64>() < config.skip_probability {
            0
        } else {
            base.floor() as u32
        };
        records.push(DailyRecord::new(date, count, thresholds));

        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    ContributionSeries::new(records)
}

fn base_draw<R: Rng>(date: NaiveDate, config: &SynthesisConfig, rng: &mut R) -> f64 {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return rng.gen_range(0.0..config.weekend_max);
    }

    if let Some(vacation_max) = config.vacation_max {
        if VACATION_MONTHS.contains(&date.month()) {
            return rng.gen_range(0.0..vacation_max);
        }
    }

    rng.gen_range(0.0..config.weekday_max)
}
