//! JSON summary written alongside the SVG cards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::layout::Grid;
use crate::models::ContributionSeries;

/// Number of days at each intensity level.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LevelBreakdown {
    pub level0: usize,
    pub level1: usize,
    pub level2: usize,
    pub level3: usize,
    pub level4: usize,
}

impl LevelBreakdown {
    pub fn from_series(series: &ContributionSeries) -> Self {
        let mut counts = [0usize; 5];
        for record in series {
            counts[usize::from(record.level).min(4)] += 1;
        }
        Self {
            level0: counts[0],
            level1: counts[1],
            level2: counts[2],
            level3: counts[3],
            level4: counts[4],
        }
    }
}

/// Summary document for external consumers of the contribution data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameData {
    pub username: String,
    pub total_contributions: u64,
    pub active_days: usize,
    pub contributions_by_level: LevelBreakdown,
    pub contributions: ContributionSeries,
    pub generated_at: DateTime<Utc>,
}

impl GameData {
    pub fn build(username: &str, series: &ContributionSeries, grid: &Grid<'_>) -> Self {
        Self {
            username: username.to_string(),
            total_contributions: grid.total_contributions(),
            active_days: grid.active_days(),
            contributions_by_level: LevelBreakdown::from_series(series),
            contributions: series.clone(),
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
