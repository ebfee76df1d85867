//! Breakout-style SVG cards generated from a GitHub contribution calendar.
//!
//! The pipeline is a single pass: resolve a trailing-year series (real
//! calendar data when a token is available, synthetic otherwise), bucket
//! each day into an intensity level, pour the series onto the 53x7 grid,
//! then render the two themed cards and the JSON summary.

pub mod error;
pub mod github;
pub mod layout;
pub mod level;
pub mod models;
pub mod render;
pub mod source;
pub mod synthesis;

pub use error::SourceError;
pub use layout::{Grid, GridCell, DAYS_IN_WEEK, WEEKS_IN_YEAR};
pub use level::{classify, LevelThresholds};
pub use models::{ContributionData, ContributionSeries, DailyRecord};
pub use source::{resolve, SourceConfig};
pub use synthesis::SynthesisConfig;
