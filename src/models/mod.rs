pub mod contribution;

pub use contribution::{ContributionData, ContributionSeries, DailyRecord};
