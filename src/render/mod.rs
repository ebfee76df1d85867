pub mod game_data;
pub mod svg;
pub mod theme;

pub use game_data::{GameData, LevelBreakdown};
pub use svg::render_card;
pub use theme::{Theme, ThemeKind};
