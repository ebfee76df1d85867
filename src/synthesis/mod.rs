pub mod algorithm;
pub mod config;

pub use algorithm::{synthesize, trailing_year};
pub use config::SynthesisConfig;
