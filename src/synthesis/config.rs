/// Tunable bounds for the synthetic contribution generator.
#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Exclusive upper bound of the uniform draw on a normal workday
    pub weekday_max: f64,

    /// Exclusive upper bound of the uniform draw on Saturday and Sunday
    pub weekend_max: f64,

    /// Workday draw bound during July and August; `None` disables the
    /// seasonal adjustment entirely
    pub vacation_max: Option<f64>,

    /// Probability that a day is forced to zero contributions regardless of
    /// its base draw
    pub skip_probability: f64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            weekday_max: 12.0,
            weekend_max: 2.0,
            vacation_max: Some(3.0),
            skip_probability: 0.25,
        }
    }
}

impl SynthesisConfig {
    /// Moderate workdays, no seasonal dip.
    pub fn moderate() -> Self {
        Self {
            weekday_max: 10.0,
            weekend_max: 3.0,
            vacation_max: None,
            skip_probability: 0.30,
        }
    }

    /// Quiet workdays, no seasonal dip.
    pub fn quiet() -> Self {
        Self {
            weekday_max: 8.0,
            weekend_max: 3.0,
            vacation_max: None,
            skip_probability: 0.30,
        }
    }
}
