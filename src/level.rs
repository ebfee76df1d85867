//! Bucketing of raw daily counts into the five-step intensity scale used by
//! the renderer to pick brick colors.

/// Breakpoints for the 0-4 intensity scale.
///
/// A count of zero is always level 0 and one or two contributions are always
/// level 1; the remaining breakpoints are tunable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelThresholds {
    /// Highest count still classified as level 1
    pub light_max: u32,
    /// Highest count still classified as level 2
    pub moderate_max: u32,
    /// Highest count still classified as level 3; anything above is level 4
    pub heavy_max: u32,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            light_max: 2,
            moderate_max: 5,
            heavy_max: 8,
        }
    }
}

impl LevelThresholds {
    /// Tighter breakpoints paired with the quieter synthesis presets.
    pub fn compact() -> Self {
        Self {
            light_max: 2,
            moderate_max: 4,
            heavy_max: 7,
        }
    }
}

/// Map a daily contribution count to its intensity level.
///
/// Total over all counts and monotonic non-decreasing, so neighboring counts
/// can never swap colors.
pub fn classify(count: u32, thresholds: &LevelThresholds) -> u8 {
    if count == 0 {
        0
    } else if count <= thresholds.light_max {
        1
    } else if count <= thresholds.moderate_max {
        2
    } else if count <= thresholds.heavy_max {
        3
    } else {
        4
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_thresholds_boundary_table() {
        let t = LevelThresholds::default();
        assert_eq!(classify(0, &t), 0);
        assert_eq!(classify(1, &t), 1);
        assert_eq!(classify(2, &t), 1);
        assert_eq!(classify(3, &t), 2);
        assert_eq!(classify(5, &t), 2);
        assert_eq!(classify(6, &t), 3);
        assert_eq!(classify(8, &t), 3);
        assert_eq!(classify(9, &t), 4);
        assert_eq!(classify(100, &t), 4);
    }

    #[test]
    fn compact_thresholds_boundary_table() {
        let t = LevelThresholds::compact();
        assert_eq!(classify(0, &t), 0);
        assert_eq!(classify(2, &t), 1);
        assert_eq!(classify(4, &t), 2);
        assert_eq!(classify(5, &t), 3);
        assert_eq!(classify(7, &t), 3);
        assert_eq!(classify(8, &t), 4);
    }

    proptest! {
        #[test]
        fn level_is_always_in_range(count in any::<u32>()) {
            let level = classify(count, &LevelThresholds::default());
            prop_assert!(level <= 4);
        }

        #[test]
        fn level_is_monotonic(count in 0u32..10_000) {
            let t = LevelThresholds::default();
            prop_assert!(classify(count, &t) <= classify(count + 1, &t));
        }
    }
}
