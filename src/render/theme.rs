//! Color palettes for the rendered cards, matching the palette GitHub's own
//! contribution graph uses in each color scheme.

/// Colors for one rendering theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub text: &'static str,
    pub paddle: &'static str,
    pub ball: &'static str,
    pub border: &'static str,
    /// Brick fill per intensity level, coolest to hottest
    pub bricks: [&'static str; 5],
}

impl Theme {
    /// Brick fill for a level; anything out of range clamps to the hottest
    /// color.
    pub fn brick_color(&self, level: u8) -> &'static str {
        self.bricks[usize::from(level).min(self.bricks.len() - 1)]
    }
}

pub const LIGHT: Theme = Theme {
    bg: "#ffffff",
    text: "#24292f",
    paddle: "#0969da",
    ball: "#cf222e",
    border: "#d0d7de",
    bricks: ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"],
};

pub const DARK: Theme = Theme {
    bg: "#0d1117",
    text: "#c9d1d9",
    paddle: "#58a6ff",
    ball: "#f85149",
    border: "#30363d",
    bricks: ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    pub fn palette(&self) -> &'static Theme {
        match self {
            ThemeKind::Light => &LIGHT,
            ThemeKind::Dark => &DARK,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_color_clamps_out_of_range_levels() {
        assert_eq!(LIGHT.brick_color(0), "#ebedf0");
        assert_eq!(LIGHT.brick_color(4), "#216e39");
        assert_eq!(LIGHT.brick_color(200), "#216e39");
    }

    #[test]
    fn theme_kinds_resolve_their_palettes() {
        assert_eq!(ThemeKind::Light.palette(), &LIGHT);
        assert_eq!(ThemeKind::Dark.palette(), &DARK);
        assert_eq!(ThemeKind::Dark.as_str(), "dark");
    }
}
