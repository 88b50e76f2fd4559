/// Terminal-palette hue, kept independent of any color crate so the core
/// never links one. The binary maps these onto real escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hue {
    Cyan,
    Magenta,
    Yellow,
    Green,
    Blue,
    White,
}

/// Styling palette injected into the painter (composition, not inheritance)
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Headings and card borders
    pub primary: Hue,
    /// Counts and accents
    pub accent: Hue,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Hue::Cyan,
            accent: Hue::Magenta,
        }
    }
}

impl Theme {
    /// Named presets selectable from configuration
    pub fn preset(name: &str) -> Self {
        match name {
            "forest" => Self {
                primary: Hue::Green,
                accent: Hue::Yellow,
            },
            "ocean" => Self {
                primary: Hue::Blue,
                accent: Hue::Cyan,
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_preset_falls_back_to_default() {
        let theme = Theme::preset("nope");
        assert_eq!(theme.primary, Hue::Cyan);
        assert_eq!(theme.accent, Hue::Magenta);
    }

    #[test]
    fn named_presets_differ_from_default() {
        assert_eq!(Theme::preset("forest").primary, Hue::Green);
        assert_eq!(Theme::preset("ocean").primary, Hue::Blue);
    }
}
