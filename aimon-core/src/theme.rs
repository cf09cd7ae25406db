use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Status color palette consumed by the color helpers.
///
/// Exactly four semantic slots; anything richer belongs to the UI layer.
/// Defaults follow the Breeze status colors so readouts blend in with a
/// stock desktop theme.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Healthy, comfortably under the limit
    pub positive: Color,
    /// Approaching the limit
    pub neutral: Color,
    /// At or over the limit
    pub negative: Color,
    /// No meaningful reading (e.g. zero denominator)
    pub disabled: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            positive: Color::Rgb(39, 174, 96),   // ForegroundPositive
            neutral: Color::Rgb(246, 116, 0),    // ForegroundNeutral
            negative: Color::Rgb(218, 68, 83),   // ForegroundNegative
            disabled: Color::Rgb(127, 140, 141), // ForegroundInactive
        }
    }
}

impl Theme {
    /// Load a palette from a TOML file.
    ///
    /// Colors accept `#rrggbb` hex or ANSI color names, e.g.:
    ///
    /// ```toml
    /// positive = "#27ae60"
    /// neutral = "#f67400"
    /// negative = "#da4453"
    /// disabled = "gray"
    /// ```
    pub fn load(path: &Path) -> Result<Theme> {
        let text = fs::read_to_string(path)?;
        let theme = toml::from_str(&text)?;
        Ok(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeError;
    use std::io::Write;

    #[test]
    fn test_default_slots_are_distinct() {
        let theme = Theme::default();
        assert_ne!(theme.positive, theme.neutral);
        assert_ne!(theme.neutral, theme.negative);
        assert_ne!(theme.negative, theme.disabled);
    }

    #[test]
    fn test_load_theme_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "positive = \"#27ae60\"\n\
             neutral = \"#f67400\"\n\
             negative = \"#da4453\"\n\
             disabled = \"#7f8c8d\"\n"
        )
        .unwrap();

        let theme = Theme::load(file.path()).unwrap();
        assert_eq!(theme.positive, Color::Rgb(0x27, 0xae, 0x60));
        assert_eq!(theme.disabled, Color::Rgb(0x7f, 0x8c, 0x8d));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "positive = \"#27ae60\"\nneutral = [1, 2]\n").unwrap();

        let err = Theme::load(file.path()).unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Theme::load(Path::new("/nonexistent/theme.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io(_)));
    }
}
