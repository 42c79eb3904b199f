//! Icon and color configuration for decorated output.
//!
//! The configuration file is JSON with two optional maps keyed by file
//! extension (including the leading `.`) or by the sentinel key `folder`:
//!
//! ```json
//! { "icons": { ".rs": "🦀", "folder": "📁" }, "colors": { ".rs": "fgRed" } }
//! ```

use crate::error::{LsTreeError, Result};
use owo_colors::{AnsiColors, OwoColorize};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Lookup key used for directories.
pub const FOLDER_KEY: &str = "folder";

/// Terminal colors that can be assigned to an icon.
///
/// Unrecognized names in the configuration file become `Reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum TermColor {
    #[default]
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    HiBlack,
    HiRed,
    HiGreen,
    HiYellow,
    HiBlue,
    HiMagenta,
    HiCyan,
    HiWhite,
}

impl TermColor {
    /// Parse a color name as written in the configuration file.
    pub fn from_name(name: &str) -> Self {
        match name {
            "fgBlack" => TermColor::Black,
            "fgRed" => TermColor::Red,
            "fgGreen" => TermColor::Green,
            "fgYellow" => TermColor::Yellow,
            "fgBlue" => TermColor::Blue,
            "fgMagenta" => TermColor::Magenta,
            "fgCyan" => TermColor::Cyan,
            "fgWhite" => TermColor::White,
            "fgHiBlack" => TermColor::HiBlack,
            "fgHiRed" => TermColor::HiRed,
            "fgHiGreen" => TermColor::HiGreen,
            "fgHiYellow" => TermColor::HiYellow,
            "fgHiBlue" => TermColor::HiBlue,
            "fgHiMagenta" => TermColor::HiMagenta,
            "fgHiCyan" => TermColor::HiCyan,
            "fgHiWhite" => TermColor::HiWhite,
            _ => TermColor::Reset,
        }
    }

    pub fn ansi(self) -> AnsiColors {
        match self {
            TermColor::Reset => AnsiColors::Default,
            TermColor::Black => AnsiColors::Black,
            TermColor::Red => AnsiColors::Red,
            TermColor::Green => AnsiColors::Green,
            TermColor::Yellow => AnsiColors::Yellow,
            TermColor::Blue => AnsiColors::Blue,
            TermColor::Magenta => AnsiColors::Magenta,
            TermColor::Cyan => AnsiColors::Cyan,
            TermColor::White => AnsiColors::White,
            TermColor::HiBlack => AnsiColors::BrightBlack,
            TermColor::HiRed => AnsiColors::BrightRed,
            TermColor::HiGreen => AnsiColors::BrightGreen,
            TermColor::HiYellow => AnsiColors::BrightYellow,
            TermColor::HiBlue => AnsiColors::BrightBlue,
            TermColor::HiMagenta => AnsiColors::BrightMagenta,
            TermColor::HiCyan => AnsiColors::BrightCyan,
            TermColor::HiWhite => AnsiColors::BrightWhite,
        }
    }

    /// Wrap `text` in this color's escape codes.
    pub fn paint(self, text: &str) -> String {
        text.color(self.ansi()).to_string()
    }
}

impl From<String> for TermColor {
    fn from(name: String) -> Self {
        TermColor::from_name(&name)
    }
}

/// Icon and color tables loaded from the configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IconConfig {
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
    #[serde(default)]
    pub colors: BTreeMap<String, TermColor>,
    /// The document as it was read, before color names were resolved
    #[serde(skip)]
    loaded: serde_json::Value,
}

impl IconConfig {
    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| LsTreeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| LsTreeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let loaded: serde_json::Value = serde_json::from_str(text)?;
        let mut config: Self = serde_json::from_value(loaded.clone())?;
        config.loaded = loaded;
        Ok(config)
    }

    /// The configuration exactly as written in the file
    pub fn loaded(&self) -> &serde_json::Value {
        &self.loaded
    }

    /// Icon and color for `key`; missing keys give an empty icon and `Reset`.
    pub fn lookup(&self, key: &str) -> (&str, TermColor) {
        let icon = self.icons.get(key).map(String::as_str).unwrap_or("");
        let color = self.colors.get(key).copied().unwrap_or_default();
        (icon, color)
    }
}

/// How entries are decorated when rendered.
#[derive(Debug, Clone)]
pub enum Decoration {
    /// Names only
    Plain,
    /// Icons and colors from a loaded configuration
    Themed(IconConfig),
}

impl Decoration {
    /// Icon for `key`, colored when `color` is set. `None` for plain output.
    pub fn icon(&self, key: &str, color: bool) -> Option<String> {
        match self {
            Decoration::Plain => None,
            Decoration::Themed(config) => {
                let (icon, term_color) = config.lookup(key);
                if color && !icon.is_empty() {
                    Some(term_color.paint(icon))
                } else {
                    Some(icon.to_string())
                }
            }
        }
    }
}

/// Icon lookup key for an entry: `folder` for directories, otherwise the
/// extension from the last `.` onward (empty when there is none).
pub fn icon_key(name: &str, is_dir: bool) -> &str {
    if is_dir {
        return FOLDER_KEY;
    }
    name.rfind('.').map(|idx| &name[idx..]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"{
        "icons": { ".rs": "R", "folder": "D" },
        "colors": { ".rs": "fgRed", "folder": "fgHiBlue", ".md": "chartreuse" }
    }"#;

    #[test]
    fn test_parse_sample() {
        let config = IconConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.lookup(".rs"), ("R", TermColor::Red));
        assert_eq!(config.lookup("folder"), ("D", TermColor::HiBlue));
    }

    #[test]
    fn test_unknown_color_name_is_reset() {
        let config = IconConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.lookup(".md"), ("", TermColor::Reset));
    }

    #[test]
    fn test_unmapped_key_falls_back() {
        let config = IconConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.lookup(icon_key("a.xyz", false)), ("", TermColor::Reset));
    }

    #[test]
    fn test_missing_maps_default_to_empty() {
        let config = IconConfig::from_json("{}").unwrap();
        assert!(config.icons.is_empty());
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(IconConfig::from_json("{ icons: ").is_err());
        assert!(IconConfig::from_json(r#"{"icons": ["a"]}"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = IconConfig::load(&dir.path().join("config.json")).unwrap_err();
        assert!(matches!(err, LsTreeError::ConfigRead { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        let err = IconConfig::load(&path).unwrap_err();
        assert!(matches!(err, LsTreeError::ConfigParse { .. }));
    }

    #[test]
    fn test_icon_key() {
        assert_eq!(icon_key("main.rs", false), ".rs");
        assert_eq!(icon_key("archive.tar.gz", false), ".gz");
        assert_eq!(icon_key(".bashrc", false), ".bashrc");
        assert_eq!(icon_key("Makefile", false), "");
        assert_eq!(icon_key("src.d", true), "folder");
    }

    #[test]
    fn test_loaded_keeps_unknown_color_names() {
        let config = IconConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.colors[".md"], TermColor::Reset);
        assert_eq!(config.loaded()["colors"][".md"], "chartreuse");
        assert_eq!(config.loaded()["colors"]["folder"], "fgHiBlue");
    }

    #[test]
    fn test_paint_wraps_in_escape_codes() {
        let painted = TermColor::Red.paint("x");
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains('x'));
    }

    #[test]
    fn test_plain_decoration_has_no_icon() {
        assert_eq!(Decoration::Plain.icon(".rs", true), None);
    }

    #[test]
    fn test_themed_decoration_without_color() {
        let decoration = Decoration::Themed(IconConfig::from_json(SAMPLE).unwrap());
        assert_eq!(decoration.icon(".rs", false), Some("R".to_string()));
        assert_eq!(decoration.icon(".xyz", true), Some(String::new()));
    }
}
