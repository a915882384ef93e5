//! Color resolution from layered sources.
//!
//! The display color is resolved exactly once at startup, in priority order:
//! a configured override file, then the DEFAULT_COLOR environment value, then
//! the literal fallback. Resolution never fails observably; a missing or
//! unreadable override file is logged and the next source wins.

use std::path::Path;

use crate::config::FALLBACK_COLOR;

/// Resolve the display color. Called once at startup.
///
/// A readable override file always wins, even over a set DEFAULT_COLOR. The
/// file contents are trimmed; a file that trims to the empty string falls back
/// to [`FALLBACK_COLOR`] along with every other empty outcome.
pub fn resolve(default_color: Option<&str>, override_path: Option<&Path>) -> String {
    let mut color = default_color.map(str::to_owned);

    if let Some(path) = override_path {
        match std::fs::read_to_string(path) {
            Ok(contents) => {
                color = Some(contents.trim().to_owned());
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to read color override file, keeping prior color source"
                );
            }
        }
    }

    match color {
        Some(c) if !c.is_empty() => c,
        _ => FALLBACK_COLOR.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn color_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp color file");
        file.write_all(contents.as_bytes()).expect("write color file");
        file
    }

    #[test]
    fn no_sources_yields_fallback() {
        assert_eq!(resolve(None, None), "blue");
    }

    #[test]
    fn default_color_used_without_override() {
        assert_eq!(resolve(Some("green"), None), "green");
    }

    #[test]
    fn override_file_wins_over_default() {
        let file = color_file("crimson\n");
        assert_eq!(resolve(Some("green"), Some(file.path())), "crimson");
    }

    #[test]
    fn file_contents_are_trimmed() {
        let file = color_file("  teal  \n\n");
        assert_eq!(resolve(None, Some(file.path())), "teal");
    }

    #[test]
    fn whitespace_only_file_falls_back() {
        let file = color_file("   \n\t\n");
        assert_eq!(resolve(Some("green"), Some(file.path())), "blue");
    }

    #[test]
    fn unreadable_file_keeps_default() {
        let missing = Path::new("/nonexistent/color");
        assert_eq!(resolve(Some("green"), Some(missing)), "green");
    }

    #[test]
    fn unreadable_file_without_default_yields_fallback() {
        let missing = Path::new("/nonexistent/color");
        assert_eq!(resolve(None, Some(missing)), "blue");
    }
}
