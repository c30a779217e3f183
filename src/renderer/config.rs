//! Configuration for document rendering

use std::collections::BTreeMap;
use std::path::Path;

/// Theme stylesheets by name
///
/// Themes come from an external catalog; a slide names one through its
/// `theme` attribute and the document render inlines the matching CSS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeSet {
    themes: BTreeMap<String, String>,
}

impl ThemeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every `<name>.css` file in `dir`
    pub fn from_dir(dir: &Path) -> std::io::Result<Self> {
        let mut themes = BTreeMap::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("css") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            themes.insert(name.to_string(), std::fs::read_to_string(&path)?);
        }
        log::debug!("loaded {} themes from {}", themes.len(), dir.display());
        Ok(Self { themes })
    }

    /// Add or replace a theme
    pub fn with_theme(mut self, name: impl Into<String>, css: impl Into<String>) -> Self {
        self.themes.insert(name.into(), css.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.themes.get(name).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

/// Configuration options for document output
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Theme stylesheets available to slides
    pub themes: ThemeSet,

    /// Whether to emit web-font `<link>` tags for the fonts in use
    pub font_links: bool,

    /// Whether to drop whitespace-only lines from the final document
    pub strip_blank_lines: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            themes: ThemeSet::default(),
            font_links: true,
            strip_blank_lines: true,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the available themes
    pub fn with_themes(mut self, themes: ThemeSet) -> Self {
        self.themes = themes;
        self
    }

    /// Set whether font links are emitted
    pub fn with_font_links(mut self, font_links: bool) -> Self {
        self.font_links = font_links;
        self
    }

    /// Set whether blank lines are stripped
    pub fn with_strip_blank_lines(mut self, strip: bool) -> Self {
        self.strip_blank_lines = strip;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert!(config.themes.is_empty());
        assert!(config.font_links);
        assert!(config.strip_blank_lines);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RenderConfig::new()
            .with_themes(ThemeSet::new().with_theme("dark", "slide.dark { color: white; }"))
            .with_font_links(false)
            .with_strip_blank_lines(false);

        assert_eq!(config.themes.get("dark"), Some("slide.dark { color: white; }"));
        assert!(!config.font_links);
        assert!(!config.strip_blank_lines);
    }

    #[test]
    fn test_themes_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("ocean.css"), ".ocean { color: blue; }").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();
        let themes = ThemeSet::from_dir(dir.path()).unwrap();
        assert_eq!(themes.len(), 1);
        assert_eq!(themes.get("ocean"), Some(".ocean { color: blue; }"));
    }
}
