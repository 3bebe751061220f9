//! Orchestrator configuration
//!
//! ```toml
//! default_split_lesson = 45
//! course_panel_open = true
//! chat_panel_open = false
//! log_filter = "art_layout=debug,info"
//! ```

use crate::error::ConfigError;
use crate::layout::SplitRatio;
use crate::visibility::PanelVisibility;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Orchestrator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    /// Initial lesson width in percent of the split layout
    pub default_split_lesson: u8,
    /// Course panel open at startup
    pub course_panel_open: bool,
    /// Chat panel open at startup
    pub chat_panel_open: bool,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl OrchestratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With initial lesson width
    #[inline]
    #[must_use]
    pub fn with_default_split_lesson(mut self, lesson: u8) -> Self {
        self.default_split_lesson = lesson;
        self
    }

    /// With initial course panel visibility
    #[inline]
    #[must_use]
    pub fn with_course_panel_open(mut self, open: bool) -> Self {
        self.course_panel_open = open;
        self
    }

    /// With initial chat panel visibility
    #[inline]
    #[must_use]
    pub fn with_chat_panel_open(mut self, open: bool) -> Self {
        self.chat_panel_open = open;
        self
    }

    /// With fallback tracing filter
    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Parse from TOML
    ///
    /// # Errors
    /// `ConfigError::Parse` for malformed TOML, `SplitOutOfRange` for an
    /// invalid split.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Read` if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Check value ranges
    ///
    /// # Errors
    /// `ConfigError::SplitOutOfRange` if the split lies outside 30..=70.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.split_ratio().map(|_| ())
    }

    /// Initial split
    ///
    /// # Errors
    /// `ConfigError::SplitOutOfRange` if the split lies outside 30..=70.
    pub fn split_ratio(&self) -> Result<SplitRatio, ConfigError> {
        SplitRatio::new(self.default_split_lesson).ok_or(ConfigError::SplitOutOfRange {
            value: self.default_split_lesson,
            min: SplitRatio::MIN_LESSON,
            max: SplitRatio::MAX_LESSON,
        })
    }

    /// Initial sidebar visibility
    #[must_use]
    pub fn panels(&self) -> PanelVisibility {
        PanelVisibility {
            course_open: self.course_panel_open,
            chat_open: self.chat_panel_open,
        }
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            default_split_lesson: SplitRatio::DEFAULT_LESSON,
            course_panel_open: true,
            chat_panel_open: true,
            log_filter: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.split_ratio().unwrap().lesson(), 40);
        assert_eq!(config.panels(), PanelVisibility::default());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = OrchestratorConfig::from_toml_str("chat_panel_open = false\n").unwrap();
        assert_eq!(
            config,
            OrchestratorConfig::default().with_chat_panel_open(false)
        );
    }

    #[test]
    fn out_of_range_split_rejected() {
        let err = OrchestratorConfig::from_toml_str("default_split_lesson = 80").unwrap_err();
        assert!(matches!(err, ConfigError::SplitOutOfRange { value: 80, .. }));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(matches!(
            OrchestratorConfig::from_toml_str("default_split_lesson = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_split_lesson = 55\nlog_filter = \"debug\"").unwrap();
        let config = OrchestratorConfig::load(file.path()).unwrap();
        assert_eq!(config.default_split_lesson, 55);
        assert_eq!(config.log_filter, "debug");
        assert!(config.course_panel_open);
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OrchestratorConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
