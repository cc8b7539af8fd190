//! Viewer configuration.

use serde::{Deserialize, Serialize};

use crate::gesture::DRAG_SENSITIVITY_PX;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse viewer config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Drag sensitivity must be positive, got {0}")]
    Sensitivity(f64),
    #[error("Image series name must not be empty")]
    EmptySeries,
}

/// Tunables for the frame viewer. Every field has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory of the frame images under the site root.
    pub series: String,
    /// Horizontal pixels of drag per frame.
    pub drag_sensitivity_px: f64,
    /// Frames eagerly loaded on each side of the current one.
    pub preload_neighbors: u16,
    /// Session storage key for the last viewed frame.
    pub session_key: String,
    /// Tooltip offset from the cursor, in pixels.
    pub tooltip_offset: [f64; 2],
    /// URL the chat widget posts to.
    pub chat_endpoint: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            series: "tower-2".to_string(),
            drag_sensitivity_px: DRAG_SENSITIVITY_PX,
            preload_neighbors: 5,
            session_key: "lastTowerFrame".to_string(),
            tooltip_offset: [10.0, -40.0],
            chat_endpoint: "/api".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration shipped with the viewer.
    pub fn embedded() -> Result<Self, ConfigError> {
        const DEFAULT_CONFIG_JSON: &str = include_str!("../config/viewer.json");
        Self::from_json(DEFAULT_CONFIG_JSON)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.drag_sensitivity_px > 0.0) {
            return Err(ConfigError::Sensitivity(self.drag_sensitivity_px));
        }
        if self.series.trim().is_empty() {
            return Err(ConfigError::EmptySeries);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_matches_defaults() {
        let config = ViewerConfig::embedded().expect("embedded config must parse");
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = ViewerConfig::from_json(r#"{"series": "tower-3"}"#).unwrap();
        assert_eq!(config.series, "tower-3");
        assert_eq!(config.drag_sensitivity_px, 8.0);
        assert_eq!(config.session_key, "lastTowerFrame");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ViewerConfig::from_json(r#"{"drag_sensitivity_px": 0}"#),
            Err(ConfigError::Sensitivity(_))
        ));
        assert!(matches!(
            ViewerConfig::from_json(r#"{"series": " "}"#),
            Err(ConfigError::EmptySeries)
        ));
        assert!(matches!(
            ViewerConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
