use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::route::segments::AXIS_EPSILON;

/// Tunables for routing and interaction. Every field has a default; config
/// files only need the values they override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Axis-alignment tolerance when classifying draggable segments.
    pub axis_epsilon: f32,
    /// Distance a step route travels out of an anchor before its first bend
    /// when the direct mid-channel would fight an anchor side.
    pub stub_length: f32,
    /// Squared screen-pixel displacement before a label press engages as a
    /// drag instead of a click.
    pub label_drag_threshold: f32,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        RoutingConfig {
            axis_epsilon: AXIS_EPSILON,
            stub_length: 20.0,
            label_drag_threshold: 16.0,
        }
    }
}

/// Load a config file, defaulting when no path is given. Strict JSON first,
/// JSON5 fallback for hand-written files.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<RoutingConfig> {
    let Some(path) = path else {
        return Ok(RoutingConfig::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let config = match serde_json::from_str(&contents) {
        Ok(config) => config,
        Err(err) => json5::from_str(&contents).map_err(|_| err)?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let config = RoutingConfig::default();
        assert_eq!(config.axis_epsilon, 0.5);
        assert_eq!(config.stub_length, 20.0);
        assert_eq!(config.label_drag_threshold, 16.0);
    }

    #[test]
    fn partial_documents_fill_in_defaults() {
        let config: RoutingConfig = serde_json::from_str(r#"{"stub_length": 30.0}"#).unwrap();
        assert_eq!(config.stub_length, 30.0);
        assert_eq!(config.axis_epsilon, 0.5);
    }

    #[test]
    fn json5_documents_are_accepted() {
        let config: RoutingConfig =
            json5::from_str("{ stub_length: 24.0, /* wider stubs */ }").unwrap();
        assert_eq!(config.stub_length, 24.0);
    }
}
