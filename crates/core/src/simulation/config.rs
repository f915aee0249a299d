//! Service-level simulation configuration
//!
//! Defaults match the web service: a 200x200 grid, density 0.6, 60 steps,
//! and a hard cap of 250 steps per request.

use super::limits::{clamp_steps, DEFAULT_MAX_STEPS};
use super::params::SimulationParams;
use serde::{Deserialize, Serialize};

/// Configuration for callers that expose the engine
///
/// Missing fields fall back to [`SimulationConfig::default`] when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells
    pub width: i64,
    /// Grid height in cells
    pub height: i64,
    /// Default forest density
    pub density: f64,
    /// Default number of ticks
    pub steps: i64,
    /// Upper bound applied to requested step counts
    pub max_steps: i64,
    /// Fixed seed for every run, or `None` for fresh randomness
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            density: 0.6,
            steps: 60,
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Parameters for a run using the configured defaults
    #[must_use]
    pub fn params(&self) -> SimulationParams {
        self.request(self.density, self.steps)
    }

    /// Parameters for a request with its own density and step count
    ///
    /// The step count is capped at `max_steps`; everything else is passed
    /// through for the engine to validate.
    #[must_use]
    pub fn request(&self, density: f64, steps: i64) -> SimulationParams {
        SimulationParams {
            width: self.width,
            height: self.height,
            density,
            steps: clamp_steps(steps, self.max_steps),
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_service() {
        let config = SimulationConfig::default();
        let params = config.params();
        assert_eq!((params.width, params.height), (200, 200));
        assert_eq!(params.density, 0.6);
        assert_eq!(params.steps, 60);
        assert_eq!(params.seed, None);
    }

    #[test]
    fn test_request_caps_steps() {
        let config = SimulationConfig::default();
        assert_eq!(config.request(0.8, 5000).steps, 250);
        assert_eq!(config.request(0.8, 120).steps, 120);
        assert_eq!(config.request(0.8, -3).steps, -3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{ "width": 64, "seed": 7 }"#).expect("valid config");
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 200);
        assert_eq!(config.max_steps, 250);
        assert_eq!(config.seed, Some(7));
    }
}
