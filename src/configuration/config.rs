//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`RunConfig`]      – time step, number of ticks, and how many particles each tick updates
//! - [`ParticleConfig`] – initial state for each particle, in insertion order
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! run:
//!   dt: 0.1                 # time step per tick
//!   steps: 3                # number of ticks
//!   update_count: 5         # optional, defaults to every particle
//!
//! particles:
//!   - mass: 1.0
//!     position: [0.0, 5.0, 0.0]
//!     velocity: [1.0, 5.0, 1.0]
//!   - mass: 1.5
//!     position: [2.0, 5.0, 1.0]
//!     velocity: [2.0, 5.0, 2.0]
//!     acceleration: [0.0, -9.81, 0.0]
//! ```
//!
//! Kinematic vectors other than `position` and `velocity` are optional and
//! default to zero. `mass` defaults to 1.0.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

fn default_mass() -> f64 {
    1.0
}

/// Per-run stepping settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub dt: f64,                     // time step handed to every update
    pub steps: usize,                // number of ticks to run
    pub update_count: Option<usize>, // particles integrated per tick, None -> all
}

/// Configuration for a single particle's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    #[serde(default = "default_mass")]
    pub mass: f64,
    pub position: [f64; 3],
    pub velocity: [f64; 3],
    #[serde(default)]
    pub acceleration: [f64; 3],
    #[serde(default)]
    pub angle: [f64; 3],
    #[serde(default)]
    pub angular_velocity: [f64; 3],
    #[serde(default)]
    pub angular_acceleration: [f64; 3],
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub run: RunConfig,                  // stepping settings
    pub particles: Vec<ParticleConfig>, // initial particles, insertion order kept
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }
}

/// Read and parse a scenario file
pub fn load_scenario(path: impl AsRef<Path>) -> Result<ScenarioConfig> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn optional_fields_default() {
        let cfg = ScenarioConfig::from_yaml_str(
            "run: { dt: 0.1, steps: 2 }\n\
             particles:\n  - { position: [1, 2, 3], velocity: [0, 0, 1] }\n",
        )
        .unwrap();
        assert_eq!(cfg.run.update_count, None);
        let p = &cfg.particles[0];
        assert_eq!(p.mass, 1.0);
        assert_eq!(p.position, [1.0, 2.0, 3.0]);
        assert_eq!(p.acceleration, [0.0; 3]);
        assert_eq!(p.angular_acceleration, [0.0; 3]);
    }

    #[test]
    fn wrong_vector_length_is_rejected() {
        let err = ScenarioConfig::from_yaml_str(
            "run: { dt: 0.1, steps: 2 }\n\
             particles:\n  - { position: [1, 2], velocity: [0, 0, 1] }\n",
        )
        .unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_scenario("definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
