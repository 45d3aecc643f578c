use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PendulumError, PendulumResult};

/// Parameters for a single energy-conserving pendulum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumConfig {
    /// Arm length from pivot to bob center, meters.
    pub length: f32,
    /// Lateral distance the bob travels from rest to apex, meters.
    pub swing_width: f32,
    /// Seconds to wait before the pendulum starts swinging.
    pub start_delay: f32,
    /// Magnitude of gravitational acceleration, m/s^2.
    pub gravity: f32,
    /// Seconds between fixed steps the host should run.
    pub fixed_timestep: f32,
}

impl Default for PendulumConfig {
    fn default() -> Self {
        Self {
            length: 0.5,
            swing_width: 0.25,
            start_delay: 10.0,
            gravity: 9.81,
            fixed_timestep: 0.02,
        }
    }
}

impl PendulumConfig {
    pub fn validate(&self) -> PendulumResult<()> {
        if !self.length.is_finite() || self.length <= 0.0 {
            return Err(PendulumError::Config(format!(
                "length must be > 0, got {}",
                self.length
            )));
        }
        if !self.swing_width.is_finite() || self.swing_width < 0.0 {
            return Err(PendulumError::Config(format!(
                "swing_width must be >= 0, got {}",
                self.swing_width
            )));
        }
        if self.swing_width >= self.length {
            return Err(PendulumError::Config(format!(
                "swing_width must be < length, got {} >= {}",
                self.swing_width, self.length
            )));
        }
        if !self.start_delay.is_finite() || self.start_delay < 0.0 {
            return Err(PendulumError::Config(format!(
                "start_delay must be >= 0, got {}",
                self.start_delay
            )));
        }
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(PendulumError::Config(format!(
                "gravity must be > 0, got {}",
                self.gravity
            )));
        }
        if !self.fixed_timestep.is_finite() || self.fixed_timestep <= 0.0 {
            return Err(PendulumError::Config(format!(
                "fixed_timestep must be > 0, got {}",
                self.fixed_timestep
            )));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> PendulumResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> PendulumResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PendulumConfig::default().validate().is_ok());
    }

    #[test]
    fn test_width_not_below_length() {
        let config = PendulumConfig {
            length: 0.25,
            swing_width: 0.25,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PendulumError::Config(_))));

        let config = PendulumConfig {
            length: 0.2,
            swing_width: 0.25,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PendulumError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_scalars() {
        for config in [
            PendulumConfig {
                length: 0.0,
                ..Default::default()
            },
            PendulumConfig {
                length: f32::NAN,
                ..Default::default()
            },
            PendulumConfig {
                swing_width: -0.1,
                ..Default::default()
            },
            PendulumConfig {
                start_delay: -1.0,
                ..Default::default()
            },
            PendulumConfig {
                gravity: 0.0,
                ..Default::default()
            },
            PendulumConfig {
                fixed_timestep: 0.0,
                ..Default::default()
            },
            PendulumConfig {
                fixed_timestep: f32::INFINITY,
                ..Default::default()
            },
        ] {
            assert!(
                matches!(config.validate(), Err(PendulumError::Config(_))),
                "{config:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = PendulumConfig::from_json(
            r#"{ "length": 2.0, "start_delay": 0.5, "fixed_timestep": 0.01 }"#,
        )
        .unwrap();
        assert_eq!(config.length, 2.0);
        assert_eq!(config.start_delay, 0.5);
        assert_eq!(config.fixed_timestep, 0.01);
        assert_eq!(config.swing_width, 0.25);
        assert_eq!(config.gravity, 9.81);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            PendulumConfig::from_json("{ length: }"),
            Err(PendulumError::Parse(_))
        ));
        assert!(matches!(
            PendulumConfig::from_json(r#"{ "length": 0.1 }"#),
            Err(PendulumError::Config(_))
        ));
    }

    #[test]
    fn test_from_missing_path() {
        assert!(matches!(
            PendulumConfig::from_path("/nonexistent/pendulum.json"),
            Err(PendulumError::Io(_))
        ));
    }
}
