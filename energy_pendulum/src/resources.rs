use bevy::prelude::*;
use bevy_inspector_egui::{prelude::ReflectInspectorOptions, InspectorOptions};
use pendulum_core::PendulumConfig;

/// Environment variable naming an optional JSON file with pendulum parameters.
pub const CONFIG_ENV: &str = "PENDULUM_CONFIG";

/// Read once at startup; edits made in the inspector afterwards are not applied.
#[derive(Reflect, Resource, InspectorOptions)]
#[reflect(Resource, InspectorOptions)]
pub struct Config {
    #[inspector(min = 0.01, max = 10.0)]
    pub length: f32,
    #[inspector(min = 0.0, max = 10.0)]
    pub swing_width: f32,
    pub start_delay: f32,
    pub gravity: Vec3,
    #[inspector(min = 0.001, max = 0.1)]
    pub fixed_timestep: f32,
}

impl FromWorld for Config {
    fn from_world(_world: &mut World) -> Self {
        Self::load()
    }
}

impl From<PendulumConfig> for Config {
    fn from(config: PendulumConfig) -> Self {
        Self {
            length: config.length,
            swing_width: config.swing_width,
            start_delay: config.start_delay,
            gravity: Vec3::new(0.0, -config.gravity, 0.0),
            fixed_timestep: config.fixed_timestep,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return PendulumConfig::default().into();
        };
        match PendulumConfig::from_path(&path) {
            Ok(config) => {
                info!("Loaded pendulum config from {}", path);
                config.into()
            }
            Err(e) => {
                warn!("Could not load {}: {}, using defaults", path, e);
                PendulumConfig::default().into()
            }
        }
    }

    pub fn pendulum(&self) -> PendulumConfig {
        PendulumConfig {
            length: self.length,
            swing_width: self.swing_width,
            start_delay: self.start_delay,
            gravity: self.gravity.y.abs(),
            fixed_timestep: self.fixed_timestep,
        }
    }
}

/// One-shot countdown to the pendulum's release.
#[derive(Resource, Deref, DerefMut)]
pub struct ActivationTimer(pub Timer);

impl ActivationTimer {
    pub fn new(delay: f32) -> Self {
        Self(Timer::from_seconds(delay, TimerMode::Once))
    }
}
