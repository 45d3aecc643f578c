use tracing::{debug, trace};

use crate::{
    config::PendulumConfig,
    error::PendulumResult,
    kinematics::{height_at_angle, max_angle},
    state::{Direction, PendulumState, StepOutcome},
};

/// Activation gate: a pendulum sits still until its start delay has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Idle,
    Swinging,
}

/// A pendulum driven by host callbacks.
///
/// The host calls [`Pendulum::on_init`] once, [`Pendulum::on_activate`] when its
/// one-shot start timer fires, and [`Pendulum::on_fixed_step`] every physics tick.
/// The swing angle is owned here; the host renders [`Pendulum::angle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    state: PendulumState,
    angle: f32,
    angular_velocity: f32,
    max_angle: f32,
}

impl Pendulum {
    pub fn on_init(config: &PendulumConfig) -> PendulumResult<Self> {
        let state = PendulumState::new(config, 0.0)?;
        let max_angle = max_angle(state.length, state.swing_width);
        debug!(
            length = state.length,
            swing_width = state.swing_width,
            max_height = state.max_height,
            start_delay = state.start_delay,
            "pendulum armed"
        );
        Ok(Self {
            state,
            angle: 0.0,
            angular_velocity: 0.0,
            max_angle,
        })
    }

    /// Start swinging. Only the first call has any effect.
    pub fn on_activate(&mut self) {
        if self.state.activate() {
            debug!("pendulum swinging");
        }
    }

    pub fn on_fixed_step(&mut self, dt: f32) -> StepOutcome {
        let height = self.height();
        if !self.state.active {
            return StepOutcome::idle(height, self.state.direction);
        }
        if height > self.state.max_height {
            trace!(height, max_height = self.state.max_height, "above apex");
        }

        let mut outcome = self.state.step(height, dt);

        // The energy formula gives zero speed at the apex; a bob parked exactly
        // there would never fall back without this floor.
        let min_speed = self.apex_release_speed(dt);
        if outcome.angular_velocity.abs() < min_speed {
            outcome = StepOutcome::moving(
                min_speed * outcome.direction.sign(),
                dt,
                height,
                outcome.direction,
                outcome.flipped,
            );
        }

        self.angle += outcome.rotation_delta;
        self.angular_velocity = outcome.angular_velocity;
        trace!(
            angle = self.angle,
            angular_velocity = self.angular_velocity,
            "fixed step"
        );
        outcome
    }

    /// Angular speed gained in one tick from rest at the apex.
    fn apex_release_speed(&self, dt: f32) -> f32 {
        let s = &self.state;
        s.gravity * (s.swing_width / s.length) * dt / s.length
    }

    pub fn phase(&self) -> Phase {
        if self.state.active {
            Phase::Swinging
        } else {
            Phase::Idle
        }
    }

    /// Swing angle from vertical, radians. Negative toward [`Direction::Left`].
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn height(&self) -> f32 {
        height_at_angle(self.state.length, self.angle)
    }

    pub fn max_angle(&self) -> f32 {
        self.max_angle
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn start_delay(&self) -> f32 {
        self.state.start_delay
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const DT: f32 = 0.02;

    fn pendulum() -> Pendulum {
        Pendulum::on_init(&PendulumConfig::default()).unwrap()
    }

    fn peak_speed(p: &Pendulum) -> f32 {
        let s = p.state();
        (2.0 * s.gravity * s.max_height).sqrt() / s.length
    }

    #[test]
    fn test_init_rejects_bad_config() {
        let config = PendulumConfig {
            swing_width: 0.6,
            ..Default::default()
        };
        assert!(Pendulum::on_init(&config).is_err());
    }

    #[test]
    fn test_still_until_activated() {
        let mut p = pendulum();
        assert_eq!(p.phase(), Phase::Idle);
        for _ in 0..500 {
            let out = p.on_fixed_step(DT);
            assert_eq!(out.rotation_delta_degrees, 0.0);
        }
        assert_eq!(p.angle(), 0.0);
        assert_eq!(p.direction(), Direction::Left);
    }

    #[test]
    fn test_activate_is_one_shot() {
        let mut p = pendulum();
        p.on_activate();
        assert_eq!(p.phase(), Phase::Swinging);
        p.on_fixed_step(DT);
        let snapshot = p.clone();
        p.on_activate();
        assert_eq!(p, snapshot);
    }

    #[test]
    fn test_first_step_swings_left() {
        let mut p = pendulum();
        p.on_activate();
        let out = p.on_fixed_step(DT);
        assert!(out.rotation_delta < 0.0);
        assert!(p.angle() < 0.0);
        assert_relative_eq!(p.angular_velocity(), -peak_speed(&p), epsilon = 1e-5);
    }

    #[test]
    fn test_full_cycle_two_flips() {
        let mut p = pendulum();
        p.on_activate();
        let start = p.direction();

        let mut flips = Vec::new();
        for _ in 0..10_000 {
            let out = p.on_fixed_step(DT);
            if out.flipped {
                flips.push(p.angle());
                if flips.len() == 2 {
                    break;
                }
            }
        }

        assert_eq!(flips.len(), 2);
        assert_eq!(p.direction(), start);
        // left apex first, then right
        let slack = peak_speed(&p) * DT;
        assert!(flips[0] < 0.0 && flips[1] > 0.0);
        assert!((flips[0].abs() - p.max_angle()).abs() <= slack);
        assert!((flips[1].abs() - p.max_angle()).abs() <= slack);
    }

    #[test]
    fn test_angle_stays_within_swing() {
        let mut p = pendulum();
        p.on_activate();
        let bound = p.max_angle() + peak_speed(&p) * DT;
        let mut flips = 0;
        for _ in 0..1_000 {
            if p.on_fixed_step(DT).flipped {
                flips += 1;
            }
            assert!(p.angle().abs() <= bound, "angle {} escaped {}", p.angle(), bound);
        }
        // 20 s of swinging at roughly 1.4 s per period
        assert!(flips > 20);
    }

    #[test]
    fn test_leaves_apex_when_parked_on_it() {
        let mut p = pendulum();
        p.on_activate();
        p.angle = -p.max_angle();
        p.state.at_apex = false;
        // force exact apex height so the energy formula gives zero speed
        p.state.max_height = p.height();

        let out = p.on_fixed_step(DT);
        assert!(out.flipped);
        assert!(out.rotation_delta > 0.0);
        assert!(p.angle() > -p.max_angle());
    }

    #[test]
    fn test_zero_width_stays_at_rest() {
        let config = PendulumConfig {
            swing_width: 0.0,
            ..Default::default()
        };
        let mut p = Pendulum::on_init(&config).unwrap();
        p.on_activate();
        for _ in 0..100 {
            p.on_fixed_step(DT);
        }
        assert_eq!(p.angle(), 0.0);
    }
}
