use tracing::debug;

use crate::{
    config::PendulumConfig,
    error::PendulumResult,
    kinematics::{angular_velocity, try_max_height, RAD_TO_DEG},
};

/// Side the bob is currently swinging toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Toward negative rotation about the swing axis.
    #[default]
    Left,
    Right,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Result of a single fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Rotation to apply about the swing axis this step, degrees.
    pub rotation_delta_degrees: f32,
    /// Same rotation in radians.
    pub rotation_delta: f32,
    /// Signed angular velocity used for the step, rad/s.
    pub angular_velocity: f32,
    /// Height above rest the step was computed from.
    pub height: f32,
    pub direction: Direction,
    /// Whether the apex was reached and the direction reversed this step.
    pub flipped: bool,
}

impl StepOutcome {
    pub fn idle(height: f32, direction: Direction) -> Self {
        Self {
            rotation_delta_degrees: 0.0,
            rotation_delta: 0.0,
            angular_velocity: 0.0,
            height,
            direction,
            flipped: false,
        }
    }

    pub(crate) fn moving(
        angular_velocity: f32,
        dt: f32,
        height: f32,
        direction: Direction,
        flipped: bool,
    ) -> Self {
        let rotation_delta = angular_velocity * dt;
        Self {
            rotation_delta_degrees: rotation_delta * RAD_TO_DEG,
            rotation_delta,
            angular_velocity,
            height,
            direction,
            flipped,
        }
    }
}

/// Everything the pendulum remembers between fixed steps.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    pub length: f32,
    pub swing_width: f32,
    pub max_height: f32,
    /// Vertical position of the bob at rest, in host coordinates. Only meaningful
    /// to hosts that read the bob's height back each tick; [`crate::Pendulum`]
    /// tracks its own angle and leaves this at zero.
    pub init_height: f32,
    pub gravity: f32,
    pub direction: Direction,
    pub active: bool,
    pub start_delay: f32,
    /// Set once the apex has been reached on the current swing, cleared when the bob drops below it.
    pub at_apex: bool,
}

impl PendulumState {
    pub fn new(config: &PendulumConfig, init_height: f32) -> PendulumResult<Self> {
        config.validate()?;
        let max_height = try_max_height(config.length, config.swing_width)?;
        Ok(Self {
            length: config.length,
            swing_width: config.swing_width,
            max_height,
            init_height,
            gravity: config.gravity,
            direction: Direction::default(),
            active: false,
            start_delay: config.start_delay,
            at_apex: false,
        })
    }

    /// Returns `true` only on the call that actually activates.
    pub fn activate(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Height above rest of a bob whose host vertical position is `y`.
    ///
    /// For hosts that feed [`PendulumState::step`] from the rendered transform
    /// rather than driving a [`crate::Pendulum`].
    pub fn relative_height(&self, y: f32) -> f32 {
        y - self.init_height
    }

    /// Advance one step from a height read back from the host.
    pub fn step(&mut self, current_height: f32, dt: f32) -> StepOutcome {
        if !self.active {
            return StepOutcome::idle(current_height, self.direction);
        }

        let flipped = self.track_apex(current_height);
        let omega = angular_velocity(current_height, self.max_height, self.length, self.gravity)
            * self.direction.sign();

        StepOutcome::moving(omega, dt, current_height, self.direction, flipped)
    }

    fn track_apex(&mut self, current_height: f32) -> bool {
        if current_height < self.max_height {
            self.at_apex = false;
            return false;
        }
        if self.at_apex {
            return false;
        }
        self.at_apex = true;
        self.direction = self.direction.flipped();
        debug!(
            height = current_height,
            max_height = self.max_height,
            direction = ?self.direction,
            "apex reached"
        );
        true
    }
}
