use bevy::prelude::*;
use pendulum_core::{Direction, Pendulum, Phase};

/// Sits on the pivot; its rotation about Z is the swing angle.
#[derive(Component, Deref, DerefMut)]
pub struct PendulumBody(pub Pendulum);

#[derive(Component)]
pub struct Bob;

#[derive(Reflect, Component, Default)]
#[reflect(Component)]
pub struct SwingReadout {
    pub swinging: bool,
    pub swinging_left: bool,
    pub angle_degrees: f32,
    pub angular_velocity: f32,
    pub height: f32,
}

impl SwingReadout {
    pub fn update(&mut self, pendulum: &Pendulum) {
        self.swinging = pendulum.phase() == Phase::Swinging;
        self.swinging_left = pendulum.direction() == Direction::Left;
        self.angle_degrees = pendulum.angle().to_degrees();
        self.angular_velocity = pendulum.angular_velocity();
        self.height = pendulum.height();
    }
}
