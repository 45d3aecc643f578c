use bevy::{prelude::*, time::fixed_timestep::FixedTime};

use crate::{
    components::{PendulumBody, SwingReadout},
    resources::ActivationTimer,
};

pub struct SwingPlugin;

impl Plugin for SwingPlugin {
    fn build(&self, app: &mut App) {
        app.add_state::<SwingState>()
            .add_system(activation_listen.in_set(OnUpdate(SwingState::Idle)))
            .add_system(swing.in_schedule(CoreSchedule::FixedUpdate));
    }
}

#[derive(States, PartialEq, Eq, Debug, Clone, Hash, Default)]
pub enum SwingState {
    #[default]
    Idle,
    Swinging,
}

fn activation_listen(
    time: Res<Time>,
    timer: Option<ResMut<ActivationTimer>>,
    mut query: Query<&mut PendulumBody>,
    mut swing_state: ResMut<NextState<SwingState>>,
) {
    let Some(mut timer) = timer else {
        return;
    };
    if timer.tick(time.delta()).just_finished() {
        for mut pendulum in query.iter_mut() {
            pendulum.on_activate();
        }
        info!("Swinging");
        swing_state.set(SwingState::Swinging);
    }
}

pub fn swing(
    fixed_time: Res<FixedTime>,
    mut query: Query<(&mut PendulumBody, &mut Transform, &mut SwingReadout)>,
) {
    let dt = fixed_time.period.as_secs_f32();
    for (mut pendulum, mut transform, mut readout) in query.iter_mut() {
        pendulum.on_fixed_step(dt);
        transform.rotation = Quat::from_rotation_z(pendulum.angle());
        readout.update(&pendulum);
    }
}
