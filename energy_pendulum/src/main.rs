mod components;
mod resources;
mod state;

use std::time::Duration;

use components::*;
use resources::*;
use state::*;

use bevy::{prelude::*, time::fixed_timestep::FixedTime};
use bevy_inspector_egui::quick::{ResourceInspectorPlugin, WorldInspectorPlugin};
use bevy_prototype_debug_lines::{DebugLines, DebugLinesPlugin};
use pendulum_core::Pendulum;

const PIVOT_HEIGHT: f32 = 1.0;
const BOB_RADIUS: f32 = 0.05;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugin(WorldInspectorPlugin::new())
        .insert_resource(ClearColor(Color::BLACK))
        .init_resource::<Config>()
        .add_plugin(ResourceInspectorPlugin::<Config>::default())
        .add_plugin(DebugLinesPlugin::default())
        .add_plugin(SwingPlugin)
        .add_startup_system(setup)
        .add_system(draw_arm)
        .register_type::<Config>()
        .register_type::<SwingReadout>()
        .run()
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut fixed_time: ResMut<FixedTime>,
    config: Res<Config>,
) {
    if config.fixed_timestep.is_finite() && config.fixed_timestep > 0.0 {
        fixed_time.period = Duration::from_secs_f32(config.fixed_timestep);
    } else {
        warn!(
            "Ignoring fixed_timestep {}, stepping every {:?}",
            config.fixed_timestep, fixed_time.period
        );
    }

    let focus = Vec3::new(0.0, PIVOT_HEIGHT - config.length * 0.5, 0.0);
    commands.spawn(Camera3dBundle {
        transform: Transform::from_translation(focus + Vec3::Z * (config.length * 4.0).max(1.0))
            .looking_at(focus, Vec3::Y),
        ..default()
    });

    commands.spawn(DirectionalLightBundle {
        transform: Transform::from_xyz(5.0, 5.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    let pendulum = match Pendulum::on_init(&config.pendulum()) {
        Ok(pendulum) => pendulum,
        Err(e) => {
            error!("Pendulum not spawned: {}", e);
            return;
        }
    };

    info!("Pendulum released in {:.1}s", pendulum.start_delay());
    commands.insert_resource(ActivationTimer::new(pendulum.start_delay()));

    commands
        .spawn((
            SpatialBundle::from_transform(Transform::from_xyz(0.0, PIVOT_HEIGHT, 0.0)),
            PendulumBody(pendulum),
            SwingReadout::default(),
            Name::new("Pendulum"),
        ))
        .with_children(|parent| {
            parent.spawn((
                PbrBundle {
                    mesh: meshes.add(Mesh::from(shape::UVSphere {
                        radius: BOB_RADIUS,
                        sectors: 32,
                        stacks: 16,
                    })),
                    material: materials.add(StandardMaterial {
                        base_color: Color::RED,
                        ..default()
                    }),
                    transform: Transform::from_xyz(0.0, -config.length, 0.0),
                    ..default()
                },
                Bob,
                Name::new("Bob"),
            ));
        });
}

fn draw_arm(
    mut lines: ResMut<DebugLines>,
    pivots: Query<(&GlobalTransform, &Children), With<PendulumBody>>,
    bobs: Query<&GlobalTransform, With<Bob>>,
    mut last_pos: Local<Option<Vec3>>,
) {
    for (pivot, children) in pivots.iter() {
        for child in children.iter() {
            let Ok(bob) = bobs.get(*child) else {
                continue;
            };
            let pos = bob.translation();
            lines.line_colored(pivot.translation(), pos, 0.0, Color::GRAY);

            // Trail of the bob
            if let Some(last) = *last_pos {
                lines.line_colored(last, pos, 1.5, Color::RED);
            }
            *last_pos = Some(pos);
        }
    }
}
