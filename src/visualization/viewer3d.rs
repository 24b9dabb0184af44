use bevy::prelude::*;
use bevy::math::primitives::Sphere;

use crate::configuration::config::ViewerConfig;
use crate::naming::resolver::BodyStyle;
use crate::trajectory::series::NVec3;
use crate::trajectory::store::TrajectoryStore;
use crate::visualization::frame::{render_frame, PlaybackMode};

/// Component tagging each marker sphere with its body index into the store
#[derive(Component)]
struct BodyIndex3(pub usize);

/// Component tagging the day counter text in the corner
#[derive(Component)]
struct DayCounter;

/// World-space → screen-space scaling factor for positions
const SCALE3D: f32 = 50.0;

/// Marker sphere radius in world space before scaling
const MARKER_RADIUS: f32 = 0.02;

/// Camera distance as a multiple of the axis limit
const CAMERA_BACKOFF: f32 = 3.0;

/// Immutable scene data the render systems read each frame
#[derive(Resource)]
pub struct ViewerScene {
    pub store: TrajectoryStore,
    pub styles: Vec<BodyStyle>,
    pub config: ViewerConfig,
}

/// Current playback position; the only mutable state of the viewer
#[derive(Resource)]
struct Playback {
    mode: PlaybackMode,
    day: usize,
    clock: f64, // fractional days elapsed in animate mode
}

/// Entrypoint: hand a fully-loaded run to Bevy and block until the window closes
pub fn run_3d(store: TrajectoryStore, styles: Vec<BodyStyle>, config: ViewerConfig) {
    println!(
        "run_3d: starting Bevy 3D viewer with {} bodies over {} days",
        store.header().n_bodies,
        store.header().n_days
    );

    let mode = config.playback_mode();
    let start_day = match mode {
        PlaybackMode::Static => store.header().n_days,
        PlaybackMode::Animating => 0,
    };

    App::new()
        .insert_resource(ViewerScene {
            store,
            styles,
            config,
        })
        .insert_resource(Playback {
            mode,
            day: start_day,
            clock: 0.0,
        })
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (advance_playback, draw_frame))
        .run();
}

/// Startup system: spawn camera, counter text, and one marker per body
fn setup_3d(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    scene: Res<ViewerScene>,
) {
    // Camera on a sphere around the origin, per the configured point-of-view
    let distance = scene.config.axis_limit as f32 * SCALE3D * CAMERA_BACKOFF;
    let elevation = (scene.config.camera.elevation as f32).to_radians();
    let azimuth = (scene.config.camera.azimuth as f32).to_radians();
    let eye = Vec3::new(
        distance * elevation.cos() * azimuth.cos(),
        distance * elevation.cos() * azimuth.sin(),
        distance * elevation.sin(),
    );

    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)), // pure black
            ..Default::default()
        },
        transform: Transform::from_translation(eye).looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    // Day counter, top-left, white on black
    commands.spawn((
        TextBundle::from_section(
            "t = 0 d",
            TextStyle {
                font_size: 24.0,
                color: Color::WHITE,
                ..Default::default()
            },
        )
        .with_style(Style {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..Default::default()
        }),
        DayCounter,
    ));

    // One marker sphere per body, colored by its resolved style
    for (i, style) in scene.styles.iter().enumerate() {
        let [r, g, b] = style.color;

        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(MARKER_RADIUS * SCALE3D).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(r, g, b),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(Vec3::ZERO),
                visibility: Visibility::Hidden, // nothing to show before day 1
                ..Default::default()
            },
            BodyIndex3(i),
        ));
    }
}

/// Advance the day index under Bevy's clock; static mode never moves
fn advance_playback(scene: Res<ViewerScene>, time: Res<Time>, mut playback: ResMut<Playback>) {
    if playback.mode != PlaybackMode::Animating {
        return;
    }
    let n_days = scene.store.header().n_days;
    playback.clock += time.delta_seconds_f64() * scene.config.days_per_second;
    playback.day = (playback.clock as usize).min(n_days);
}

/// Draw the current frame: trails as line strips, markers on the newest
/// point, counter text updated in place
fn draw_frame(
    scene: Res<ViewerScene>,
    playback: Res<Playback>,
    mut gizmos: Gizmos,
    mut markers: Query<(&BodyIndex3, &mut Transform, &mut Visibility)>,
    mut counter: Query<&mut Text, With<DayCounter>>,
) {
    let frame = render_frame(&scene.store, &scene.styles, playback.day);

    for mut text in &mut counter {
        text.sections[0].value.clone_from(&frame.counter);
    }

    for body in &frame.bodies {
        if body.trail.len() < 2 {
            continue;
        }
        let [r, g, b] = body.color;
        gizmos.linestrip(body.trail.iter().map(to_screen), Color::srgb(r, g, b));
    }

    for (BodyIndex3(i), mut transform, mut visibility) in &mut markers {
        match frame.bodies.get(*i).and_then(|b| b.marker) {
            Some(point) => {
                transform.translation = to_screen(&point);
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}

fn to_screen(p: &NVec3) -> Vec3 {
    Vec3::new(
        p.x as f32 * SCALE3D,
        p.y as f32 * SCALE3D,
        p.z as f32 * SCALE3D,
    )
}
