use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::sprite::Anchor;
use bevy::window::WindowResolution;

use crate::simulation::physics::SimulationFault;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::NVec2;
use crate::visualization::plot::{draw_axes, DrawingSurface, PlotStream, CANVAS_SIZE};

/// Upper bound on samples pulled in one frame, so an unpaced run still renders
const MAX_SAMPLES_PER_FRAME: u32 = 4000;

/// Longest run of dots rasterized for one segment
const MAX_DOTS_PER_LINE: usize = 4 * CANVAS_SIZE as usize;

const SIDE: usize = CANVAS_SIZE as usize;
const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
const INK: [u8; 4] = [255, 255, 255, 255];
const LABEL_SIZE: f32 = 16.0;

/// Fixed-size RGBA raster; memory stays the same however long the run is
#[derive(Resource)]
struct Canvas {
    pixels: Vec<u8>,
    labels: Vec<(Vec2, String)>,
    dirty: bool,
}

impl Canvas {
    fn new() -> Self {
        Self {
            pixels: BACKGROUND.repeat(SIDE * SIDE),
            labels: Vec::new(),
            dirty: true,
        }
    }

    fn dot(&mut self, x: f64, y: f64) {
        let (x, y) = (x.round(), y.round());
        if x < 0.0 || y < 0.0 || x >= CANVAS_SIZE || y >= CANVAS_SIZE {
            return;
        }
        let i = (y as usize * SIDE + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&INK);
    }
}

// Canvas pixels (y down, origin top-left) -> world units (y up, origin centered)
fn to_world(p: NVec2) -> Vec2 {
    let half = (CANVAS_SIZE / 2.0) as f32;
    Vec2::new(p.x as f32 - half, half - p.y as f32)
}

impl DrawingSurface for Canvas {
    fn line(&mut self, from: NVec2, to: NVec2) {
        let delta = to - from;
        if !delta.x.is_finite() || !delta.y.is_finite() {
            return;
        }
        let dots = (delta.x.abs().max(delta.y.abs()).ceil() as usize).min(MAX_DOTS_PER_LINE);
        for i in 0..=dots {
            let t = if dots == 0 { 0.0 } else { i as f64 / dots as f64 };
            let p = from + delta * t;
            self.dot(p.x, p.y);
        }
        self.dirty = true;
    }

    fn text(&mut self, at: NVec2, label: &str) {
        self.labels.push((to_world(at), label.to_string()));
    }
}

/// GPU texture the canvas is copied into
#[derive(Resource)]
struct CanvasImage(Handle<Image>);

/// Trajectory being played back; the frame clock stands in for the pacer
#[derive(Resource)]
struct Playback {
    stream: PlotStream,
    delay_ms: u64,
    budget_ms: f64,
    finished: bool,
}

pub fn run_2d(scenario: Scenario, max_time: f64) -> Result<(), SimulationFault> {
    let trajectory = scenario.trajectory(max_time)?;
    log::info!(
        "run_2d: plotting {} for {} s, {} ms between samples",
        scenario.planet.name,
        max_time,
        scenario.settings.pacing_delay_ms()
    );

    let playback = Playback {
        stream: PlotStream::new(trajectory),
        delay_ms: scenario.settings.pacing_delay_ms(),
        budget_ms: 0.0,
        finished: false,
    };

    let window = Window {
        title: format!("Foucault pendulum on {}", scenario.planet.name),
        resolution: WindowResolution::new(CANVAS_SIZE as f32, CANVAS_SIZE as f32),
        resizable: false,
        ..Default::default()
    };

    App::new()
        .insert_resource(ClearColor(Color::BLACK))
        .insert_resource(Canvas::new())
        .insert_resource(playback)
        // env_logger already owns the `log` facade
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..Default::default()
                })
                .disable::<LogPlugin>(),
        )
        .add_systems(Startup, setup_canvas_system)
        .add_systems(Update, (advance_plot_system, sync_canvas_system).chain())
        .run();

    Ok(())
}

fn setup_canvas_system(mut commands: Commands, mut canvas: ResMut<Canvas>, mut images: ResMut<Assets<Image>>) {
    commands.spawn(Camera2dBundle::default());

    draw_axes(&mut *canvas);

    let size = Extent3d {
        width: SIDE as u32,
        height: SIDE as u32,
        depth_or_array_layers: 1,
    };
    let image = Image::new_fill(
        size,
        TextureDimension::D2,
        &BACKGROUND,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    let handle = images.add(image);

    commands.spawn(SpriteBundle {
        texture: handle.clone(),
        ..Default::default()
    });
    commands.insert_resource(CanvasImage(handle));

    for (at, label) in &canvas.labels {
        commands.spawn(Text2dBundle {
            text: Text::from_section(
                label.clone(),
                TextStyle {
                    font_size: LABEL_SIZE,
                    color: Color::WHITE,
                    ..Default::default()
                },
            ),
            text_anchor: Anchor::TopLeft,
            transform: Transform::from_xyz(at.x, at.y, 1.0),
            ..Default::default()
        });
    }
}

fn advance_plot_system(time: Res<Time>, mut playback: ResMut<Playback>, mut canvas: ResMut<Canvas>) {
    let playback = &mut *playback;
    if playback.finished {
        return;
    }

    let due = if playback.delay_ms == 0 {
        MAX_SAMPLES_PER_FRAME
    } else {
        let delay = playback.delay_ms as f64;
        playback.budget_ms += time.delta_seconds_f64() * 1000.0;
        let due = ((playback.budget_ms / delay).floor() as u32).min(MAX_SAMPLES_PER_FRAME);
        playback.budget_ms = (playback.budget_ms - due as f64 * delay).min(delay * MAX_SAMPLES_PER_FRAME as f64);
        due
    };

    for _ in 0..due {
        if playback.stream.step(&mut *canvas).is_none() {
            playback.finished = true;
            log::info!("run_2d: trajectory complete, {} segments", playback.stream.drawn());
            break;
        }
    }
}

fn sync_canvas_system(mut canvas: ResMut<Canvas>, target: Option<Res<CanvasImage>>, mut images: ResMut<Assets<Image>>) {
    let Some(target) = target else { return };
    if !canvas.dirty {
        return;
    }
    if let Some(image) = images.get_mut(&target.0) {
        image.data.copy_from_slice(&canvas.pixels);
        canvas.dirty = false;
    }
}
