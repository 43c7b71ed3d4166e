//! Panel commands from the host page, and the systems that act on them
//!
//! The host (DOM side) never touches the ECS world directly. It posts
//! [`PanelCommand`]s into the shared [`PanelInbox`]; each frame the inbox is
//! drained and every command is applied in the order it was posted, before
//! the tree spins.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tannenbaum_core::config::DEFAULT_BACKGROUND;
use tannenbaum_core::{PanelSize, Spin, TreeConfig, TreeLayout};
use tracing::{debug, info, warn};

use crate::camera::{apply_aspect_ratio, camera_bundle, MainCamera};
use crate::scene::{ambient_light, spawn_lights, to_color};
use crate::tree::spawn_tree;

/// Requests from the host page
#[derive(Debug, Clone)]
pub enum PanelCommand {
    Mount(MountPanel),
    Resize(PanelSize),
    Unmount,
}

/// Build the scene on the canvas with this element id
#[derive(Debug, Clone)]
pub struct MountPanel {
    pub canvas_id: String,
    pub size: PanelSize,
    pub config: TreeConfig,
}

/// Queue shared between the host page and the ECS world
#[derive(Resource, Clone, Default)]
pub struct PanelInbox {
    queue: Arc<Mutex<VecDeque<PanelCommand>>>,
}

impl PanelInbox {
    pub fn post(&self, command: PanelCommand) {
        match self.queue.lock() {
            Ok(mut queue) => queue.push_back(command),
            Err(_) => warn!("Panel inbox poisoned, dropping command"),
        }
    }

    fn drain(&self) -> Vec<PanelCommand> {
        self.queue
            .try_lock()
            .map(|mut queue| queue.drain(..).collect())
            .unwrap_or_default()
    }
}

/// Everything spawned for the mounted panel carries this; teardown despawns
/// exactly these entities (and, recursively, their children).
#[derive(Component, Debug, Clone, Copy)]
pub struct PanelRoot;

/// Marker for the window bound to the panel's canvas
#[derive(Component)]
pub struct PanelWindow;

/// Present while a panel is mounted
#[derive(Resource, Debug, Clone)]
pub struct MountedPanel {
    pub canvas_id: String,
    pub size: PanelSize,
    pub seed: u64,
}

/// Apply queued host commands strictly in the order they were posted.
///
/// Each command runs to completion, deferred spawns and despawns included,
/// before the next one, so a mount and unmount posted within one frame
/// leave nothing behind.
pub fn apply_panel_commands(world: &mut World) {
    let commands = match world.get_resource::<PanelInbox>() {
        Some(inbox) => inbox.drain(),
        None => return,
    };

    for command in commands {
        let applied = match command {
            PanelCommand::Mount(mount) => world
                .run_system_cached_with(assemble_scene, mount)
                .map_err(|e| e.to_string()),
            PanelCommand::Resize(size) => world
                .run_system_cached_with(respond_to_resize, size)
                .map_err(|e| e.to_string()),
            PanelCommand::Unmount => world
                .run_system_cached(tear_down_panel)
                .map_err(|e| e.to_string()),
        };
        if let Err(e) = applied {
            warn!(error = %e, "Panel command failed");
        }
    }
}

/// Scene Assembler: window, camera, lights and tree for a new panel
pub fn assemble_scene(
    In(mount): In<MountPanel>,
    mut commands: Commands,
    mounted: Option<Res<MountedPanel>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if mounted.is_some() {
        warn!(canvas = %mount.canvas_id, "A panel is already mounted, ignoring mount");
        return;
    }

    let config = &mount.config;
    let background = match config.background_color() {
        Ok(rgb) => to_color(rgb),
        Err(e) => {
            warn!(error = %e, "Bad background color, using default");
            to_color(DEFAULT_BACKGROUND)
        }
    };
    let seed = config.seed_or_random();
    if config.seed.is_none() {
        // Visible at the default log level so the layout can be reproduced
        warn!(seed, "No seed given, ornaments placed with a random seed");
    }
    let layout = TreeLayout::generate(config.ornament_count, seed);

    let (width, height) = mount.size.surface_size();
    let mut window = Window {
        title: "3D Christmas Tree".to_string(),
        canvas: Some(format!("#{}", mount.canvas_id)),
        fit_canvas_to_parent: false,
        prevent_default_event_handling: false,
        ..default()
    };
    window.resolution.set(width, height);
    commands.spawn((window, PrimaryWindow, PanelWindow, PanelRoot));

    commands.spawn((
        camera_bundle(&config.camera(), mount.size, background, ambient_light()),
        PanelRoot,
    ));
    spawn_lights(&mut commands, PanelRoot);
    spawn_tree(
        &mut commands,
        &mut meshes,
        &mut materials,
        &layout,
        Spin::new(config.rotation_step),
        PanelRoot,
    );

    info!(
        canvas = %mount.canvas_id,
        width = mount.size.width,
        height = mount.size.height,
        seed,
        ornaments = layout.ornament_count(),
        "Tree scene assembled"
    );
    commands.insert_resource(MountedPanel {
        canvas_id: mount.canvas_id,
        size: mount.size,
        seed,
    });
}

/// Resize Responder: camera aspect and surface size follow the panel
pub fn respond_to_resize(
    In(size): In<PanelSize>,
    mounted: Option<ResMut<MountedPanel>>,
    mut cameras: Query<&mut Projection, With<MainCamera>>,
    mut windows: Query<&mut Window, With<PanelWindow>>,
) {
    let Some(mut mounted) = mounted else {
        debug!("Resize with no mounted panel, ignoring");
        return;
    };

    for mut projection in &mut cameras {
        apply_aspect_ratio(&mut projection, size);
    }

    let (width, height) = size.surface_size();
    for mut window in &mut windows {
        window.resolution.set(width, height);
    }

    mounted.size = size;
    debug!(
        width = size.width,
        height = size.height,
        aspect = size.aspect_ratio(),
        "Panel resized"
    );
}

/// Teardown: despawn everything the panel owns. Repeated unmounts are no-ops.
pub fn tear_down_panel(
    mut commands: Commands,
    mounted: Option<Res<MountedPanel>>,
    owned: Query<Entity, With<PanelRoot>>,
) {
    let Some(mounted) = mounted else {
        debug!("Unmount with no mounted panel, nothing to do");
        return;
    };

    let mut despawned = 0;
    for entity in &owned {
        commands.entity(entity).despawn();
        despawned += 1;
    }
    commands.remove_resource::<MountedPanel>();

    info!(canvas = %mounted.canvas_id, entities = despawned, "Tree panel torn down");
}
