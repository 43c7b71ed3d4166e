//! Tannenbaum Scene - The rotating tree as a Bevy plugin
//!
//! Mount, resize and unmount requests arrive through [`panel::PanelInbox`].
//! A mount builds the window, camera, lights and tree group; every frame
//! after that spins the tree until the panel is unmounted.

pub mod camera;
pub mod panel;
pub mod scene;
pub mod tree;

use bevy::prelude::*;

/// Plugin that runs the tree panel inside a Bevy app
pub struct TreeScenePlugin;

impl Plugin for TreeScenePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<panel::PanelInbox>().add_systems(
            Update,
            (panel::apply_panel_commands, tree::spin_tree).chain(),
        );
    }
}

// Re-export commonly used types
pub use panel::{MountPanel, PanelCommand, PanelInbox};
