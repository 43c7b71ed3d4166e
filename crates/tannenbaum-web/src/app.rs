//! Bevy application setup
//!
//! winit allows one event loop per page, so the app is booted once, on the
//! first mount, and stays alive across panels. Panels come and go as
//! windows inside it.

use bevy::prelude::*;
use bevy::window::ExitCondition;
use bevy::winit::{UpdateMode, WinitSettings};
use std::cell::RefCell;
use std::time::Duration;
use tannenbaum_scene::panel::MountedPanel;
use tannenbaum_scene::{PanelInbox, TreeScenePlugin};
use tracing::info;

thread_local! {
    static RUNTIME: RefCell<Option<PanelInbox>> = const { RefCell::new(None) };
}

/// Inbox of the running app, booting the app on first use
pub fn runtime() -> PanelInbox {
    RUNTIME.with(|runtime| {
        runtime
            .borrow_mut()
            .get_or_insert_with(|| {
                let inbox = PanelInbox::default();
                run(inbox.clone());
                inbox
            })
            .clone()
    })
}

fn run(inbox: PanelInbox) {
    info!("Starting tree renderer");
    App::new()
        .insert_resource(WinitSettings::default())
        .insert_resource(inbox)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            // Windows are created per mounted panel
            primary_window: None,
            exit_condition: ExitCondition::DontExit,
            ..default()
        }))
        .add_plugins(TreeScenePlugin)
        .add_systems(Update, adjust_update_mode)
        .run();
}

/// Redraw every frame while a panel is mounted, idle otherwise
fn adjust_update_mode(
    mounted: Option<Res<MountedPanel>>,
    mut winit_settings: ResMut<WinitSettings>,
    mut was_mounted: Local<bool>,
) {
    let is_mounted = mounted.is_some();
    if is_mounted == *was_mounted {
        return;
    }
    *was_mounted = is_mounted;

    if is_mounted {
        *winit_settings = WinitSettings::default();
    } else {
        winit_settings.focused_mode = UpdateMode::reactive_low_power(Duration::from_secs(1));
        winit_settings.unfocused_mode = UpdateMode::reactive_low_power(Duration::from_secs(1));
    }
}
