pub(crate) mod components;
mod systems;

use crate::core::camera::components::*;
use crate::core::camera::systems::*;
use bevy::prelude::*;

/// Page cameras: one clearing the background below the orb, one drawing the UI above it.
pub(crate) struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PageBackgroundCamera>()
            .register_type::<PageOverlayCamera>()
            .register_type::<OrbCamera>()
            .add_systems(Startup, spawn_page_cameras);
    }
}
