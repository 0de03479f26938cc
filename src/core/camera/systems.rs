use crate::core::camera::components::*;
use bevy::camera::ClearColorConfig;
use bevy::log::info;
use bevy::prelude::{Camera, Camera2d, Commands, default};
use bevy::ui::IsDefaultUiCamera;

pub fn spawn_page_cameras(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            order: BACKGROUND_CAMERA_ORDER,
            clear_color: ClearColorConfig::Custom(PAGE_BACKGROUND),
            ..default()
        },
        PageBackgroundCamera,
    ));

    // Draws nothing but the UI, on top of whatever the orb rendered
    commands.spawn((
        Camera2d,
        Camera {
            order: OVERLAY_CAMERA_ORDER,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
        PageOverlayCamera,
    ));

    info!("Page cameras spawned");
}
