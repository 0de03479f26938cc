mod core;
mod helpers;
mod orb;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::state::VisualState;
use crate::orb::OrbPlugin;
use crate::ui::UIPlugin;

pub use crate::core::camera::components::PAGE_BACKGROUND;

use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct OrbAppPlugin;

impl Plugin for OrbAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<VisualState>()
            .add_plugins((CameraPlugin, OrbPlugin, UIPlugin));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
