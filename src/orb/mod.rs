pub mod components;
pub mod events;
pub mod material;
pub mod resources;
pub mod systems;

use crate::core::state::VisualState;
use crate::orb::events::*;
use crate::orb::material::OrbParticleMaterial;
use crate::orb::resources::*;
use crate::orb::systems::*;
use bevy::prelude::*;

pub struct OrbPlugin;

impl Plugin for OrbPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            MaterialPlugin::<OrbParticleMaterial>::default(),
            OrbLifecyclePlugin,
        ));
    }
}

/// Mounting, animation and teardown without the render side, so it also runs headless.
pub struct OrbLifecyclePlugin;

impl Plugin for OrbLifecyclePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ReloadConfigEvent>()
            .add_message::<ToggleMountEvent>()
            .init_resource::<OrbSettings>()
            .add_systems(OnEnter(VisualState::Mounted), mount_orb)
            .add_systems(OnExit(VisualState::Mounted), unmount_orb)
            .add_systems(
                Update,
                (keyboard_shortcuts, handle_toggle_mount, handle_config_reload).chain(),
            )
            .add_systems(
                Update,
                mount_after_resize.run_if(
                    in_state(VisualState::Mounted).and(not(resource_exists::<OrbRenderContext>)),
                ),
            )
            .add_systems(
                Update,
                (
                    rebuild_on_settings_change,
                    (
                        animate_particle_field,
                        update_shooting_star,
                        watch_container_resize,
                    ),
                )
                    .chain()
                    .after(handle_config_reload)
                    .distributive_run_if(resource_exists::<OrbRenderContext>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orb::components::*;
    use bevy::asset::AssetPlugin;
    use bevy::mesh::VertexAttributeValues;
    use bevy::state::app::StatesPlugin;
    use bevy::time::TimeUpdateStrategy;
    use bevy::window::{PrimaryWindow, WindowResized, WindowResolution};
    use orbgen::prelude::*;
    use std::time::Duration;

    const PARTICLES: usize = 500;
    const DESKTOP: Option<(u32, u32)> = Some((1500, 900));

    fn settings(variant: Variant) -> OrbSettings {
        OrbSettings(OrbConfig {
            particle_count: PARTICLES,
            seed: Some(7),
            ..OrbConfig::for_variant(variant)
        })
    }

    /// `window` is the physical size of the primary window, if there is one.
    fn headless_app(settings: OrbSettings, window: Option<(u32, u32)>) -> App {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, AssetPlugin::default(), StatesPlugin))
            .init_asset::<Mesh>()
            .init_asset::<OrbParticleMaterial>()
            .init_resource::<ButtonInput<KeyCode>>()
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
            .add_message::<WindowResized>()
            .init_state::<VisualState>()
            .insert_resource(settings)
            .add_plugins(OrbLifecyclePlugin);
        if let Some((width, height)) = window {
            app.world_mut().spawn((
                Window {
                    resolution: WindowResolution::new(width, height),
                    ..default()
                },
                PrimaryWindow,
            ));
        }
        app
    }

    fn orb_entities(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<(), With<OrbEntity>>()
            .iter(app.world())
            .count()
    }

    fn mesh_count(app: &App) -> usize {
        app.world().resource::<Assets<Mesh>>().len()
    }

    fn material_count(app: &App) -> usize {
        app.world().resource::<Assets<OrbParticleMaterial>>().len()
    }

    fn set_state(app: &mut App, state: VisualState) {
        app.world_mut()
            .resource_mut::<NextState<VisualState>>()
            .set(state);
        app.update();
    }

    #[test]
    fn mounting_builds_camera_field_and_star() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();

        let context = app.world().resource::<OrbRenderContext>();
        assert_eq!(context.field.len(), PARTICLES);
        assert!(context.stars.is_some());
        assert_eq!(
            context.surface,
            ContainerRect::for_window(1500.0, 900.0, 1.0)
        );
        assert_eq!(orb_entities(&mut app), 3);
        assert_eq!(mesh_count(&app), 2);
        assert_eq!(material_count(&app), 2);
    }

    #[test]
    fn swarm_has_no_shooting_star() {
        let mut app = headless_app(settings(Variant::Swarm), DESKTOP);
        app.update();

        let context = app.world().resource::<OrbRenderContext>();
        assert!(context.stars.is_none());
        assert!(context.star.is_none());
        assert!(context.spin.is_static());
        assert_eq!(orb_entities(&mut app), 2);
        assert_eq!(mesh_count(&app), 1);
    }

    #[test]
    fn no_window_means_no_orb() {
        let mut app = headless_app(settings(Variant::Orb), None);
        app.update();
        app.update();

        assert!(app.world().get_resource::<OrbRenderContext>().is_none());
        assert_eq!(orb_entities(&mut app), 0);
        assert_eq!(mesh_count(&app), 0);
    }

    #[test]
    fn zero_sized_window_mounts_once_it_gets_an_area() {
        let mut app = headless_app(settings(Variant::Orb), Some((0, 0)));
        app.update();
        app.update();
        assert!(app.world().get_resource::<OrbRenderContext>().is_none());
        assert_eq!(orb_entities(&mut app), 0);

        // Still nothing to draw into
        resize_primary_window(&mut app, 0.0, 0.0);
        assert!(app.world().get_resource::<OrbRenderContext>().is_none());

        resize_primary_window(&mut app, 1200.0, 800.0);
        app.update();

        let context = app.world().resource::<OrbRenderContext>();
        assert_eq!(
            context.surface,
            ContainerRect::for_window(1200.0, 800.0, 1.0)
        );
        assert_eq!(orb_entities(&mut app), 3);
        assert_eq!(mesh_count(&app), 2);

        // A later resize must not mount a second orb
        resize_primary_window(&mut app, 1000.0, 700.0);
        assert_eq!(orb_entities(&mut app), 3);
        assert_eq!(mesh_count(&app), 2);
    }

    #[test]
    fn shooting_star_shows_flies_and_hides() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();
        let star = app
            .world()
            .resource::<OrbRenderContext>()
            .star
            .as_ref()
            .unwrap()
            .entity;
        assert_eq!(app.world().get::<Visibility>(star), Some(&Visibility::Hidden));

        // 100 ms per frame: due after 30 s, gone by 45 s at the latest
        let mut flight = Vec::new();
        let mut hidden_again = false;
        for _ in 0..600 {
            app.update();
            let visible = app.world().get::<Visibility>(star) == Some(&Visibility::Visible);
            if visible {
                flight.push(app.world().get::<Transform>(star).unwrap().translation);
            } else if !flight.is_empty() {
                hidden_again = true;
                break;
            }
        }

        assert!(flight.len() >= 2, "star never flew");
        assert!(hidden_again, "star never hid");
        // Spawned on the far sphere, already moved by one frame
        assert!((flight[0].length() - 25.0).abs() < 1.0, "{}", flight[0]);
        assert!(flight[1].length() < flight[0].length());
        assert!(flight.windows(2).all(|pair| pair[0] != pair[1]));

        let context = app.world().resource::<OrbRenderContext>();
        assert!(context.stars.as_ref().unwrap().is_idle());
    }

    #[test]
    fn animation_writes_displaced_positions_into_the_mesh() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        for _ in 0..4 {
            app.update();
        }

        let context = app.world().resource::<OrbRenderContext>();
        assert!(context.frames >= 3);
        let mesh = app
            .world()
            .resource::<Assets<Mesh>>()
            .get(&context.particles.mesh)
            .unwrap();
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("particle mesh has no positions");
        };

        let expected = context.field.current_point(1).to_array();
        assert_eq!(positions[4], expected);
        assert_ne!(expected, context.field.base_point(1).to_array());

        let transform = app
            .world()
            .get::<Transform>(context.particles.entity)
            .unwrap();
        assert_ne!(transform.rotation, Quat::IDENTITY);
    }

    fn resize_primary_window(app: &mut App, width: f32, height: f32) {
        let window = app
            .world_mut()
            .query_filtered::<Entity, With<PrimaryWindow>>()
            .single(app.world())
            .unwrap();
        app.world_mut().write_message(WindowResized {
            window,
            width,
            height,
        });
        app.update();
    }

    #[test]
    fn resize_updates_surface_and_aspect() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();
        resize_primary_window(&mut app, 600.0, 800.0);

        let expected = ContainerRect::for_window(600.0, 800.0, 1.0);
        let context = app.world().resource::<OrbRenderContext>();
        assert_eq!(context.surface, expected);

        let camera = context.camera;
        let mut cameras = app.world_mut().query::<(&Camera, &Projection)>();
        let (camera, projection) = cameras.get(app.world(), camera).unwrap();
        let viewport = camera.viewport.as_ref().unwrap();
        assert_eq!(viewport.physical_size, UVec2::new(expected.width, expected.height));
        let Projection::Perspective(perspective) = projection else {
            panic!("orb camera is not perspective");
        };
        assert!((perspective.aspect_ratio - expected.aspect_ratio().unwrap()).abs() < 1e-6);
    }

    #[test]
    fn unmount_releases_everything() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();
        set_state(&mut app, VisualState::Unmounted);

        assert!(app.world().get_resource::<OrbRenderContext>().is_none());
        assert_eq!(orb_entities(&mut app), 0);
        assert_eq!(mesh_count(&app), 0);
        assert_eq!(material_count(&app), 0);

        // Nothing keeps running once unmounted
        app.update();
        assert!(app.world().get_resource::<OrbRenderContext>().is_none());
    }

    #[test]
    fn repeated_mount_cycles_do_not_leak() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();

        for _ in 0..5 {
            set_state(&mut app, VisualState::Unmounted);
            set_state(&mut app, VisualState::Mounted);
            assert_eq!(orb_entities(&mut app), 3);
            assert_eq!(mesh_count(&app), 2);
            assert_eq!(material_count(&app), 2);
        }
    }

    #[test]
    fn changed_settings_rebuild_the_orb() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();
        let old_camera = app.world().resource::<OrbRenderContext>().camera;

        app.world_mut().resource_mut::<OrbSettings>().0 = settings(Variant::Swarm).0;
        app.update();

        let context = app.world().resource::<OrbRenderContext>();
        assert_eq!(context.config.variant, Variant::Swarm);
        assert_ne!(context.camera, old_camera);
        assert!(app.world().get_entity(old_camera).is_err());
        assert_eq!(orb_entities(&mut app), 2);
        assert_eq!(mesh_count(&app), 1);
    }

    #[test]
    fn m_key_toggles_mounting() {
        let mut app = headless_app(settings(Variant::Orb), DESKTOP);
        app.update();

        let press_m = |app: &mut App| {
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .press(KeyCode::KeyM);
            app.update();
            app.world_mut()
                .resource_mut::<ButtonInput<KeyCode>>()
                .reset_all();
            app.update();
        };

        press_m(&mut app);
        assert_eq!(
            *app.world().resource::<State<VisualState>>().get(),
            VisualState::Unmounted
        );
        assert!(app.world().get_resource::<OrbRenderContext>().is_none());

        press_m(&mut app);
        assert!(app.world().get_resource::<OrbRenderContext>().is_some());
    }
}
