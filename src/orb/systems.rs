use crate::core::camera::components::{ORB_CAMERA_ORDER, OrbCamera};
use crate::core::state::VisualState;
use crate::helpers::mesh::sprite_mesh;
use crate::orb::components::*;
use crate::orb::events::*;
use crate::orb::material::OrbParticleMaterial;
use crate::orb::resources::*;
use bevy::camera::visibility::NoFrustumCulling;
use bevy::camera::{ClearColorConfig, Viewport};
use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};
use orbgen::config::CONFIG_FILE;
use orbgen::constants::{CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_NEAR};
use orbgen::mesh_data::{SpriteMeshData, write_sprite_centers};
use orbgen::prelude::*;
use orbgen::tools::rng_for;

pub fn mount_orb(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OrbParticleMaterial>>,
    settings: Res<OrbSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let Ok(window) = windows.single() else {
        warn!("No primary window, orb not mounted");
        return;
    };
    let surface = ContainerRect::for_window(window.width(), window.height(), window.scale_factor());
    if surface.is_empty() {
        warn!("Orb container has no area, orb not mounted");
        return;
    }

    let context = spawn_orb(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings,
        surface,
        time.elapsed_secs(),
    );
    info!(
        "Orb mounted: {:?} variant, {} particles, {}x{} surface",
        settings.variant,
        context.field.len(),
        surface.width,
        surface.height
    );
    commands.insert_resource(context);
}

/// Finishes a mount that found no area to render into, once the window gets one.
pub fn mount_after_resize(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OrbParticleMaterial>>,
    mut resized: MessageReader<WindowResized>,
    settings: Res<OrbSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let Some((message, window)) = resized
        .read()
        .filter_map(|message| windows.get(message.window).ok().map(|window| (message, window)))
        .last()
    else {
        return;
    };
    let surface = ContainerRect::for_window(message.width, message.height, window.scale_factor());
    if surface.is_empty() {
        return;
    }

    let context = spawn_orb(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings,
        surface,
        time.elapsed_secs(),
    );
    info!(
        "Orb mounted after resize: {}x{} surface",
        surface.width, surface.height
    );
    commands.insert_resource(context);
}

pub fn unmount_orb(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OrbParticleMaterial>>,
    context: Option<Res<OrbRenderContext>>,
) {
    let Some(context) = context else {
        return;
    };
    despawn_orb(&mut commands, &mut meshes, &mut materials, &context);
    commands.remove_resource::<OrbRenderContext>();
    info!("Orb unmounted after {} frames", context.frames);
}

/// A new config never patches the running orb; it replaces it.
pub fn rebuild_on_settings_change(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<OrbParticleMaterial>>,
    settings: Res<OrbSettings>,
    context: Res<OrbRenderContext>,
    time: Res<Time>,
) {
    if !settings.is_changed() || context.config == settings.0 {
        return;
    }

    info!("Orb settings changed, rebuilding");
    despawn_orb(&mut commands, &mut meshes, &mut materials, &context);
    let rebuilt = spawn_orb(
        &mut commands,
        &mut meshes,
        &mut materials,
        &settings,
        context.surface,
        time.elapsed_secs(),
    );
    commands.insert_resource(rebuilt);
}

pub fn animate_particle_field(
    time: Res<Time>,
    mut context: ResMut<OrbRenderContext>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut fields: Query<&mut Transform, With<ParticleFieldMesh>>,
) {
    let context = &mut *context;
    let elapsed = context.elapsed(&time);
    context.field.animate(elapsed, &context.oscillation);

    if let Some(mesh) = meshes.get_mut(&context.particles.mesh) {
        if let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
        {
            write_sprite_centers(positions, context.field.current_points());
        }
    }

    let rotation = context.spin.advance();
    if let Ok(mut transform) = fields.get_mut(context.particles.entity) {
        transform.rotation = rotation;
    }
    context.frames += 1;
}

pub fn update_shooting_star(
    time: Res<Time>,
    mut context: ResMut<OrbRenderContext>,
    mut stars: Query<(&mut Transform, &mut Visibility), With<ShootingStarMesh>>,
) {
    let context = &mut *context;
    let elapsed = context.elapsed(&time);
    let (Some(state), Some(visual)) = (context.stars.as_mut(), context.star.as_ref()) else {
        return;
    };

    let step = state.step(elapsed, time.delta_secs(), &mut context.rng);
    let Ok((mut transform, mut visibility)) = stars.get_mut(visual.entity) else {
        return;
    };
    if let Some(star) = state.star() {
        transform.translation = star.position;
    }
    visibility.set_if_neq(if step.is_visible() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    });
}

pub fn watch_container_resize(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut context: ResMut<OrbRenderContext>,
    mut cameras: Query<(&mut Camera, &mut Projection), With<OrbCamera>>,
) {
    for message in resized.read() {
        let Ok(window) = windows.get(message.window) else {
            continue;
        };
        let surface = ContainerRect::for_window(message.width, message.height, window.scale_factor());
        let Some(aspect_ratio) = surface.aspect_ratio() else {
            debug!("Ignoring resize to an empty container");
            continue;
        };

        let Ok((mut camera, mut projection)) = cameras.get_mut(context.camera) else {
            continue;
        };
        camera.viewport = Some(viewport_for(surface));
        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.aspect_ratio = aspect_ratio;
        }
        context.surface = surface;
        debug!("Orb surface resized to {}x{}", surface.width, surface.height);
    }
}

pub fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    mut toggle_events: MessageWriter<ToggleMountEvent>,
    mut reload_events: MessageWriter<ReloadConfigEvent>,
) {
    if keys.just_pressed(KeyCode::KeyM) {
        toggle_events.write(ToggleMountEvent);
    }
    if keys.just_pressed(KeyCode::KeyR) {
        reload_events.write(ReloadConfigEvent);
    }
}

pub fn handle_toggle_mount(
    mut events: MessageReader<ToggleMountEvent>,
    state: Res<State<VisualState>>,
    mut next_state: ResMut<NextState<VisualState>>,
) {
    // Two toggles in one frame cancel out
    if events.read().count() % 2 == 0 {
        return;
    }
    next_state.set(match state.get() {
        VisualState::Mounted => VisualState::Unmounted,
        VisualState::Unmounted => VisualState::Mounted,
    });
}

pub fn handle_config_reload(
    mut events: MessageReader<ReloadConfigEvent>,
    mut settings: ResMut<OrbSettings>,
) {
    if events.read().count() == 0 {
        return;
    }
    let config = orbgen::load_or_default(CONFIG_FILE);
    if settings.set_if_neq(OrbSettings(config)) {
        info!("Config reloaded from {CONFIG_FILE}");
    } else {
        info!("Config unchanged");
    }
}

fn spawn_orb(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<OrbParticleMaterial>,
    config: &OrbConfig,
    surface: ContainerRect,
    now: f32,
) -> OrbRenderContext {
    let mut rng = rng_for(config.seed);
    let field = ParticleField::generate(config.particle_count, config.orb_radius, &mut rng);
    let distance = camera_distance(config.orb_radius, config.camera_distance_factor);

    let camera = commands
        .spawn((
            Camera3d::default(),
            Camera {
                order: ORB_CAMERA_ORDER,
                clear_color: ClearColorConfig::None,
                viewport: Some(viewport_for(surface)),
                ..default()
            },
            Projection::Perspective(PerspectiveProjection {
                fov: CAMERA_FOV_DEGREES.to_radians(),
                aspect_ratio: surface.aspect_ratio().unwrap_or(1.0),
                near: CAMERA_NEAR,
                far: CAMERA_FAR,
                ..default()
            }),
            // Keep the configured colours as they are
            Tonemapping::None,
            Transform::from_xyz(0.0, 0.0, distance).looking_at(Vec3::ZERO, Vec3::Y),
            OrbCamera,
            OrbEntity,
        ))
        .id();

    let particles = spawn_visual(
        commands,
        meshes,
        materials,
        SpriteMeshData::from_points(field.current_points()),
        OrbParticleMaterial::new(
            config.particle_color,
            config.particle_opacity,
            config.particle_size,
        ),
        // Displacement and the sprite quads reach past the bounds computed at spawn
        (ParticleFieldMesh, NoFrustumCulling, Visibility::Visible),
    );

    let star_config = config.shooting_star;
    let star = config.shooting_stars_enabled().then(|| {
        spawn_visual(
            commands,
            meshes,
            materials,
            SpriteMeshData::single(),
            OrbParticleMaterial::new(star_config.color, star_config.opacity, star_config.size),
            (ShootingStarMesh, Visibility::Hidden),
        )
    });

    let spin = match config.variant {
        Variant::Orb => config.spin,
        Variant::Swarm => SpinConfig { x: 0.0, y: 0.0 },
    };

    OrbRenderContext {
        config: config.clone(),
        oscillation: Oscillation::from_config(config),
        spin: FieldSpin::new(spin),
        stars: star
            .as_ref()
            .map(|_| ShootingStarState::new(config.star_params(), 0.0)),
        field,
        rng,
        clock_origin: now,
        surface,
        frames: 0,
        camera,
        particles,
        star,
    }
}

fn spawn_visual(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<OrbParticleMaterial>,
    data: SpriteMeshData,
    material: OrbParticleMaterial,
    extra: impl Bundle,
) -> OrbVisual {
    let mesh = meshes.add(sprite_mesh(data));
    let material = materials.add(material);
    let entity = commands
        .spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::default(),
            OrbEntity,
            extra,
        ))
        .id();
    OrbVisual {
        entity,
        mesh,
        material,
    }
}

/// Despawns every entity of the context and frees the assets they used.
fn despawn_orb(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<OrbParticleMaterial>,
    context: &OrbRenderContext,
) {
    commands.entity(context.camera).despawn();
    for visual in context.visuals() {
        commands.entity(visual.entity).despawn();
        meshes.remove(&visual.mesh);
        materials.remove(&visual.material);
    }
}

fn viewport_for(surface: ContainerRect) -> Viewport {
    Viewport {
        physical_position: UVec2::new(surface.x, surface.y),
        physical_size: UVec2::new(surface.width, surface.height),
        ..default()
    }
}
