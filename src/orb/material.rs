use bevy::prelude::*;
use bevy::render::render_resource::AsBindGroup;
use bevy::shader::ShaderRef;
use orbgen::constants::CAMERA_FOV_DEGREES;
use orbgen::viewport::sprite_world_size;

const SHADER_PATH: &str = "shaders/orb_particle.wgsl";

/// The orb layer as a whole is drawn translucent over the page.
pub const LAYER_OPACITY: f32 = 0.75;

/// Camera-facing glowing points, blended additively.
#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct OrbParticleMaterial {
    /// Linear colour, alpha is the opacity
    #[uniform(0)]
    pub color: LinearRgba,
    /// x: sprite quad edge in world units
    #[uniform(1)]
    pub params: Vec4,
}

impl OrbParticleMaterial {
    /// `size` is the point size of the configured particle; the quad edge is
    /// derived from it for the orb camera's field of view.
    pub fn new(hex: u32, opacity: f32, size: f32) -> Self {
        let [r, g, b] = orbgen::config::hex_to_rgb(hex);
        Self {
            color: Color::srgba(r, g, b, opacity * LAYER_OPACITY).to_linear(),
            params: Vec4::new(sprite_world_size(size, CAMERA_FOV_DEGREES), 0.0, 0.0, 0.0),
        }
    }
}

impl Material for OrbParticleMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        AlphaMode::Add
    }
}
