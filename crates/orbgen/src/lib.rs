pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod mesh_data;
pub mod motion;
pub mod prelude;
pub mod sampling;
pub mod shooting_star;
pub mod tools;
pub mod viewport;

pub use config::{OrbConfig, Variant, load_or_default};
pub use error::ConfigError;
