//! Weight encoding, sphere placement and the camera used to draw the cloud.

pub mod camera;
pub mod encoding;
pub mod float;
pub mod scene;
pub mod sphere;

pub use camera::OrbitCamera;
pub use float::FloatMotion;
pub use scene::{
    CloudScene,
    Glyph,
};
