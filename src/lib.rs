//! Phong-shaded ray tracer.
//!
//! A [`Scene`] holds primitives (planes, spheres, oriented boxes, triangles and
//! triangle meshes) and point lights. A [`Camera`] turns pixels into primary
//! rays, the nearest hit along each ray is shaded by the [`Shader`] with
//! ambient, diffuse and specular terms plus hard shadows, and the [`Renderer`]
//! runs that over a whole frame.

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod config;
pub mod description;
pub mod error;
pub mod geometry;
pub mod intersection;
pub mod light;
pub mod material;
pub mod output;
pub mod ray;
pub mod render;
pub mod scene;
pub mod shader;
pub mod vec3;

pub use crate::camera::{Camera, CameraDescriptor};
pub use crate::config::RenderConfig;
pub use crate::description::{SceneDescription, World};
pub use crate::error::{Error, Result};
pub use crate::geometry::{Geometry, OrientedBox, Plane, Primitive, Sphere, Triangle, TriangleMesh};
pub use crate::intersection::Intersection;
pub use crate::light::Light;
pub use crate::material::Material;
pub use crate::ray::Ray;
pub use crate::render::{Frame, Renderer};
pub use crate::scene::Scene;
pub use crate::shader::Shader;
pub use crate::vec3::{Color, Vec3};
