use crate::vec3::{Color, Vec3};

/// Point light without distance attenuation.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Light {
    pub position: Vec3<f64>,
    pub diffuse: Color,
    pub specular: Color,
}

impl Light {
    pub fn new(position: Vec3<f64>, diffuse: Color, specular: Color) -> Self {
        Self {
            position,
            diffuse,
            specular,
        }
    }
}
