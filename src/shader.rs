//! Phong shading with hard shadows.

use crate::{
    camera::Camera,
    config::RenderConfig,
    error::Result,
    intersection::Intersection,
    light::Light,
    ray::Ray,
    scene::Scene,
    vec3::{Color, Vec3},
};

/// Shadow rays start this far above the surface so they do not hit it again.
const SHADOW_BIAS: f64 = 1e-4;

#[derive(Copy, Clone, Debug)]
pub struct Shader {
    ambient_light: Color,
    camera_position: Vec3<f64>,
}

impl Shader {
    pub fn new(ambient_light: Color, camera_position: Vec3<f64>) -> Self {
        Self {
            ambient_light,
            camera_position,
        }
    }

    pub fn for_camera(config: &RenderConfig, camera: &Camera) -> Self {
        Self::new(config.ambient_light, camera.position())
    }

    /// Final color of a hit, clamped to `[0, 1]`.
    pub fn shade(&self, hit: &Intersection<'_>, scene: &Scene) -> Result<Color> {
        let material = hit.primitive.material();
        let mut color = self.ambient_light.hadamard(&material.ambient);

        for light in scene.lights() {
            let lit = self.illumination(hit, light)?;
            if !self.in_shadow(hit, light, scene)? {
                color += lit;
            }
        }

        Ok(color.clamp(0.0, 1.0))
    }

    /// Diffuse plus specular contribution of `light`, ignoring occluders.
    ///
    /// The specular term is evaluated from the mirrored light direction even
    /// when the light is behind the surface.
    pub fn illumination(&self, hit: &Intersection<'_>, light: &Light) -> Result<Color> {
        let material = hit.primitive.material();
        let light_dir = (light.position - hit.position).unit()?;
        let mut color = Vec3::ZERO;

        let diffuse = light_dir.dot(&hit.normal);
        if diffuse > 0.0 {
            color += light.diffuse.hadamard(&material.diffuse).scale(diffuse);
        }

        let reflect_dir = hit.normal.scale(2.0 * diffuse) - light_dir;
        let camera_dir = (self.camera_position - hit.position).unit()?;
        let specular = camera_dir.dot(&reflect_dir);
        if specular > 0.0 {
            color += light
                .specular
                .hadamard(&material.specular)
                .scale(specular.powf(material.shininess));
        }

        Ok(color)
    }

    /// Whether anything lies between the hit point and `light`.
    pub fn in_shadow(&self, hit: &Intersection<'_>, light: &Light, scene: &Scene) -> Result<bool> {
        let to_light = light.position - hit.position;
        let origin = hit.position + hit.normal.scale(SHADOW_BIAS);
        let ray = Ray::new(origin, to_light)?;

        Ok(scene
            .nearest_hit(&ray)
            .map_or(false, |blocker| blocker.t * blocker.t < to_light.len2()))
    }
}
