use crate::{
    geometry::{Geometry, Primitive},
    intersection::{self, Intersection},
    light::Light,
    ray::Ray,
};

/// Everything a ray can hit, plus the lights that illuminate it.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<P: Into<Primitive>>(mut self, primitive: P) -> Self {
        self.add(primitive);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    pub fn add<P: Into<Primitive>>(&mut self, primitive: P) {
        self.primitives.push(primitive.into());
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Every hit of `ray` against every primitive, unordered.
    pub fn intersections<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        self.primitives
            .iter()
            .flat_map(|primitive| primitive.ray_test(ray))
            .collect()
    }

    pub fn nearest_hit<'a>(&'a self, ray: &'a Ray) -> Option<Intersection<'a>> {
        intersection::nearest(self.primitives.iter().flat_map(|primitive| primitive.ray_test(ray)))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use approx::assert_relative_eq;

    use super::*;
    use crate::{
        geometry::{OrientedBox, Plane, Sphere},
        material::Material,
        vec3::Vec3,
    };

    fn material() -> Arc<Material> {
        Arc::new(Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 1.0))
    }

    #[test]
    fn nearest_across_primitives() {
        let scene = Scene::new()
            .with(Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, material()).unwrap())
            .with(OrientedBox::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 1.0, 1.0), material()).unwrap())
            .with(Plane::new(Vec3::new(0.0, 0.0, 20.0), Vec3::new(0.0, 0.0, -1.0), material()).unwrap());
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap();

        // Two box faces, one sphere entry, one plane.
        assert_eq!(4, scene.intersections(&ray).len());

        let closest = scene.nearest_hit(&ray).unwrap();
        assert_relative_eq!(4.0, closest.t);
        assert_eq!(Vec3::new(0.0, 0.0, -1.0), closest.normal);
    }

    #[test]
    fn empty_scene_hits_nothing() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap();

        assert!(Scene::new().nearest_hit(&ray).is_none());
    }
}
