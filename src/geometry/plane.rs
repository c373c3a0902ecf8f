use std::sync::Arc;

use crate::{
    error::Result, geometry::Geometry, material::Material, vec3::Vec3, Intersection, Ray,
};

/// Infinite plane through `point` with a unit `normal`. Rays hit it from either
/// side; the reported normal is always the stored one.
#[derive(Clone, Debug)]
pub struct Plane {
    point: Vec3<f64>,
    normal: Vec3<f64>,
    /// Signed distance from the world origin, `point · normal`.
    d: f64,
    material: Arc<Material>,
}

impl Plane {
    pub fn new(point: Vec3<f64>, normal: Vec3<f64>, material: Arc<Material>) -> Result<Self> {
        let normal = normal.unit()?;

        Ok(Self {
            point,
            normal,
            d: point.dot(&normal),
            material,
        })
    }

    #[inline]
    pub fn point(&self) -> Vec3<f64> {
        self.point
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }
}

impl Geometry for Plane {
    fn material(&self) -> &Material {
        &self.material
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        let denominator = self.normal.dot(ray.direction());

        // Parallel, including rays lying in the plane.
        if denominator == 0.0 {
            return Vec::new();
        }

        let t = (self.d - ray.origin().dot(&self.normal)) / denominator;
        if t > 0.0 && t.is_finite() {
            vec![Intersection::new(ray, self, ray.point_at(t), self.normal, t)]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn material() -> Arc<Material> {
        Arc::new(Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 1.0))
    }

    #[test]
    fn hit_from_above() {
        let plane = Plane::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 2.0, 0.0), material()).unwrap();
        let ray = Ray::new(Vec3::new(1.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0)).unwrap();

        let hits = plane.ray_test(&ray);

        assert_eq!(1, hits.len());
        assert_relative_eq!(5.0, hits[0].t);
        assert_eq!(Vec3::new(1.0, 5.0, 0.0), hits[0].position);
        assert_eq!(Vec3::new(0.0, 1.0, 0.0), hits[0].normal);
    }

    #[test]
    fn parallel_rays_never_hit() {
        let normals = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
        ];
        let directions = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];

        for normal in &normals {
            let plane = Plane::new(Vec3::ZERO, *normal, material()).unwrap();
            for direction in directions.iter().filter(|d| d.dot(normal) == 0.0) {
                // One ray above the plane, one lying in it.
                for origin in &[*normal, Vec3::ZERO] {
                    let ray = Ray::new(*origin, *direction).unwrap();
                    assert!(plane.ray_test(&ray).is_empty());
                }
            }
        }
    }

    #[test]
    fn plane_behind_ray_is_missed() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0), material()).unwrap();
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)).unwrap();

        assert!(plane.ray_test(&ray).is_empty());
    }

    #[test]
    fn zero_normal_is_rejected() {
        assert!(Plane::new(Vec3::ZERO, Vec3::ZERO, material()).is_err());
    }
}
