use std::sync::Arc;

use crate::{
    error::{Error, Result},
    geometry::Geometry,
    material::Material,
    vec3::Vec3,
    Intersection, Ray,
};

#[derive(Clone, Debug)]
pub struct Sphere {
    center: Vec3<f64>,
    radius: f64,
    radius2: f64,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Vec3<f64>, radius: f64, material: Arc<Material>) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(Error::InvalidRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            radius2: radius * radius,
            material,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Geometry for Sphere {
    fn material(&self) -> &Material {
        &self.material
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        let l = self.center - ray.origin();

        // Projection of the center onto the ray.
        let tca = l.dot(ray.direction());
        if tca < 0.0 {
            return Vec::new();
        }

        // Squared distance from the center to the ray.
        let d2 = l.len2() - tca * tca;
        if d2 > self.radius2 {
            return Vec::new();
        }

        let thc = (self.radius2 - d2).sqrt();
        let (mut t0, t1) = (tca - thc, tca + thc);

        // Origin inside the sphere: the exit point is the only hit.
        if t0 < 0.0 {
            t0 = t1;
            if t0 < 0.0 {
                return Vec::new();
            }
        }

        let point = ray.point_at(t0);
        let normal = (point - self.center).scale(1.0 / self.radius);

        vec![Intersection::new(ray, self, point, normal, t0)]
    }
}
