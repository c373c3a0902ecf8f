use std::sync::Arc;

use crate::{
    error::{Error, Result},
    geometry::Geometry,
    material::Material,
    vec3::Vec3,
    Intersection, Ray,
};

/// How far the summed sub-areas may exceed the whole before a point counts as
/// outside. Wide enough to keep points on shared edges.
const AREA_TOLERANCE: f64 = 1.0001;

#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [Vec3<f64>; 3],
    /// Flat face normal, `(b - a) × (c - a)` normalized.
    normal: Vec3<f64>,
    area: f64,
    material: Arc<Material>,
}

impl Triangle {
    pub fn new(a: Vec3<f64>, b: Vec3<f64>, c: Vec3<f64>, material: Arc<Material>) -> Result<Self> {
        let n = (b - a).cross(&(c - a));
        let area = n.len() / 2.0;

        if !(area > 0.0 && area.is_finite()) {
            return Err(Error::DegenerateTriangle(a, b, c));
        }

        Ok(Self {
            vertices: [a, b, c],
            normal: n.unit()?,
            area,
            material,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>; 3] {
        &self.vertices
    }

    #[inline]
    pub fn normal(&self) -> Vec3<f64> {
        self.normal
    }

    fn contains(&self, p: Vec3<f64>) -> bool {
        let [a, b, c] = self.vertices;
        let area = |u: Vec3<f64>, v: Vec3<f64>| u.cross(&v).len() / 2.0;

        let ap = p - a;
        let abp = area(b - a, ap);
        let apc = area(ap, c - a);
        let pbc = area(b - p, c - p);

        (abp + apc + pbc) / self.area <= AREA_TOLERANCE
    }
}

impl Geometry for Triangle {
    fn material(&self) -> &Material {
        &self.material
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        let denominator = self.normal.dot(ray.direction());
        if denominator == 0.0 {
            return Vec::new();
        }

        let t = (self.normal.dot(&self.vertices[0]) - ray.origin().dot(&self.normal)) / denominator;
        if !(t >= 0.0 && t.is_finite()) {
            return Vec::new();
        }

        let p = ray.point_at(t);
        if self.contains(p) {
            vec![Intersection::new(ray, self, p, self.normal, t)]
        } else {
            Vec::new()
        }
    }
}
