use std::sync::Arc;

use crate::{
    error::{Error, Result},
    geometry::Geometry,
    material::Material,
    vec3::Vec3,
    Intersection, Ray,
};

/// Slack added to every half-extent when confining a face hit, so that rays
/// grazing an edge or corner are not lost to rounding.
const EDGE_TOLERANCE: f64 = 1e-4;

/// Box with three orthonormal axes and half-extents, rotatable about its center.
#[derive(Clone, Debug)]
pub struct OrientedBox {
    center: Vec3<f64>,
    axes: [Vec3<f64>; 3],
    extents: [f64; 3],
    material: Arc<Material>,
}

impl OrientedBox {
    /// Creates an axis-aligned box from its center and half-extents.
    pub fn new(center: Vec3<f64>, extents: Vec3<f64>, material: Arc<Material>) -> Result<Self> {
        let valid = |e: f64| e >= 0.0 && e.is_finite();
        if !(valid(extents.x) && valid(extents.y) && valid(extents.z)) {
            return Err(Error::InvalidExtents(extents));
        }

        Ok(Self {
            center,
            axes: [
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ],
            extents: [extents.x, extents.y, extents.z],
            material,
        })
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.center
    }

    #[inline]
    pub fn axes(&self) -> &[Vec3<f64>; 3] {
        &self.axes
    }

    #[inline]
    pub fn extents(&self) -> Vec3<f64> {
        Vec3::from(self.extents)
    }

    /// Rotates the box about the global X axis through its center.
    pub fn rotate_x(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        self.map_axes(|a| Vec3::new(a.x, a.y * c - a.z * s, a.y * s + a.z * c))
    }

    /// Rotates the box about the global Y axis through its center.
    pub fn rotate_y(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        self.map_axes(|a| Vec3::new(a.x * c + a.z * s, a.y, -a.x * s + a.z * c))
    }

    /// Rotates the box about the global Z axis through its center.
    pub fn rotate_z(self, radians: f64) -> Self {
        let (s, c) = radians.sin_cos();
        self.map_axes(|a| Vec3::new(a.x * c - a.y * s, a.x * s + a.y * c, a.z))
    }

    fn map_axes<F>(mut self, f: F) -> Self
    where
        F: Fn(Vec3<f64>) -> Vec3<f64>,
    {
        for axis in self.axes.iter_mut() {
            *axis = f(*axis);
        }
        self
    }

    fn contains(&self, point: Vec3<f64>) -> bool {
        let local = self.center - point;

        self.axes.iter().zip(&self.extents).all(|(axis, extent)| {
            let limit = extent + EDGE_TOLERANCE;
            let v = local.dot(axis);
            -limit < v && v < limit
        })
    }
}

impl Geometry for OrientedBox {
    fn material(&self) -> &Material {
        &self.material
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        let mut hits = Vec::new();

        for (axis, &extent) in self.axes.iter().zip(&self.extents) {
            let near = (self.center - axis.scale(extent)).dot(&-*axis);
            let far = (self.center + axis.scale(extent)).dot(axis);

            for &(normal, d) in &[(-*axis, near), (*axis, far)] {
                let denominator = ray.direction().dot(&normal);
                // Parallel to this face.
                if denominator == 0.0 {
                    continue;
                }

                let t = (d - ray.origin().dot(&normal)) / denominator;
                if !(t >= 0.0 && t.is_finite()) {
                    continue;
                }

                let point = ray.point_at(t);
                if self.contains(point) {
                    hits.push(Intersection::new(ray, self, point, normal, t));
                }
            }
        }

        hits
    }
}
