use std::cmp::Ordering;
use std::fmt;

use crate::{geometry::Geometry, ray::Ray, vec3::Vec3};

/// A single ray hit.
///
/// Borrows both the ray and the surface it hit, so it never outlives the scene.
#[derive(Copy, Clone)]
pub struct Intersection<'a> {
    pub ray: &'a Ray,
    pub primitive: &'a dyn Geometry,
    pub position: Vec3<f64>,
    /// Outward unit normal.
    pub normal: Vec3<f64>,
    pub t: f64,
}

impl<'a> Intersection<'a> {
    pub fn new(
        ray: &'a Ray,
        primitive: &'a dyn Geometry,
        position: Vec3<f64>,
        normal: Vec3<f64>,
        t: f64,
    ) -> Self {
        Self {
            ray,
            primitive,
            position,
            normal,
            t,
        }
    }
}

impl fmt::Debug for Intersection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("position", &self.position)
            .field("normal", &self.normal)
            .field("t", &self.t)
            .finish()
    }
}

impl PartialEq for Intersection<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Intersection<'_> {}

impl PartialOrd for Intersection<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Hits are ordered by distance along the ray.
impl Ord for Intersection<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.t.total_cmp(&other.t)
    }
}

/// Picks the hit closest to the ray origin.
#[inline]
pub fn nearest<'a, I>(hits: I) -> Option<Intersection<'a>>
where
    I: IntoIterator<Item = Intersection<'a>>,
{
    hits.into_iter().min()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{geometry::Sphere, material::Material};

    #[test]
    fn nearest_picks_smallest_t() {
        let material = Arc::new(Material::new(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO, 1.0));
        let spheres = [
            Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, material.clone()).unwrap(),
            Sphere::new(Vec3::new(0.0, 0.0, 2.0), 1.0, material.clone()).unwrap(),
            Sphere::new(Vec3::new(0.0, 0.0, 8.0), 1.0, material).unwrap(),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)).unwrap();

        let hits = spheres
            .iter()
            .zip(&[5.0, 2.0, 8.0])
            .map(|(sphere, &t)| {
                Intersection::new(&ray, sphere, ray.point_at(t), Vec3::new(0.0, 0.0, -1.0), t)
            })
            .collect::<Vec<_>>();

        let closest = nearest(hits).unwrap();

        assert_eq!(2.0, closest.t);
        assert!(std::ptr::eq(
            &spheres[1] as *const Sphere as *const u8,
            closest.primitive as *const dyn Geometry as *const u8,
        ));
    }

    #[test]
    fn nearest_of_nothing_is_none() {
        assert!(nearest(Vec::new()).is_none());
    }
}
