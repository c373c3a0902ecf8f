use crate::{error::Result, vec3::Vec3};

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    origin: Vec3<f64>,
    direction: Vec3<f64>,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Result<Self> {
        Ok(Self {
            origin,
            direction: direction.unit()?,
        })
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.0, -10.0, 0.0)).unwrap();

        assert_eq!(Vec3::new(0.0, -1.0, 0.0), *ray.direction());
        assert_eq!(Vec3::new(1.0, 2.0, 3.0), ray.origin());
    }

    #[test]
    fn normalized_direction_keeps_orientation() {
        let input = Vec3::new(2.0, -3.0, 6.0);
        let ray = Ray::new(Vec3::ZERO, input).unwrap();
        let d = ray.direction();

        assert_relative_eq!(1.0, d.len());
        assert_relative_eq!(input.len(), d.dot(&input), max_relative = 1e-12);
        assert_relative_eq!(2.0 / 7.0, d.x);
        assert_relative_eq!(-3.0 / 7.0, d.y);
        assert_relative_eq!(6.0 / 7.0, d.z);
    }

    #[test]
    fn point_at_walks_along_direction() {
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 2.0)).unwrap();

        assert_eq!(Vec3::new(1.0, 0.0, 2.5), ray.point_at(2.5));
    }

    #[test]
    fn zero_direction_is_rejected() {
        assert!(Ray::new(Vec3::ZERO, Vec3::ZERO).is_err());
    }
}
