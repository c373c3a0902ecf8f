//! Pinhole camera mapping pixels onto a view plane.

use crate::{
    error::{Error, Result},
    ray::Ray,
    vec3::Vec3,
};

/// Camera pose as written in a scene description.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CameraDescriptor {
    /// Eye position.
    pub position: Vec3<f64>,
    /// Center of interest.
    pub look_at: Vec3<f64>,
    /// Up hint, need not be orthogonal to the view direction.
    pub up: Vec3<f64>,
    /// Vertical field of view in degrees.
    pub fov: f64,
    /// Distance from the eye to the view plane.
    pub near: f64,
}

#[derive(Copy, Clone, Debug)]
pub struct Camera {
    position: Vec3<f64>,
    forward: Vec3<f64>,
    right: Vec3<f64>,
    up: Vec3<f64>,
    view_width: f64,
    view_height: f64,
    /// Top-left corner of the view rectangle.
    view_origin: Vec3<f64>,
}

impl Camera {
    pub fn new(desc: &CameraDescriptor, aspect_ratio: f64) -> Result<Self> {
        if !(desc.near > 0.0 && desc.near.is_finite()) {
            return Err(Error::InvalidCamera(format!("near distance must be positive, got {}", desc.near)));
        }
        if !(desc.fov > 0.0 && desc.fov < 180.0) {
            return Err(Error::InvalidCamera(format!("field of view must be in (0, 180) degrees, got {}", desc.fov)));
        }
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(Error::InvalidCamera(format!("aspect ratio must be positive, got {}", aspect_ratio)));
        }

        let forward = (desc.look_at - desc.position)
            .unit()
            .map_err(|_| Error::InvalidCamera("eye and center of interest coincide".into()))?;
        let right = desc
            .up
            .cross(&forward)
            .unit()
            .map_err(|_| Error::InvalidCamera("up hint is parallel to the view direction".into()))?;
        let up = forward.cross(&right);

        let view_height = 2.0 * desc.near * (0.5 * desc.fov.to_radians()).tan();
        let view_width = aspect_ratio * view_height;
        let view_origin = desc.position - right.scale(0.5 * view_width)
            + up.scale(0.5 * view_height)
            + forward.scale(desc.near);

        Ok(Self {
            position: desc.position,
            forward,
            right,
            up,
            view_width,
            view_height,
            view_origin,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec3<f64> {
        self.position
    }

    #[inline]
    pub fn forward(&self) -> Vec3<f64> {
        self.forward
    }

    #[inline]
    pub fn right(&self) -> Vec3<f64> {
        self.right
    }

    #[inline]
    pub fn up(&self) -> Vec3<f64> {
        self.up
    }

    #[inline]
    pub fn view_width(&self) -> f64 {
        self.view_width
    }

    #[inline]
    pub fn view_height(&self) -> f64 {
        self.view_height
    }

    #[inline]
    pub fn view_origin(&self) -> Vec3<f64> {
        self.view_origin
    }

    /// Maps pixel `(px, py)` of a `width`×`height` screen to its point on the
    /// view plane. Pixel `(0, 0)` is the top-left corner.
    pub fn pixel_to_world(&self, px: u32, py: u32, width: u32, height: u32) -> Vec3<f64> {
        let fraction = |p: u32, size: u32| {
            if size > 1 {
                f64::from(p) / f64::from(size - 1)
            } else {
                0.0
            }
        };

        self.view_origin + self.right.scale(self.view_width * fraction(px, width))
            - self.up.scale(self.view_height * fraction(py, height))
    }

    /// Ray from the eye through pixel `(px, py)`.
    pub fn primary_ray(&self, px: u32, py: u32, width: u32, height: u32) -> Result<Ray> {
        Ray::new(self.position, self.pixel_to_world(px, py, width, height) - self.position)
    }
}
