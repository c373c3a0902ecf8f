//! Render settings shared by the camera, shader and renderer.

use crate::{
    error::{Error, Result},
    vec3::{Color, Vec3},
};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
/// View-plane aspect used when a scene does not set one; not tied to the resolution.
pub const DEFAULT_ASPECT_RATIO: f64 = 4.0 / 3.0;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Width over height of the view plane; independent of the pixel grid.
    pub aspect_ratio: f64,
    /// Global ambient light, multiplied into every material's ambient color.
    pub ambient_light: Color,
    /// Color of pixels whose primary ray hits nothing.
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            ambient_light: Vec3::new(0.2, 0.2, 0.2),
            background: Vec3::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0),
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "resolution must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.aspect_ratio > 0.0 && self.aspect_ratio.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "aspect ratio must be positive, got {}",
                self.aspect_ratio
            )));
        }
        if !(self.ambient_light.is_finite() && self.background.is_finite()) {
            return Err(Error::InvalidConfig("colors must be finite".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = RenderConfig::default();

        assert!(config.validate().is_ok());
        assert_eq!(4.0 / 3.0, config.aspect_ratio);
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let config = RenderConfig {
            height: 0,
            ..RenderConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
