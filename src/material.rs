use crate::{
    error::{Error, Result},
    vec3::Color,
};

/// Phong surface description, shared by every primitive that uses it.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Material {
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Specular exponent.
    pub shininess: f64,
}

impl Material {
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Checks that the exponent is positive and every color is finite.
    pub fn validate(&self, name: &str) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidMaterial {
            name: name.to_owned(),
            reason: reason.to_owned(),
        };

        if !(self.shininess > 0.0 && self.shininess.is_finite()) {
            return Err(invalid("shininess must be a positive number"));
        }
        if !(self.ambient.is_finite() && self.diffuse.is_finite() && self.specular.is_finite()) {
            return Err(invalid("colors must be finite"));
        }

        Ok(())
    }
}
