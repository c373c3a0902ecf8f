//! Error types for scene construction and rendering.

use thiserror::Error;

use crate::vec3::Vec3;

/// Errors that can occur while building or rendering a scene.
#[derive(Error, Debug)]
pub enum Error {
    /// Attempted to normalize a vector of zero (or non-finite) length.
    #[error("cannot normalize zero-length vector {0:?}")]
    ZeroLengthVector(Vec3<f64>),

    /// Triangle vertices are collinear or coincident.
    #[error("degenerate triangle {0:?}, {1:?}, {2:?}")]
    DegenerateTriangle(Vec3<f64>, Vec3<f64>, Vec3<f64>),

    /// Sphere radius is not a positive finite number.
    #[error("invalid sphere radius: {0}")]
    InvalidRadius(f64),

    /// Box half-extents must be non-negative and finite.
    #[error("invalid box extents: {0:?}")]
    InvalidExtents(Vec3<f64>),

    /// Camera parameters do not describe a usable view.
    #[error("invalid camera: {0}")]
    InvalidCamera(String),

    /// Render settings are out of range.
    #[error("invalid render settings: {0}")]
    InvalidConfig(String),

    /// Material parameters are out of range.
    #[error("invalid material `{name}`: {reason}")]
    InvalidMaterial {
        /// Material name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An object refers to a material that was never declared.
    #[error("unknown material `{0}`")]
    UnknownMaterial(String),

    /// Mesh source contains a record that cannot be interpreted.
    #[error("malformed mesh at line {line}: {reason}")]
    MalformedMesh {
        /// 1-based line number in the mesh source.
        line: usize,
        /// What is wrong with the record.
        reason: String,
    },

    /// Mesh source has no vertices or no faces.
    #[error("mesh contains no {0}")]
    EmptyMesh(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

/// Result type for tracer operations.
pub type Result<T> = std::result::Result<T, Error>;
