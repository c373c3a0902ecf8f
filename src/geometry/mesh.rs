//! Triangle meshes read from Wavefront OBJ vertex and face records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::{Error, Result},
    geometry::{Geometry, OrientedBox, Triangle},
    material::Material,
    vec3::Vec3,
    Intersection, Ray,
};

#[derive(Clone, Debug)]
pub struct TriangleMesh {
    triangles: Vec<Triangle>,
    /// Translation that was added to every vertex while loading.
    offset: Vec3<f64>,
    /// Tight axis-aligned bounds, used only to reject rays early.
    bounds: OrientedBox,
    material: Arc<Material>,
}

impl TriangleMesh {
    /// Loads a mesh from a Wavefront OBJ file, keeping only `v` and `f` records.
    pub fn load<P: AsRef<Path>>(path: P, offset: Vec3<f64>, material: Arc<Material>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;

        let mesh = Self::from_reader(BufReader::new(file), offset, material)?;
        info!("Loaded mesh {} with {} triangles", path.display(), mesh.triangles.len());

        Ok(mesh)
    }

    /// Parses `v x y z` and `f i j k` records; faces use 1-based indices into
    /// the vertices read so far. Any other record kind is skipped.
    pub fn from_reader<R: BufRead>(reader: R, offset: Vec3<f64>, material: Arc<Material>) -> Result<Self> {
        let mut vertices: Vec<Vec3<f64>> = Vec::new();
        let mut triangles = Vec::new();

        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            let n = n + 1;
            let malformed = |reason: String| Error::MalformedMesh { line: n, reason };

            let mut tokens = line.split_whitespace();
            match tokens.next() {
                Some("v") => {
                    let coords = tokens
                        .map(|token| {
                            token
                                .parse::<f64>()
                                .map_err(|err| malformed(format!("invalid coordinate `{}`: {}", token, err)))
                        })
                        .collect::<Result<Vec<_>>>()?;

                    match coords.as_slice() {
                        &[x, y, z] => vertices.push(Vec3::new(x, y, z) + offset),
                        _ => return Err(malformed(format!("vertex needs 3 coordinates, got {}", coords.len()))),
                    }
                }
                Some("f") => {
                    let indices = tokens
                        .map(|token| vertex_index(token, vertices.len()).map_err(&malformed))
                        .collect::<Result<Vec<_>>>()?;

                    match indices.as_slice() {
                        &[i, j, k] => {
                            let triangle = Triangle::new(vertices[i], vertices[j], vertices[k], material.clone())
                                .map_err(|err| malformed(err.to_string()))?;
                            triangles.push(triangle);
                        }
                        _ => return Err(malformed(format!("face needs 3 vertices, got {}", indices.len()))),
                    }
                }
                Some(other) => {
                    if !other.starts_with('#') {
                        debug!("skipping `{}` record at line {}", other, n);
                    }
                }
                None => {}
            }
        }

        if vertices.is_empty() {
            return Err(Error::EmptyMesh("vertices"));
        }
        if triangles.is_empty() {
            return Err(Error::EmptyMesh("faces"));
        }

        let bounds = bounding_box(&vertices, material.clone())?;
        debug!(
            "parsed mesh: {} vertices, {} triangles, bounds {:?} ± {:?}",
            vertices.len(),
            triangles.len(),
            bounds.center(),
            bounds.extents()
        );

        Ok(Self {
            triangles,
            offset,
            bounds,
            material,
        })
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn offset(&self) -> Vec3<f64> {
        self.offset
    }

    #[inline]
    pub fn bounds(&self) -> &OrientedBox {
        &self.bounds
    }
}

/// Resolves an OBJ face token (`7`, `7/1`, `7//3`, `7/1/3`) to a zero-based index.
fn vertex_index(token: &str, count: usize) -> std::result::Result<usize, String> {
    let head = token.split('/').next().unwrap_or(token);
    let index = head
        .parse::<usize>()
        .map_err(|err| format!("invalid vertex index `{}`: {}", token, err))?;

    if index == 0 || index > count {
        return Err(format!("vertex index {} out of range 1..={}", index, count));
    }

    Ok(index - 1)
}

fn bounding_box(vertices: &[Vec3<f64>], material: Arc<Material>) -> Result<OrientedBox> {
    let (min, max) = vertices
        .iter()
        .skip(1)
        .fold((vertices[0], vertices[0]), |(lo, hi), v| (lo.min(v), hi.max(v)));

    OrientedBox::new((min + max).scale(0.5), (max - min).scale(0.5), material)
}

impl Geometry for TriangleMesh {
    fn material(&self) -> &Material {
        &self.material
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        if self.bounds.ray_test(ray).is_empty() {
            return Vec::new();
        }

        self.triangles.iter().flat_map(|triangle| triangle.ray_test(ray)).collect()
    }
}
