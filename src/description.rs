//! JSON scene files.
//!
//! A scene file names its materials once and refers to them by name from each
//! object, so every primitive using a material shares the same allocation.
//!
//! ```json
//! {
//!     "render": { "width": 640, "height": 480, "ambient_light": [0.2, 0.2, 0.2] },
//!     "camera": { "position": [0, 2, -10], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 60, "near": 1.5 },
//!     "materials": {
//!         "red": { "ambient": [0.3, 0, 0], "diffuse": [1, 0, 0], "specular": [1, 1, 1], "shininess": 10 }
//!     },
//!     "objects": [
//!         { "type": "sphere", "material": "red", "center": [0, 0, 0], "radius": 1 },
//!         { "type": "box", "material": "red", "center": [3, 0, 0], "extents": [1, 1, 1],
//!           "rotate": [{ "axis": "z", "degrees": 45 }] }
//!     ],
//!     "lights": [{ "position": [0, 50, 0], "diffuse": [1, 1, 1], "specular": [1, 1, 1] }]
//! }
//! ```

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    camera::{Camera, CameraDescriptor},
    config::{RenderConfig, DEFAULT_ASPECT_RATIO, DEFAULT_HEIGHT, DEFAULT_WIDTH},
    error::{Error, Result},
    geometry::{OrientedBox, Plane, Primitive, Sphere, Triangle, TriangleMesh},
    light::Light,
    material::Material,
    scene::Scene,
    vec3::{Color, Vec3},
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderDescriptor {
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// View-plane width over height. Defaults to [`DEFAULT_ASPECT_RATIO`]
    /// whatever the resolution is.
    pub aspect_ratio: Option<f64>,
    pub ambient_light: Option<Color>,
    pub background: Option<Color>,
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Rotation {
    pub axis: Axis,
    pub degrees: f64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", deny_unknown_fields)]
pub enum ObjectDescriptor {
    Plane {
        material: String,
        point: Vec3<f64>,
        normal: Vec3<f64>,
    },
    Sphere {
        material: String,
        center: Vec3<f64>,
        radius: f64,
    },
    Box {
        material: String,
        center: Vec3<f64>,
        extents: Vec3<f64>,
        /// Applied in order, each about a global axis through the box center.
        #[serde(default)]
        rotate: Vec<Rotation>,
    },
    Triangle {
        material: String,
        vertices: [Vec3<f64>; 3],
    },
    Mesh {
        material: String,
        /// Relative paths resolve against the scene file's directory.
        path: String,
        #[serde(default)]
        offset: Vec3<f64>,
    },
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub render: RenderDescriptor,
    pub camera: CameraDescriptor,
    #[serde(default)]
    pub materials: HashMap<String, Material>,
    #[serde(default)]
    pub objects: Vec<ObjectDescriptor>,
    #[serde(default)]
    pub lights: Vec<Light>,
}

/// Validated, ready-to-render scene.
#[derive(Clone, Debug)]
pub struct World {
    pub scene: Scene,
    pub camera: Camera,
    pub config: RenderConfig,
}

impl SceneDescription {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let description = serde_json::from_reader(BufReader::new(file))?;
        info!("Loaded scene description {}", path.as_ref().display());

        Ok(description)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render settings with defaults filled in.
    pub fn config(&self) -> Result<RenderConfig> {
        let defaults = RenderConfig::default();
        let render = &self.render;

        let config = RenderConfig {
            width: render.width.unwrap_or(DEFAULT_WIDTH),
            height: render.height.unwrap_or(DEFAULT_HEIGHT),
            aspect_ratio: render.aspect_ratio.unwrap_or(DEFAULT_ASPECT_RATIO),
            ambient_light: render.ambient_light.unwrap_or(defaults.ambient_light),
            background: render.background.unwrap_or(defaults.background),
        };
        config.validate()?;

        Ok(config)
    }

    /// Builds the scene, loading meshes relative to `base_dir`.
    pub fn build<P: AsRef<Path>>(&self, base_dir: P) -> Result<World> {
        let config = self.config()?;
        let camera = Camera::new(&self.camera, config.aspect_ratio)?;

        let mut materials = HashMap::with_capacity(self.materials.len());
        for (name, material) in &self.materials {
            material.validate(name)?;
            materials.insert(name.as_str(), Arc::new(*material));
        }

        let mut scene = Scene::new();
        for object in &self.objects {
            scene.add(build_object(object, &materials, base_dir.as_ref())?);
        }
        for light in &self.lights {
            if !(light.position.is_finite() && light.diffuse.is_finite() && light.specular.is_finite()) {
                return Err(Error::InvalidConfig(format!("light at {:?} is not finite", light.position)));
            }
            scene.add_light(*light);
        }

        if scene.lights().is_empty() {
            warn!("scene has no lights; only ambient shading will be visible");
        }
        debug!(
            "built scene with {} primitives and {} lights",
            scene.primitives().len(),
            scene.lights().len()
        );

        Ok(World { scene, camera, config })
    }
}

fn build_object(
    object: &ObjectDescriptor,
    materials: &HashMap<&str, Arc<Material>>,
    base_dir: &Path,
) -> Result<Primitive> {
    let material = |name: &str| {
        materials
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownMaterial(name.to_owned()))
    };

    let primitive: Primitive = match object {
        ObjectDescriptor::Plane {
            material: name,
            point,
            normal,
        } => Plane::new(*point, *normal, material(name.as_str())?)?.into(),
        ObjectDescriptor::Sphere {
            material: name,
            center,
            radius,
        } => Sphere::new(*center, *radius, material(name.as_str())?)?.into(),
        ObjectDescriptor::Box {
            material: name,
            center,
            extents,
            rotate,
        } => rotate
            .iter()
            .fold(OrientedBox::new(*center, *extents, material(name.as_str())?)?, |b, r| {
                let radians = r.degrees.to_radians();
                match r.axis {
                    Axis::X => b.rotate_x(radians),
                    Axis::Y => b.rotate_y(radians),
                    Axis::Z => b.rotate_z(radians),
                }
            })
            .into(),
        ObjectDescriptor::Triangle {
            material: name,
            vertices: [a, b, c],
        } => Triangle::new(*a, *b, *c, material(name.as_str())?)?.into(),
        ObjectDescriptor::Mesh {
            material: name,
            path,
            offset,
        } => TriangleMesh::load(base_dir.join(path), *offset, material(name.as_str())?)?.into(),
    };

    Ok(primitive)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::Geometry;

    const SCENE: &str = r#"{
        "render": { "width": 320, "height": 200, "ambient_light": [0.5, 0.5, 0.5] },
        "camera": { "position": [0, 0, -10], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 60, "near": 1.5 },
        "materials": {
            "red": { "ambient": [0.3, 0, 0], "diffuse": [1, 0, 0], "specular": [1, 1, 1], "shininess": 10 },
            "green": { "ambient": [0, 0.5, 0], "diffuse": [0, 1, 0], "specular": [1, 0, 0], "shininess": 2 }
        },
        "objects": [
            { "type": "plane", "material": "green", "point": [0, -5, 0], "normal": [0, 1, 0] },
            { "type": "sphere", "material": "red", "center": [0, 0, 0], "radius": 2 },
            { "type": "box", "material": "red", "center": [5, 0, 0], "extents": [1, 1, 1],
              "rotate": [{ "axis": "z", "degrees": 45 }] },
            { "type": "triangle", "material": "green", "vertices": [[0, 0, 5], [1, 0, 5], [0, 1, 5]] }
        ],
        "lights": [{ "position": [0, 50, 0], "diffuse": [1, 1, 1], "specular": [1, 1, 1] }]
    }"#;

    #[test]
    fn builds_every_object_kind() {
        let world = SceneDescription::from_json(SCENE).unwrap().build(".").unwrap();

        assert_eq!(4, world.scene.primitives().len());
        assert_eq!(1, world.scene.lights().len());
        assert_eq!(320, world.config.width);
        assert_eq!(DEFAULT_ASPECT_RATIO, world.config.aspect_ratio);
        assert_eq!(Vec3::new(0.5, 0.5, 0.5), world.config.ambient_light);
        assert_eq!(RenderConfig::default().background, world.config.background);

        match &world.scene.primitives()[2] {
            Primitive::Box(b) => {
                let x = b.axes()[0];
                assert_abs_diff_eq!(FRAC_1_SQRT_2, x.x, epsilon = 1e-12);
                assert_abs_diff_eq!(FRAC_1_SQRT_2, x.y, epsilon = 1e-12);
            }
            other => panic!("expected a box, got {:?}", other),
        }
    }

    #[test]
    fn objects_share_materials() {
        let world = SceneDescription::from_json(SCENE).unwrap().build(".").unwrap();
        let primitives = world.scene.primitives();

        assert!(std::ptr::eq(primitives[1].material(), primitives[2].material()));
        assert!(!std::ptr::eq(primitives[0].material(), primitives[1].material()));
    }

    #[test]
    fn unknown_material_is_rejected() {
        let json = SCENE.replace(r#""type": "sphere", "material": "red""#, r#""type": "sphere", "material": "gold""#);

        match SceneDescription::from_json(&json).unwrap().build(".") {
            Err(Error::UnknownMaterial(name)) => assert_eq!("gold", name),
            other => panic!("unexpected {:?}", other.map(|w| w.scene)),
        }
    }

    #[test]
    fn render_section_is_optional() {
        let json = r#"{ "camera": { "position": [0, 0, -1], "look_at": [0, 0, 0], "up": [0, 1, 0], "fov": 90, "near": 1 } }"#;
        let world = SceneDescription::from_json(json).unwrap().build(".").unwrap();

        assert_eq!(RenderConfig::default(), world.config);
        assert!(world.scene.primitives().is_empty());
    }

    #[test]
    fn bad_shininess_is_rejected() {
        let json = SCENE.replace(r#""shininess": 2"#, r#""shininess": -2"#);

        assert!(SceneDescription::from_json(&json).unwrap().build(".").is_err());
    }

    #[test]
    fn missing_mesh_file_is_an_io_error() {
        let json = SCENE.replace(
            r#"{ "type": "triangle", "material": "green", "vertices": [[0, 0, 5], [1, 0, 5], [0, 1, 5]] }"#,
            r#"{ "type": "mesh", "material": "green", "path": "does-not-exist.obj" }"#,
        );

        match SceneDescription::from_json(&json).unwrap().build("/nonexistent") {
            Err(Error::Io(..)) => {}
            other => panic!("unexpected {:?}", other.map(|w| w.scene)),
        }
    }

    #[test]
    fn resolution_override_keeps_aspect_ratio() {
        let mut description = SceneDescription::from_json(SCENE).unwrap();
        let before = description.config().unwrap();

        description.render.width = Some(32);
        let after = description.config().unwrap();

        assert_eq!(32, after.width);
        assert_eq!(before.aspect_ratio, after.aspect_ratio);
        assert_eq!(DEFAULT_ASPECT_RATIO, after.aspect_ratio);
    }

    #[test]
    fn explicit_aspect_ratio_is_kept() {
        let json = SCENE.replace(r#""width": 320,"#, r#""width": 320, "aspect_ratio": 2.0,"#);
        let config = SceneDescription::from_json(&json).unwrap().config().unwrap();

        assert_eq!(2.0, config.aspect_ratio);
    }

    #[test]
    fn misspelled_object_keys_fail_to_parse() {
        let rotation = SCENE.replace(r#""rotate": ["#, r#""rotation": ["#);
        assert!(SceneDescription::from_json(&rotation).is_err());

        let axis = SCENE.replace(r#""axis": "z""#, r#""axis": "z", "angle": 45"#);
        assert!(SceneDescription::from_json(&axis).is_err());

        let mesh = SCENE.replace(
            r#"{ "type": "triangle", "material": "green", "vertices": [[0, 0, 5], [1, 0, 5], [0, 1, 5]] }"#,
            r#"{ "type": "mesh", "material": "green", "path": "m.obj", "ofset": [1, 0, 0] }"#,
        );
        assert!(SceneDescription::from_json(&mesh).is_err());
    }

    #[test]
    fn misspelled_material_light_and_camera_keys_fail_to_parse() {
        let material = SCENE.replace(r#""shininess": 10"#, r#""shinyness": 10"#);
        assert!(SceneDescription::from_json(&material).is_err());

        let light = SCENE.replace(r#""position": [0, 50, 0]"#, r#""position": [0, 50, 0], "range": 5"#);
        assert!(SceneDescription::from_json(&light).is_err());

        let camera = SCENE.replace(r#""fov": 60"#, r#""fov": 60, "zoom": 2"#);
        assert!(SceneDescription::from_json(&camera).is_err());
    }

    #[test]
    fn unknown_object_type_fails_to_parse() {
        let json = SCENE.replace(r#""type": "sphere""#, r#""type": "torus""#);

        assert!(SceneDescription::from_json(&json).is_err());
    }
}
