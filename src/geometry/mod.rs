use crate::{intersection::Intersection, material::Material, ray::Ray};

mod mesh;
mod oriented_box;
mod plane;
mod sphere;
mod triangle;

pub use self::mesh::TriangleMesh;
pub use self::oriented_box::OrientedBox;
pub use self::plane::Plane;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

/// Surface that can be tested against a ray.
pub trait Geometry: Sync {
    fn material(&self) -> &Material;

    /// Returns every hit in front of the ray origin, in no particular order.
    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>>;
}

/// Every kind of object a scene may contain.
#[derive(Clone, Debug)]
pub enum Primitive {
    Plane(Plane),
    Sphere(Sphere),
    Box(OrientedBox),
    Triangle(Triangle),
    Mesh(TriangleMesh),
}

impl Primitive {
    #[inline]
    fn geometry(&self) -> &dyn Geometry {
        match self {
            Primitive::Plane(v) => v,
            Primitive::Sphere(v) => v,
            Primitive::Box(v) => v,
            Primitive::Triangle(v) => v,
            Primitive::Mesh(v) => v,
        }
    }
}

impl Geometry for Primitive {
    fn material(&self) -> &Material {
        self.geometry().material()
    }

    fn ray_test<'a>(&'a self, ray: &'a Ray) -> Vec<Intersection<'a>> {
        self.geometry().ray_test(ray)
    }
}

impl From<Plane> for Primitive {
    fn from(v: Plane) -> Self {
        Primitive::Plane(v)
    }
}

impl From<Sphere> for Primitive {
    fn from(v: Sphere) -> Self {
        Primitive::Sphere(v)
    }
}

impl From<OrientedBox> for Primitive {
    fn from(v: OrientedBox) -> Self {
        Primitive::Box(v)
    }
}

impl From<Triangle> for Primitive {
    fn from(v: Triangle) -> Self {
        Primitive::Triangle(v)
    }
}

impl From<TriangleMesh> for Primitive {
    fn from(v: TriangleMesh) -> Self {
        Primitive::Mesh(v)
    }
}
