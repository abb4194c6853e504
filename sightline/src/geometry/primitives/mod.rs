mod cone;
mod ellipsoid;
mod line;
mod line_string;
mod plane;
mod point;
mod point_set;
mod polygon;
mod pyramid;
mod ray;
mod segment;
mod sphere;

#[doc(inline)]
pub use cone::Cone;
#[doc(inline)]
pub use ellipsoid::Ellipsoid;
#[doc(inline)]
pub use line::Line;
#[doc(inline)]
pub use line_string::LineString;
#[doc(inline)]
pub use plane::Plane;
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use point_set::PointSet;
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use pyramid::Pyramid;
#[doc(inline)]
pub use ray::Ray;
#[doc(inline)]
pub use segment::Segment;
#[doc(inline)]
pub use sphere::Sphere;
