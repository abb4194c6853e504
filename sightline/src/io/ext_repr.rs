use serde::{Deserialize, Serialize};

use crate::geometry::IntersectionType;

/// Cartesian coordinates `[x, y, z]`
pub type ExtVector = [f64; 3];

/// External representation of every geometric primitive
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ExtPrimitive {
    Point(ExtVector),
    PointSet(Vec<ExtVector>),
    Line {
        origin: ExtVector,
        direction: ExtVector,
    },
    Ray {
        origin: ExtVector,
        direction: ExtVector,
    },
    Segment {
        first: ExtVector,
        second: ExtVector,
    },
    LineString(Vec<ExtVector>),
    Plane {
        point: ExtVector,
        normal: ExtVector,
    },
    Polygon(ExtPolygon),
    Sphere {
        center: ExtVector,
        radius: f64,
    },
    Ellipsoid {
        center: ExtVector,
        /// Semi-axes `[a, b, c]` along the body x, y and z axes
        semi_axes: ExtVector,
        /// Body-to-world rotation quaternion, scalar first `[w, x, y, z]`.
        /// Identity if not specified
        #[serde(default = "identity_quaternion")]
        orientation: [f64; 4],
    },
    Cone {
        apex: ExtVector,
        axis: ExtVector,
        /// Half-angle in radians
        angle: f64,
    },
    Pyramid {
        base: ExtPolygon,
        apex: ExtVector,
    },
}

/// External representation of a [`Polygon`](crate::geometry::primitives::Polygon).
/// 2D vertices embedded in 3D through the frame (`origin`, `x_axis`, `y_axis`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPolygon {
    pub vertices: Vec<(f64, f64)>,
    pub origin: ExtVector,
    pub x_axis: ExtVector,
    pub y_axis: ExtVector,
}

/// The query to evaluate between a subject and a target
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExtOperation {
    Intersects,
    Contains,
    IntersectionWith,
}

/// A single query: `subject.operation(target)`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtQuery {
    pub subject: ExtPrimitive,
    pub target: ExtPrimitive,
    pub operation: ExtOperation,
}

/// External representation of an [`Intersection`](crate::geometry::Intersection)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtIntersection {
    #[serde(rename = "type")]
    pub kind: IntersectionType,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub objects: Vec<ExtPrimitive>,
}

/// Outcome of an [`ExtQuery`]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ExtAnswer {
    /// Outcome of [`ExtOperation::Intersects`] and [`ExtOperation::Contains`]
    Boolean(bool),
    /// Outcome of [`ExtOperation::IntersectionWith`]
    Intersection(ExtIntersection),
}

fn identity_quaternion() -> [f64; 4] {
    [1.0, 0.0, 0.0, 0.0]
}
