use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::error::{GeomError, Result};
use crate::geometry::primitives::{
    Ellipsoid, Line, LineString, Plane, Point, PointSet, Ray, Segment, Sphere,
};

/// Classification of an [`Intersection`]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IntersectionType {
    Undefined,
    Empty,
    Point,
    PointSet,
    Line,
    Ray,
    Segment,
    LineString,
    Plane,
    Sphere,
    Ellipsoid,
    /// Heterogeneous collection of objects
    Complex,
}

impl Display for IntersectionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Any geometric object an [`Intersection`] can hold
#[derive(Clone, Debug, PartialEq)]
pub enum Object {
    Point(Point),
    PointSet(PointSet),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    LineString(LineString),
    Plane(Plane),
    Sphere(Sphere),
    Ellipsoid(Ellipsoid),
}

impl Object {
    pub fn kind(&self) -> IntersectionType {
        match self {
            Object::Point(_) => IntersectionType::Point,
            Object::PointSet(_) => IntersectionType::PointSet,
            Object::Line(_) => IntersectionType::Line,
            Object::Ray(_) => IntersectionType::Ray,
            Object::Segment(_) => IntersectionType::Segment,
            Object::LineString(_) => IntersectionType::LineString,
            Object::Plane(_) => IntersectionType::Plane,
            Object::Sphere(_) => IntersectionType::Sphere,
            Object::Ellipsoid(_) => IntersectionType::Ellipsoid,
        }
    }

    fn is_pointlike(&self) -> bool {
        matches!(self, Object::Point(_) | Object::PointSet(_))
    }
}

/// Result of an `intersection_with` query.
///
/// Owns every object it reports, its [`IntersectionType`] is derived from them on construction.
#[derive(Clone, Debug)]
pub struct Intersection {
    kind: IntersectionType,
    objects: Vec<Object>,
}

impl Intersection {
    pub fn undefined() -> Self {
        Intersection {
            kind: IntersectionType::Undefined,
            objects: vec![],
        }
    }

    pub fn empty() -> Self {
        Intersection {
            kind: IntersectionType::Empty,
            objects: vec![],
        }
    }

    pub fn point(point: Point) -> Self {
        Self::of(point)
    }

    /// An empty set yields [`Intersection::empty`]
    pub fn point_set(point_set: PointSet) -> Self {
        match point_set.is_empty() {
            true => Self::empty(),
            false => Self::of(point_set),
        }
    }

    pub fn line(line: Line) -> Self {
        Self::of(line)
    }

    pub fn ray(ray: Ray) -> Self {
        Self::of(ray)
    }

    pub fn segment(segment: Segment) -> Self {
        Self::of(segment)
    }

    pub fn line_string(line_string: LineString) -> Self {
        Self::of(line_string)
    }

    pub fn plane(plane: Plane) -> Self {
        Self::of(plane)
    }

    pub fn sphere(sphere: Sphere) -> Self {
        Self::of(sphere)
    }

    pub fn ellipsoid(ellipsoid: Ellipsoid) -> Self {
        Self::of(ellipsoid)
    }

    /// Wraps a single object
    pub fn of<T: IntersectionObject>(object: T) -> Self {
        Self::from_objects(vec![object.into_object()])
    }

    pub fn from_objects(objects: Vec<Object>) -> Self {
        Intersection {
            kind: kind_from_objects(&objects),
            objects,
        }
    }

    pub fn is_defined(&self) -> bool {
        self.kind != IntersectionType::Undefined
    }

    pub fn is_empty(&self) -> bool {
        self.kind == IntersectionType::Empty
    }

    pub fn kind(&self) -> IntersectionType {
        self.kind
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// True if the intersection holds exactly a `T`
    pub fn is<T: IntersectionObject>(&self) -> bool {
        self.kind == T::KIND
    }

    /// Extracts the held geometry as a `T`, failing if the intersection holds something else
    pub fn get<T: IntersectionObject>(&self) -> Result<T> {
        let mismatch = || GeomError::TypeMismatch {
            expected: T::KIND,
            actual: self.kind,
        };
        if !self.is::<T>() {
            return Err(mismatch());
        }
        T::from_objects(&self.objects).ok_or_else(mismatch)
    }

    /// All points of a [`IntersectionType::Point`] or [`IntersectionType::PointSet`] intersection, flattened
    fn flat_points(&self) -> PointSet {
        self.objects
            .iter()
            .flat_map(|o| match o {
                Object::Point(p) => vec![*p],
                Object::PointSet(ps) => ps.points().to_vec(),
                _ => vec![],
            })
            .collect()
    }
}

/// Derives the type of a list of objects.
/// None is [`IntersectionType::Empty`], one is that object's type, several points are a
/// [`IntersectionType::PointSet`], anything else is [`IntersectionType::Complex`].
fn kind_from_objects(objects: &[Object]) -> IntersectionType {
    match objects {
        [] => IntersectionType::Empty,
        [single] => single.kind(),
        many if many.iter().all(Object::is_pointlike) => IntersectionType::PointSet,
        _ => IntersectionType::Complex,
    }
}

impl Default for Intersection {
    fn default() -> Self {
        Self::undefined()
    }
}

impl PartialEq for Intersection {
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() || self.kind != other.kind {
            return false;
        }
        match self.kind {
            IntersectionType::Empty => true,
            IntersectionType::PointSet => self.flat_points() == other.flat_points(),
            _ => self.objects == other.objects,
        }
    }
}

impl Add for Intersection {
    type Output = Intersection;

    fn add(mut self, other: Intersection) -> Intersection {
        if !self.is_defined() || !other.is_defined() {
            return Intersection::undefined();
        }
        self.objects.extend(other.objects);
        Intersection::from_objects(self.objects)
    }
}

/// Geometry which can be stored in, and extracted from, an [`Intersection`]
pub trait IntersectionObject: Sized {
    const KIND: IntersectionType;

    fn into_object(self) -> Object;

    /// Rebuilds the value from the objects of an intersection of type [`Self::KIND`]
    fn from_objects(objects: &[Object]) -> Option<Self>;
}

macro_rules! single_object {
    ($ty:ident) => {
        impl IntersectionObject for $ty {
            const KIND: IntersectionType = IntersectionType::$ty;

            fn into_object(self) -> Object {
                Object::$ty(self)
            }

            fn from_objects(objects: &[Object]) -> Option<Self> {
                match objects {
                    [Object::$ty(value)] => Some(value.clone()),
                    _ => None,
                }
            }
        }
    };
}

single_object!(Point);
single_object!(Line);
single_object!(Ray);
single_object!(Segment);
single_object!(LineString);
single_object!(Plane);
single_object!(Sphere);
single_object!(Ellipsoid);

impl IntersectionObject for PointSet {
    const KIND: IntersectionType = IntersectionType::PointSet;

    fn into_object(self) -> Object {
        Object::PointSet(self)
    }

    fn from_objects(objects: &[Object]) -> Option<Self> {
        objects
            .iter()
            .map(|o| match o {
                Object::Point(p) => Some(vec![*p]),
                Object::PointSet(ps) => Some(ps.points().to_vec()),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .map(|points| points.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        let p = Point(1.0, 0.0, 0.0);
        let q = Point(0.0, 1.0, 0.0);
        assert_eq!(Intersection::from_objects(vec![]).kind(), IntersectionType::Empty);
        assert_eq!(Intersection::point(p).kind(), IntersectionType::Point);
        assert_eq!(
            Intersection::from_objects(vec![Object::Point(p), Object::Point(q)]).kind(),
            IntersectionType::PointSet
        );
        assert_eq!(
            Intersection::from_objects(vec![Object::Point(p), Object::Line(Line::through(p, q))])
                .kind(),
            IntersectionType::Complex
        );
        assert_eq!(Intersection::point_set(PointSet::empty()).kind(), IntersectionType::Empty);
    }

    #[test]
    fn merge() {
        let p = Intersection::point(Point(1.0, 0.0, 0.0));
        let q = Intersection::point(Point(0.0, 1.0, 0.0));
        let merged = p.clone() + q;
        assert_eq!(merged.kind(), IntersectionType::PointSet);
        assert_eq!(merged.get::<PointSet>().unwrap().size(), 2);
        assert_eq!(p.clone() + Intersection::empty(), p);
        assert!(!(p + Intersection::undefined()).is_defined());
    }

    #[test]
    fn typed_access() {
        let i = Intersection::point(Point(1.0, 2.0, 3.0));
        assert!(i.is::<Point>());
        assert!(!i.is::<Segment>());
        assert_eq!(i.get::<Point>().unwrap(), Point(1.0, 2.0, 3.0));
        assert_eq!(
            i.get::<Segment>(),
            Err(GeomError::TypeMismatch {
                expected: IntersectionType::Segment,
                actual: IntersectionType::Point
            })
        );
    }

    #[test]
    fn sentinel_equality() {
        assert_ne!(Intersection::undefined(), Intersection::undefined());
        assert_eq!(Intersection::empty(), Intersection::empty());
        assert_ne!(Intersection::empty(), Intersection::undefined());
    }

    #[test]
    fn point_sets_compare_as_sets() {
        let p = Point(1.0, 0.0, 0.0);
        let q = Point(0.0, 1.0, 0.0);
        let a = Intersection::point_set(PointSet::new([p, q]));
        let b = Intersection::from_objects(vec![Object::Point(q), Object::Point(p)]);
        assert_eq!(a, b);
    }
}
