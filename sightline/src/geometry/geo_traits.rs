use crate::Result;
use crate::geometry::Intersection;
use crate::geometry::Transformation;
use crate::util::SamplingConfig;
use nalgebra::{UnitQuaternion, Vector3};

/// Trait for values carrying an "undefined" sentinel state.
///
/// Every query first checks that all of its operands are defined.
pub trait Defined {
    /// True if all scalar and vector members are finite and set
    fn is_defined(&self) -> bool;
}

/// Trait for types that can detect intersections between `Self` and `T`.
pub trait Intersects<T> {
    fn intersects(&self, other: &T) -> Result<bool>;
}

/// Trait for types that can detect whether `T` lies within `Self`.
pub trait Contains<T> {
    fn contains(&self, other: &T) -> Result<bool>;
}

/// Trait for types that can compute the full intersection between `Self` and `T`.
pub trait IntersectionWith<T> {
    fn intersection_with(&self, other: &T) -> Result<Intersection>;
}

/// Trait for solids whose intersection with `T` has no closed form and is approximated
/// by sampling rays of their lateral surface.
pub trait SampledIntersection<T> {
    /// Short-circuits on the first sampled ray that hits `other`.
    fn intersects_sampled(&self, other: &T, discretization_level: usize) -> Result<bool>;

    /// Assembles the sampled hits into a polyline (or a point, or nothing).
    fn intersection_with_sampled(&self, other: &T, config: SamplingConfig) -> Result<Intersection>;
}

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone + Defined {
    /// Maps every defining point and vector of `self` through `t`.
    fn apply_transformation(&mut self, t: &Transformation) -> Result<&mut Self>;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Result<Self> {
        let mut clone = self.clone();
        clone.apply_transformation(t)?;
        Ok(clone)
    }

    fn translate(&mut self, translation: &Vector3<f64>) -> Result<&mut Self> {
        self.apply_transformation(&Transformation::from_translation(*translation))
    }

    /// Rotates `self` around the origin of the reference frame.
    fn rotate(&mut self, rotation: &UnitQuaternion<f64>) -> Result<&mut Self> {
        self.apply_transformation(&Transformation::from_rotation(*rotation))
    }
}
