use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};

use crate::error::{GeomError, Result};
use crate::geometry::geo_traits::Defined;
use crate::geometry::primitives::Point;
use crate::util::tolerance::DIRECTION_TOLERANCE;

#[derive(Clone, Copy, Debug, PartialEq)]
///Proper rigid transformation: a rotation followed by a translation
pub struct Transformation {
    rotation: UnitQuaternion<f64>,
    translation: Vector3<f64>,
}

impl Transformation {
    pub fn identity() -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation: Vector3::zeros(),
        }
    }

    pub fn undefined() -> Self {
        Self {
            rotation: UnitQuaternion::new_unchecked(Quaternion::new(
                f64::NAN,
                f64::NAN,
                f64::NAN,
                f64::NAN,
            )),
            translation: Vector3::repeat(f64::NAN),
        }
    }

    pub fn from_translation(translation: Vector3<f64>) -> Self {
        Self {
            rotation: UnitQuaternion::identity(),
            translation,
        }
    }

    pub fn from_rotation(rotation: UnitQuaternion<f64>) -> Self {
        Self {
            rotation,
            translation: Vector3::zeros(),
        }
    }

    /// Rotation of `angle` radians around `axis` (right-hand rule).
    pub fn from_rotation_vector(axis: Vector3<f64>, angle: f64) -> Result<Self> {
        if !axis.iter().all(|c| c.is_finite()) || !angle.is_finite() {
            return Err(GeomError::Undefined("Rotation vector"));
        }
        let axis = Unit::try_new(axis, DIRECTION_TOLERANCE).ok_or_else(|| {
            GeomError::InvalidArgument(format!("rotation axis {axis:?} has no direction"))
        })?;
        Ok(Self::from_rotation(UnitQuaternion::from_axis_angle(
            &axis, angle,
        )))
    }

    /// Applies `rotation` after `self`
    pub fn rotate(mut self, rotation: UnitQuaternion<f64>) -> Self {
        self.rotation = rotation * self.rotation;
        self.translation = rotation * self.translation;
        self
    }

    /// Applies `translation` after `self`
    pub fn translate(mut self, translation: Vector3<f64>) -> Self {
        self.translation += translation;
        self
    }

    /// Applies `other` after `self`
    pub fn then(self, other: &Self) -> Self {
        self.rotate(other.rotation).translate(other.translation)
    }

    pub fn inverse(mut self) -> Self {
        self.rotation = self.rotation.inverse();
        self.translation = -(self.rotation * self.translation);
        self
    }

    pub fn rotation(&self) -> &UnitQuaternion<f64> {
        &self.rotation
    }

    pub fn translation(&self) -> &Vector3<f64> {
        &self.translation
    }

    pub fn apply_to_point(&self, point: &Point) -> Point {
        Point::from(self.rotation * point.as_vector() + self.translation)
    }

    /// Directions are only rotated, never translated.
    pub fn apply_to_vector(&self, vector: &Vector3<f64>) -> Vector3<f64> {
        self.rotation * vector
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Defined for Transformation {
    fn is_defined(&self) -> bool {
        self.rotation.coords.iter().all(|c| c.is_finite())
            && self.translation.iter().all(|c| c.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn quarter_turn_around_x() {
        let t = Transformation::from_rotation_vector(Vector3::x(), FRAC_PI_2).unwrap();
        let p = t.apply_to_point(&Point(0.0, 2.0, 0.0));
        assert!(p.is_near(&Point(0.0, 0.0, 2.0), 1e-12).unwrap());
    }

    #[test]
    fn composition_and_inverse() {
        let t = Transformation::from_rotation_vector(Vector3::z(), 0.3)
            .unwrap()
            .translate(Vector3::new(1.0, -2.0, 3.0));
        let p = Point(0.5, 0.25, -4.0);
        let back = t.inverse().apply_to_point(&t.apply_to_point(&p));
        assert!(back.is_near(&p, 1e-12).unwrap());

        let twice = t.then(&t);
        let expected = t.apply_to_point(&t.apply_to_point(&p));
        assert!(twice.apply_to_point(&p).is_near(&expected, 1e-12).unwrap());
    }

    #[test]
    fn undefined_transformation() {
        assert!(!Transformation::undefined().is_defined());
        assert!(Transformation::identity().is_defined());
        assert!(Transformation::from_rotation_vector(Vector3::zeros(), 1.0).is_err());
    }
}
