//! Mesh points.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A point of the mesh point set.
///
/// Points are created in bulk by the loader, rescaled once into the unit
/// box, and never move afterwards. Elements refer to them by 0-based
/// index; a point never owns elements.
///
/// # Example
///
/// ```
/// use tetview_types::Point;
///
/// let a = Point::new(0.0, 0.0, 0.0);
/// let b = Point::new(3.0, 4.0, 0.0);
/// assert!((a.distance_from(&b) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Point {
    /// Create a point from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
        }
    }

    /// X coordinate.
    #[inline]
    #[must_use]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// Y coordinate.
    #[inline]
    #[must_use]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Z coordinate.
    #[inline]
    #[must_use]
    pub fn z(&self) -> f64 {
        self.position.z
    }

    /// Euclidean distance to another point.
    ///
    /// Symmetric, and zero exactly when the coordinates are equal.
    ///
    /// # Example
    ///
    /// ```
    /// use tetview_types::Point;
    ///
    /// let a = Point::new(1.0, 2.0, 3.0);
    /// let b = Point::new(1.0, 2.0, 3.0);
    /// assert_eq!(a.distance_from(&b), 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance_from(&self, other: &Self) -> f64 {
        (self.position - other.position).norm()
    }

    /// Shift the point by the given offset in place.
    #[inline]
    pub fn translate(&mut self, offset: Vector3<f64>) {
        self.position += offset;
    }

    /// Divide all three coordinates by `scale` in place.
    ///
    /// Used once, globally, by the loader when it rescales the point set
    /// into the unit box.
    #[inline]
    pub fn normalize(&mut self, scale: f64) {
        self.position.coords /= scale;
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
        }
    }
}

impl From<Point3<f64>> for Point {
    fn from(position: Point3<f64>) -> Self {
        Self { position }
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}
