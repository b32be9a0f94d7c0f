//! Planar points, the keys of the spatial symbol tables.

use std::fmt;

/// A point in the plane with `f64` coordinates.
///
/// Points are immutable values; equality is exact coordinate equality
/// (IEEE `==`), with no tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    x: f64,
    y: f64,
}

impl Point2D {
    /// Creates a point from its coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The x coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Squared distances order the same way as true distances and avoid the
    /// square root, so every distance comparison in this crate uses them.
    #[inline]
    pub fn distance_squared_to(&self, other: Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Whether both coordinates are finite (neither NaN nor infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
