//! Axis-aligned rectangles: query windows and subtree bounding regions.

use std::fmt;

use crate::point::Point2D;

/// An axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// All four boundaries are inclusive: [`contains`](Rect::contains) accepts
/// points on an edge and [`intersects`](Rect::intersects) counts rectangles
/// that merely touch. Bounds may be infinite (the whole plane is
/// [`Rect::EVERYTHING`]); a well-formed rectangle has `xmin <= xmax` and
/// `ymin <= ymax` with no NaN bound. Construction does not validate, the
/// query operations reject malformed rectangles instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl Rect {
    /// The rectangle covering the entire plane.
    pub const EVERYTHING: Self = Self {
        xmin: f64::NEG_INFINITY,
        ymin: f64::NEG_INFINITY,
        xmax: f64::INFINITY,
        ymax: f64::INFINITY,
    };

    /// Creates a rectangle from its bounds, taken as given.
    pub const fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Lower x bound.
    #[inline]
    pub const fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Lower y bound.
    #[inline]
    pub const fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Upper x bound.
    #[inline]
    pub const fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Upper y bound.
    #[inline]
    pub const fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Whether `p` lies inside the rectangle, boundaries included.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x() >= self.xmin && p.x() <= self.xmax && p.y() >= self.ymin && p.y() <= self.ymax
    }

    /// Whether the two rectangles share at least one point.
    ///
    /// Touching edges or corners count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmin <= other.xmax
            && other.xmin <= self.xmax
            && self.ymin <= other.ymax
            && other.ymin <= self.ymax
    }

    /// Squared distance from `p` to the closest point of the rectangle.
    ///
    /// Zero when `p` is inside or on the boundary.
    #[inline]
    pub fn distance_squared_to(&self, p: Point2D) -> f64 {
        let dx = axis_distance(p.x(), self.xmin, self.xmax);
        let dy = axis_distance(p.y(), self.ymin, self.ymax);
        dx * dx + dy * dy
    }

    /// Whether the bounds are ordered and free of NaN.
    ///
    /// `<=` is false whenever either side is NaN, so one comparison per axis
    /// covers both conditions.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.xmin <= self.xmax && self.ymin <= self.ymax
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

/// Distance from a coordinate to the interval `[min, max]` along one axis.
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
