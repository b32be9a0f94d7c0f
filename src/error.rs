//! Error type shared by the spatial symbol tables.

use thiserror::Error;

use crate::point::Point2D;
use crate::rect::Rect;

/// Errors reported by the spatial symbol tables.
///
/// Every variant is an invalid-argument condition. Operations on well-formed
/// input never fail, and a rejected argument leaves the map untouched.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// A point argument had a NaN or infinite coordinate.
    #[error("point {point} has a non-finite coordinate")]
    NonFinitePoint {
        /// The offending point, as passed in.
        point: Point2D,
    },
    /// A query rectangle had a NaN bound or reversed bounds.
    #[error("query rectangle {rect} is malformed")]
    MalformedRect {
        /// The offending rectangle, as passed in.
        rect: Rect,
    },
}

/// Rejects points no operation can answer meaningfully.
pub(crate) fn check_point(point: Point2D) -> Result<(), SpatialError> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(SpatialError::NonFinitePoint { point })
    }
}

/// Rejects rectangles that violate the bound invariants.
pub(crate) fn check_rect(rect: Rect) -> Result<(), SpatialError> {
    if rect.is_well_formed() {
        Ok(())
    } else {
        Err(SpatialError::MalformedRect { rect })
    }
}
