//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use kdmap::prelude::*;
//! ```

pub use crate::KdTreeMap;
pub use crate::Point2D;
pub use crate::PointMap;
pub use crate::Rect;
pub use crate::SpatialError;
