//! # kdmap - 2D-Tree Point Symbol Table
//!
//! A Rust library mapping points in the plane to arbitrary values, with
//! range search and nearest-neighbor search backed by a 2D-tree.
//!
//! ## Features
//!
//! - **2D-Tree Index**: Alternating x/y splits with per-subtree bounding
//!   regions, so spatial queries skip most of the tree
//! - **Range Search**: All stored points inside an axis-aligned rectangle,
//!   boundaries included
//! - **Nearest Neighbor**: The stored point closest to a query point in
//!   Euclidean distance
//! - **Brute-Force Baseline**: [`PointMap`] answers the same queries by
//!   linear scan, for cross-checking and benchmarking
//!
//! ## Quick Start
//!
//! ```rust
//! use kdmap::prelude::*;
//!
//! # fn main() -> Result<(), SpatialError> {
//! // Create a new symbol table keyed by points
//! let mut tree = KdTreeMap::new();
//!
//! // Associate values with points; re-inserting a point replaces its value
//! tree.put(Point2D::new(0.7, 0.2), "a")?;
//! tree.put(Point2D::new(0.5, 0.4), "b")?;
//! tree.put(Point2D::new(0.2, 0.3), "c")?;
//! tree.put(Point2D::new(0.4, 0.7), "d")?;
//! tree.put(Point2D::new(0.9, 0.6), "e")?;
//!
//! // Look up a point
//! assert_eq!(tree.get(Point2D::new(0.2, 0.3))?, Some(&"c"));
//!
//! // All points inside a rectangle (boundaries count)
//! let inside = tree.range(Rect::new(0.0, 0.0, 0.5, 0.5))?;
//! assert_eq!(inside.len(), 2);
//!
//! // The stored point closest to a query point
//! let closest = tree.nearest(Point2D::new(0.6, 0.5))?;
//! assert_eq!(closest, Some(Point2D::new(0.5, 0.4)));
//! # Ok(())
//! # }
//! ```
//!
//! ## How It Works
//!
//! The tree cuts the plane with a vertical line through its root point;
//! each level below alternates between horizontal and vertical cuts. Every
//! node records the rectangular region its subtree can occupy, fixed when
//! the node is inserted. Range search descends only into subtrees whose
//! region intersects the query rectangle, and nearest-neighbor search
//! descends only into subtrees whose region could still hold a closer point
//! than the best one found so far.
//!
//! Insertion order determines the tree's shape: the tree is never
//! rebalanced, so shuffled input keeps queries fast while sorted input
//! degrades them toward linear scans. [`PointMap`] is the unaccelerated
//! reference to compare against.

pub mod error;
pub mod kdtree;
pub mod point;
pub mod point_map;
pub mod prelude;
pub mod rect;

pub use error::SpatialError;
pub use kdtree::KdTreeMap;
pub use point::Point2D;
pub use point_map::PointMap;
pub use rect::Rect;
