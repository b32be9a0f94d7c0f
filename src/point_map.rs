//! Brute-force baseline: an ordered map over points with linear-scan
//! queries.
//!
//! [`PointMap`] answers the same questions as [`KdTreeMap`](crate::KdTreeMap)
//! with none of the spatial machinery, so it serves as the oracle in
//! equivalence tests and the yardstick in benchmarks. Its `range` and
//! `nearest` touch every stored point.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::error::{check_point, check_rect, SpatialError};
use crate::point::Point2D;
use crate::rect::Rect;

/// `BTreeMap` key ordering points bottom to top, then left to right.
///
/// Only finite points are ever stored, and over finite floats IEEE
/// comparison is total and agrees with `==`, so the `unwrap_or` arms below
/// are unreachable.
#[derive(Clone, Copy, Debug)]
struct MapKey(Point2D);

impl Ord for MapKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .y()
            .partial_cmp(&other.0.y())
            .unwrap_or(Ordering::Equal)
            .then(
                self.0
                    .x()
                    .partial_cmp(&other.0.x())
                    .unwrap_or(Ordering::Equal),
            )
    }
}

impl PartialOrd for MapKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MapKey {}

/// A point-keyed symbol table with no spatial acceleration.
///
/// Same contract as [`KdTreeMap`](crate::KdTreeMap), including argument
/// validation, but backed by an ordered map: `get` and `contains` are
/// ordinary lookups while `range` and `nearest` scan every stored point.
///
/// # Examples
///
/// ```
/// use kdmap::{Point2D, PointMap, Rect};
///
/// # fn main() -> Result<(), kdmap::SpatialError> {
/// let mut flat = PointMap::new();
/// flat.put(Point2D::new(0.1, 0.4), 7)?;
/// flat.put(Point2D::new(0.6, 0.8), 8)?;
///
/// let inside = flat.range(Rect::new(0.0, 0.0, 0.5, 0.5))?;
/// assert_eq!(inside, vec![Point2D::new(0.1, 0.4)]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct PointMap<V> {
    entries: BTreeMap<MapKey, V>,
}

impl<V> PointMap<V> {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of distinct points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `point` with `value`, replacing the value if the point is
    /// already present.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite;
    /// the map is left unchanged.
    pub fn put(&mut self, point: Point2D, value: V) -> Result<(), SpatialError> {
        check_point(point)?;
        let _previous = self.entries.insert(MapKey(point), value);
        Ok(())
    }

    /// Returns the value stored at `point`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn get(&self, point: Point2D) -> Result<Option<&V>, SpatialError> {
        check_point(point)?;
        Ok(self.entries.get(&MapKey(point)))
    }

    /// Whether `point` is stored in the map.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn contains(&self, point: Point2D) -> Result<bool, SpatialError> {
        check_point(point)?;
        Ok(self.entries.contains_key(&MapKey(point)))
    }

    /// All stored points, bottom to top and left to right within a row.
    pub fn points(&self) -> Vec<Point2D> {
        self.entries.keys().map(|key| key.0).collect()
    }

    /// All stored points inside `rect`, boundaries included, by scanning
    /// every point.
    ///
    /// # Errors
    ///
    /// [`SpatialError::MalformedRect`] if `rect` has a NaN bound or
    /// reversed bounds.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point2D>, SpatialError> {
        check_rect(rect)?;
        Ok(self
            .entries
            .keys()
            .map(|key| key.0)
            .filter(|point| rect.contains(*point))
            .collect())
    }

    /// The stored point closest to `query` in Euclidean distance, or `None`
    /// for an empty map, by scanning every point.
    ///
    /// When several points tie for closest, which one is returned is
    /// unspecified.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn nearest(&self, query: Point2D) -> Result<Option<Point2D>, SpatialError> {
        check_point(query)?;
        let mut champion = None;
        let mut champion_dist = f64::INFINITY;
        for key in self.entries.keys() {
            let dist = key.0.distance_squared_to(query);
            // dist can overflow to infinity for far-apart finite points,
            // which would never beat the infinite seed
            if champion.is_none() || dist < champion_dist {
                champion = Some(key.0);
                champion_dist = dist;
            }
        }
        Ok(champion)
    }
}

impl<V> Default for PointMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
