//! The 2D-tree point symbol table.
//!
//! A 2D-tree is a binary search tree over points in the plane. Levels
//! alternate the splitting axis: the root splits on x (a vertical line
//! through its point), its children split on y, and so on. A point whose
//! coordinate on the current axis is strictly less than the node's goes
//! left; greater or equal goes right.
//!
//! Each node also stores the axis-aligned region of the plane its subtree
//! can occupy, fixed once at insertion by clamping the parent's region at
//! the parent's splitting line. Range search skips any subtree whose region
//! misses the query rectangle, and nearest-neighbor search skips any
//! subtree whose region cannot beat the best point found so far.
//!
//! The tree is never rebalanced, so adversarial insertion orders degrade
//! queries toward linear time. Shuffled input keeps the expected depth
//! logarithmic.

use std::collections::VecDeque;

use crate::error::{check_point, check_rect, SpatialError};
use crate::point::Point2D;
use crate::rect::Rect;

/// Arena index of the root node, valid whenever the arena is non-empty.
const ROOT: usize = 0;

/// One tree node. Nodes live in the arena and link children by index.
#[derive(Clone, Debug)]
struct Node<V> {
    point: Point2D,
    value: V,
    /// Region of the plane this node's subtree can occupy. Set at insertion
    /// and never updated.
    region: Rect,
    /// `true` splits on x (children ordered by x around a vertical line),
    /// `false` splits on y.
    vertical: bool,
    left: Option<usize>,
    right: Option<usize>,
}

/// A point-keyed symbol table backed by a 2D-tree.
///
/// Maps distinct [`Point2D`] keys to values of type `V` and answers the two
/// spatial queries an ordered map cannot: all points inside an axis-aligned
/// rectangle ([`range`](KdTreeMap::range)) and the closest point to a query
/// point ([`nearest`](KdTreeMap::nearest)). Inserting an already-present
/// point replaces its value.
///
/// # Examples
///
/// ```
/// use kdmap::{KdTreeMap, Point2D};
///
/// # fn main() -> Result<(), kdmap::SpatialError> {
/// let mut sites = KdTreeMap::new();
/// sites.put(Point2D::new(0.2, 0.8), "north-west")?;
/// sites.put(Point2D::new(0.9, 0.1), "south-east")?;
///
/// let hit = sites.nearest(Point2D::new(1.0, 0.0))?;
/// assert_eq!(hit, Some(Point2D::new(0.9, 0.1)));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct KdTreeMap<V> {
    /// Node arena; index 0 is the root when non-empty. Nodes are never
    /// removed, so `nodes.len()` is the stored point count.
    nodes: Vec<Node<V>>,
}

impl<V> KdTreeMap<V> {
    /// Creates an empty map.
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty map with room for `capacity` points before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Number of distinct points stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the map holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `point` with `value`, replacing the value if the point is
    /// already present.
    ///
    /// Replacement does not disturb the tree: the node keeps its position,
    /// orientation and region.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite;
    /// the map is left unchanged.
    pub fn put(&mut self, point: Point2D, value: V) -> Result<(), SpatialError> {
        check_point(point)?;
        if self.nodes.is_empty() {
            self.nodes.push(Node {
                point,
                value,
                region: Rect::EVERYTHING,
                vertical: true,
                left: None,
                right: None,
            });
            return Ok(());
        }
        let at = self.descend(point, ROOT);
        if self.nodes[at].point == point {
            self.nodes[at].value = value;
            return Ok(());
        }
        // `descend` stopped at a node missing the child on `point`'s side.
        let parent = &self.nodes[at];
        let go_left = axis_delta(point, parent.point, parent.vertical) < 0.0;
        let child = Node {
            point,
            value,
            region: child_region(parent.region, parent.point, parent.vertical, go_left),
            vertical: !parent.vertical,
            left: None,
            right: None,
        };
        let index = self.nodes.len();
        self.nodes.push(child);
        if go_left {
            self.nodes[at].left = Some(index);
        } else {
            self.nodes[at].right = Some(index);
        }
        Ok(())
    }

    /// Returns the value stored at `point`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn get(&self, point: Point2D) -> Result<Option<&V>, SpatialError> {
        check_point(point)?;
        if self.nodes.is_empty() {
            return Ok(None);
        }
        let node = &self.nodes[self.descend(point, ROOT)];
        Ok((node.point == point).then_some(&node.value))
    }

    /// Whether `point` is stored in the map.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn contains(&self, point: Point2D) -> Result<bool, SpatialError> {
        check_point(point)?;
        if self.nodes.is_empty() {
            return Ok(false);
        }
        Ok(self.nodes[self.descend(point, ROOT)].point == point)
    }

    /// All stored points in level order: the root first, then its children
    /// left to right, then theirs.
    ///
    /// Level order makes the tree shape visible, and feeding the sequence
    /// back into an empty map rebuilds an identical tree. Empty map, empty
    /// sequence.
    pub fn points(&self) -> Vec<Point2D> {
        let mut points = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return points;
        }
        let mut queue = VecDeque::new();
        queue.push_back(ROOT);
        while let Some(at) = queue.pop_front() {
            let node = &self.nodes[at];
            points.push(node.point);
            if let Some(left) = node.left {
                queue.push_back(left);
            }
            if let Some(right) = node.right {
                queue.push_back(right);
            }
        }
        points
    }

    /// All stored points inside `rect`, boundaries included, in no
    /// particular order.
    ///
    /// Subtrees whose region does not intersect `rect` are never visited.
    ///
    /// # Errors
    ///
    /// [`SpatialError::MalformedRect`] if `rect` has a NaN bound or
    /// reversed bounds.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point2D>, SpatialError> {
        check_rect(rect)?;
        let mut found = Vec::new();
        if self.nodes.is_empty() {
            return Ok(found);
        }
        let mut pending = vec![ROOT];
        while let Some(at) = pending.pop() {
            let node = &self.nodes[at];
            if rect.contains(node.point) {
                found.push(node.point);
            }
            for child in [node.left, node.right].into_iter().flatten() {
                if rect.intersects(&self.nodes[child].region) {
                    pending.push(child);
                }
            }
        }
        Ok(found)
    }

    /// The stored point closest to `query` in Euclidean distance, or `None`
    /// for an empty map.
    ///
    /// `query` itself counts when stored, at distance zero. When several
    /// points tie for closest, which one is returned is unspecified.
    ///
    /// # Errors
    ///
    /// [`SpatialError::NonFinitePoint`] if a coordinate is NaN or infinite.
    pub fn nearest(&self, query: Point2D) -> Result<Option<Point2D>, SpatialError> {
        check_point(query)?;
        if self.nodes.is_empty() {
            return Ok(None);
        }
        // Seed the champion from the insertion path. Not necessarily the
        // true nearest, but close enough to prune most of the tree from the
        // first pop.
        let mut champion = self.nodes[self.descend(query, ROOT)].point;
        let mut champion_dist = champion.distance_squared_to(query);

        let mut pending = vec![ROOT];
        while let Some(at) = pending.pop() {
            let node = &self.nodes[at];
            let dist = node.point.distance_squared_to(query);
            if dist < champion_dist {
                champion = node.point;
                champion_dist = dist;
            }
            let toward_left = axis_delta(query, node.point, node.vertical) < 0.0;
            let (near, far) = if toward_left {
                (node.left, node.right)
            } else {
                (node.right, node.left)
            };
            // Push the far side first so the stack explores the near side
            // first; a champion tightened there prunes harder later. A
            // subtree is pushed only while its region could still beat the
            // champion.
            for side in [far, near] {
                if let Some(child) = side {
                    if self.nodes[child].region.distance_squared_to(query) < champion_dist {
                        pending.push(child);
                    }
                }
            }
        }
        Ok(Some(champion))
    }

    /// Walks the search path of `point` from `start` and returns the last
    /// index on it: the node holding `point`, or the node that would be its
    /// parent on insertion.
    ///
    /// Must not be called on an empty arena.
    fn descend(&self, point: Point2D, start: usize) -> usize {
        let mut at = start;
        loop {
            let node = &self.nodes[at];
            if node.point == point {
                return at;
            }
            let side = if axis_delta(point, node.point, node.vertical) < 0.0 {
                node.left
            } else {
                node.right
            };
            match side {
                Some(child) => at = child,
                None => return at,
            }
        }
    }
}

impl<V> Default for KdTreeMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Signed offset of `p` from `q` on the axis `vertical` selects: x for a
/// vertical splitting line, y for a horizontal one. Negative sends `p` to
/// the left subtree; zero or positive to the right.
#[inline]
fn axis_delta(p: Point2D, q: Point2D, vertical: bool) -> f64 {
    if vertical {
        p.x() - q.x()
    } else {
        p.y() - q.y()
    }
}

/// Region of a child slot under a parent: the parent's region clamped at
/// the parent's splitting line on the chosen side.
fn child_region(region: Rect, split: Point2D, vertical: bool, left: bool) -> Rect {
    match (vertical, left) {
        (true, true) => Rect::new(region.xmin(), region.ymin(), split.x(), region.ymax()),
        (true, false) => Rect::new(split.x(), region.ymin(), region.xmax(), region.ymax()),
        (false, true) => Rect::new(region.xmin(), region.ymin(), region.xmax(), split.y()),
        (false, false) => Rect::new(region.xmin(), split.y(), region.xmax(), region.ymax()),
    }
}
