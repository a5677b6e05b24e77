
use crate::geometry::{circle_intersects_rectangle, point_in_circle};
use crate::Point2;
use arrayvec::ArrayVec;

/// One of the four regions around a node's anchor, numbered counter-clockwise
/// from the upper right in screen coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// All quadrants in index order, 1 through 4.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::UpperRight,
        Quadrant::UpperLeft,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Predicate invocation counts of a single range query. For a fixed tree and
/// a fixed circle these are deterministic, which makes them usable as a
/// pruning regression oracle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryStats {
    pub rectangle_tests: usize,
    pub circle_tests: usize,
}

/// A point quadtree node: one element anchored inside an axis-aligned
/// rectangle, with up to four children at the quadrants the anchor subdivides
/// the rectangle into.
///
/// The rectangle is advisory: it steers query pruning but inserting an
/// element outside it still works, the element just lands in the nearest
/// quadrant chain.
#[derive(Debug, Clone)]
pub struct PointQuadtree<E> {
    point: E,
    // region corners, x1 <= x2 and y1 <= y2
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    children: [Option<Box<PointQuadtree<E>>>; 4],
}

impl<E: Point2> PointQuadtree<E> {
    /// Leaf node holding `point` in the given rectangle. Used both for the
    /// root (caller supplies the universe) and internally for new leaves.
    pub fn new(point: E, x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        debug_assert!(x1 <= x2);
        debug_assert!(y1 <= y2);
        Self {
            point,
            x1,
            y1,
            x2,
            y2,
            children: [None, None, None, None],
        }
    }

    pub fn point(&self) -> &E {
        &self.point
    }

    /// Region corners as (x1, y1, x2, y2).
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children[quadrant.index()].as_deref()
    }

    pub fn has_child(&self, quadrant: Quadrant) -> bool {
        self.children[quadrant.index()].is_some()
    }

    /// Present children in quadrant order.
    pub fn children(&self) -> ArrayVec<[&Self; 4]> {
        self.children.iter().filter_map(|c| c.as_deref()).collect()
    }

    /// Return which quadrant `point` falls into relative to this node's
    /// anchor. Total and disjoint over all finite coordinates: ties on the
    /// anchor's vertical or horizontal line are broken counter-clockwise, so
    /// every point maps to exactly one quadrant.
    pub fn find_quadrant(&self, point: &E) -> Quadrant {
        let ax = self.point.x();
        let ay = self.point.y();
        let (x, y) = (point.x(), point.y());

        if x >= ax && y < ay {
            Quadrant::UpperRight
        } else if x < ax && y <= ay {
            Quadrant::UpperLeft
        } else if x <= ax && y > ay {
            Quadrant::LowerLeft
        } else {
            Quadrant::LowerRight
        }
    }

    // The child rectangle for a quadrant: keep the parent's corner on that
    // side, pull the opposite corner to the anchor. An anchor outside its
    // own rectangle can pull a corner past the opposite edge, so the
    // corners are reordered before use.
    fn quadrant_rect(&self, quadrant: Quadrant) -> (f64, f64, f64, f64) {
        let ax = self.point.x();
        let ay = self.point.y();
        let (x1, y1, x2, y2) = match quadrant {
            Quadrant::UpperRight => (ax, self.y1, self.x2, ay),
            Quadrant::UpperLeft => (self.x1, self.y1, ax, ay),
            Quadrant::LowerLeft => (self.x1, ay, ax, self.y2),
            Quadrant::LowerRight => (ax, ay, self.x2, self.y2),
        };
        (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
    }

    /// Insert `point` as a new leaf below this node. Never fails and never
    /// moves existing nodes; cost is O(depth) and depth is unbounded.
    pub fn insert(&mut self, point: E) {
        let quadrant = self.find_quadrant(&point);
        let rect = self.quadrant_rect(quadrant);
        match &mut self.children[quadrant.index()] {
            Some(child) => child.insert(point),
            slot @ None => {
                let (x1, y1, x2, y2) = rect;
                *slot = Some(Box::new(Self::new(point, x1, y1, x2, y2)));
            }
        }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        1 + self.children().iter().map(|c| c.size()).sum::<usize>()
    }

    /// Every element in this subtree, pre-order, children in quadrant order.
    pub fn all_points(&self) -> Vec<&E> {
        let mut out = Vec::new();
        self.collect_points(&mut out);
        out
    }

    fn collect_points<'a>(&'a self, out: &mut Vec<&'a E>) {
        out.push(&self.point);
        for child in self.children() {
            child.collect_points(out);
        }
    }

    /// Every element within or on the circle around (cx, cy) with radius cr.
    pub fn find_in_circle(&self, cx: f64, cy: f64, cr: f64) -> Vec<&E> {
        let mut out = Vec::new();
        self.find_in_circle_into(cx, cy, cr, &mut out);
        out
    }

    /// As [`find_in_circle`](Self::find_in_circle), appending into `out` and
    /// reporting how many predicate evaluations the walk performed.
    pub fn find_in_circle_into<'a>(
        &'a self,
        cx: f64,
        cy: f64,
        cr: f64,
        out: &mut Vec<&'a E>,
    ) -> QueryStats {
        let mut stats = QueryStats::default();
        self.find_in_circle_impl(cx, cy, cr, out, &mut stats);
        stats
    }

    // A subtree whose rectangle misses the circle is skipped whole; a node
    // whose rectangle is hit tests its own anchor and descends into every
    // present child, each of which re-tests its own rectangle.
    fn find_in_circle_impl<'a>(
        &'a self,
        cx: f64,
        cy: f64,
        cr: f64,
        out: &mut Vec<&'a E>,
        stats: &mut QueryStats,
    ) {
        stats.rectangle_tests += 1;
        if !circle_intersects_rectangle(cx, cy, cr, self.x1, self.y1, self.x2, self.y2) {
            return;
        }

        stats.circle_tests += 1;
        if point_in_circle(self.point.x(), self.point.y(), cx, cy, cr) {
            out.push(&self.point);
        }

        for child in self.children() {
            child.find_in_circle_impl(cx, cy, cr, out, stats);
        }
    }
}
