//! Collision detection over a set of same-sized elements, one tree build and
//! one range query per element per sweep.

use crate::quadtree::PointQuadtree;
use crate::Point2;
use rayon::prelude::*;
use std::collections::HashSet;

// Stored element plus its index in the caller's slice, so hits can be
// reported by index instead of requiring E: Eq + Hash.
struct Tagged<'a, E> {
    index: usize,
    element: &'a E,
}

impl<'a, E: Point2> Point2 for Tagged<'a, E> {
    fn x(&self) -> f64 {
        self.element.x()
    }

    fn y(&self) -> f64 {
        self.element.y()
    }
}

/// Indices of every element in contact with another element, sorted. Two
/// elements of radius `radius` are in contact when their centers are within
/// `2 * radius` of each other.
///
/// Builds a tree over the elements' bounding box, then queries it once per
/// element. The queries are read-only, so they run in parallel.
pub fn find_colliders<E>(elements: &[E], radius: f64) -> Vec<usize>
where
    E: Point2 + Sync,
{
    let (first, rest) = match elements.split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };

    // minimum bounding box of the input, same trick the tree's callers use
    // to keep it reasonably balanced
    let mut min = [first.x(), first.y()];
    let mut max = min;
    for e in rest {
        min[0] = min[0].min(e.x());
        min[1] = min[1].min(e.y());
        max[0] = max[0].max(e.x());
        max[1] = max[1].max(e.y());
    }

    let mut tree = PointQuadtree::new(
        Tagged {
            index: 0,
            element: first,
        },
        min[0],
        min[1],
        max[0],
        max[1],
    );
    for (index, element) in rest.iter().enumerate() {
        tree.insert(Tagged {
            index: index + 1,
            element,
        });
    }

    let colliders: HashSet<usize> = elements
        .par_iter()
        .flat_map_iter(|e| {
            let hits = tree.find_in_circle(e.x(), e.y(), radius * 2.0);
            // a lone hit is the element finding itself
            let colliding = hits.len() >= 2;
            hits.into_iter()
                .filter(move |_| colliding)
                .map(|t| t.index)
                .collect::<Vec<_>>()
                .into_iter()
        })
        .collect();

    let mut colliders: Vec<usize> = colliders.into_iter().collect();
    colliders.sort_unstable();
    colliders
}
