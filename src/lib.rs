//! Point quadtree over a bounded plane.
//! # Contracts:
//! - Coordinates must be finite
//! - A stored element's position must not change while it is in the tree
//!
//! The tree is unbalanced by design: a sorted insertion order degenerates
//! into a linear chain and queries on it cost O(n).

pub mod collision;
pub mod geometry;
pub mod quadtree;

use std::ops::Deref;

/// Capability required of stored elements: a stable 2D position.
pub trait Point2 {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

/// A bare position, the simplest thing worth storing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot(pub [f64; 2]);

impl Deref for Dot {
    type Target = [f64; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Dot {
    pub fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    pub fn dist(&self, rhs: &Self) -> f64 {
        let x = self[0] - rhs[0];
        let y = self[1] - rhs[1];
        (x * x + y * y).sqrt()
    }
}

impl Point2 for Dot {
    fn x(&self) -> f64 {
        self.0[0]
    }

    fn y(&self) -> f64 {
        self.0[1]
    }
}
