//! Predicates used by the range query's pruning decisions. Both are on the
//! hot path of every query, so they stay branch-cheap and sqrt-free.

/// Return whether (px, py) lies within or on the circle around (cx, cy)
/// with radius cr.
///
/// Compares squared distances, so the boundary case is exact even at cr=0.
#[inline]
pub fn point_in_circle(px: f64, py: f64, cx: f64, cy: f64, cr: f64) -> bool {
    let dx = px - cx;
    let dy = py - cy;
    dx * dx + dy * dy <= cr * cr
}

/// Return whether the closed disk around (cx, cy) with radius cr touches the
/// closed rectangle [x1,x2]x[y1,y2].
///
/// Clamps the center to the rectangle; the clamped point is the nearest
/// rectangle point, so the disk touches the rectangle iff that point is in
/// the disk.
#[inline]
pub fn circle_intersects_rectangle(
    cx: f64,
    cy: f64,
    cr: f64,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> bool {
    let nx = cx.max(x1).min(x2);
    let ny = cy.max(y1).min(y2);
    point_in_circle(nx, ny, cx, cy, cr)
}
