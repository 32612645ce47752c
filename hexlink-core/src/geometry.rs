//! Planar geometry: coordinate snapping and the hexagon hit test

use serde::{Deserialize, Serialize};

/// Shared tolerance for coordinate snapping and containment tests.
/// Input mapping and win checking both depend on this single constant;
/// do not split it per use.
pub const EPS: f64 = 1e-6;

/// A point in pixel or grid space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Build a point, snapping each coordinate to the nearest integer
    /// when it is within EPS. Snapping is idempotent.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: snap(x),
            y: snap(y),
        }
    }
}

fn snap(v: f64) -> f64 {
    let nearest = v.round();
    if (v - nearest).abs() < EPS {
        nearest
    } else {
        v
    }
}

/// Euclidean distance
pub fn dist(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Triangle area from its vertices via Heron's formula.
/// The radicand is clamped at zero so collinear vertices cannot round
/// to a negative value under the square root.
pub fn triangle_area(a: Point, b: Point, c: Point) -> f64 {
    let la = dist(c, b);
    let lb = dist(a, c);
    let lc = dist(a, b);
    let p = (la + lb + lc) / 2.0;
    (p * (p - la) * (p - lb) * (p - lc)).max(0.0).sqrt()
}

/// Closed-form area of a regular hexagon with side `side`
fn hexagon_area(side: f64) -> f64 {
    side * side * 3.0 * 3f64.sqrt() / 2.0
}

/// Test whether `pos` lies in the flat-top regular hexagon of side
/// `side` centered at `center`, boundary inclusive within EPS.
///
/// The six vertices are built analytically and the hexagon is split
/// into six triangles against the query point. For an interior point
/// the triangle areas sum to the hexagon area; for an exterior point
/// the decomposition overcounts and the sum strictly exceeds it.
/// No bounding-box shortcut: it would change the hit shape at corners.
pub fn point_in_hexagon(pos: Point, center: Point, side: f64) -> bool {
    let h = side * 3f64.sqrt() / 2.0;
    let vertices = [
        Point::new(center.x + side, center.y),
        Point::new(center.x + side / 2.0, center.y + h),
        Point::new(center.x - side / 2.0, center.y + h),
        Point::new(center.x - side, center.y),
        Point::new(center.x - side / 2.0, center.y - h),
        Point::new(center.x + side / 2.0, center.y - h),
    ];

    let mut sum = 0.0;
    for i in 0..6 {
        sum += triangle_area(vertices[i], vertices[(i + 1) % 6], pos);
    }

    (sum - hexagon_area(side)).abs() < EPS
}

/// Strict (open-interval) rectangle containment
pub fn point_in_rectangle(pos: Point, x: f64, y: f64, w: f64, h: f64) -> bool {
    pos.x > x && pos.x < x + w && pos.y > y && pos.y < y + h
}
