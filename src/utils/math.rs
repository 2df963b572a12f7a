use nalgebra::Vector2;

use crate::utils::GEOMETRY_EPSILON;

/// Z component of the cross product `(b - a) x (p - a)`.
///
/// Positive when `p` lies to the left of the directed line `a -> b`.
#[inline]
pub fn orient(a: &Vector2<f64>, b: &Vector2<f64>, p: &Vector2<f64>) -> f64 {
    let e = b - a;
    let w = p - a;
    e.x * w.y - e.y * w.x
}

/// Checks whether `p` lies on the closed segment `a -> b`.
///
/// Collinearity is judged relative to the magnitude of the products involved, so
/// axes with very different scales (lever arm in metres, mass in kilograms) are
/// handled without a fixed absolute tolerance.
pub fn on_segment(a: &Vector2<f64>, b: &Vector2<f64>, p: &Vector2<f64>) -> bool {
    let e = b - a;
    let w = p - a;
    let cross = e.x * w.y - e.y * w.x;
    let scale = (e.x * w.y).abs() + (e.y * w.x).abs();
    if cross.abs() > GEOMETRY_EPSILON * scale {
        return false;
    }

    let dot = e.dot(&w);
    let len2 = e.norm_squared();
    let slack = GEOMETRY_EPSILON * len2;
    dot >= -slack && dot <= len2 + slack
}

/// Checks whether the closed segments `p1 -> p2` and `q1 -> q2` share at least one point.
pub fn segments_intersect(
    p1: &Vector2<f64>,
    p2: &Vector2<f64>,
    q1: &Vector2<f64>,
    q2: &Vector2<f64>,
) -> bool {
    let d1 = orient(q1, q2, p1);
    let d2 = orient(q1, q2, p2);
    let d3 = orient(p1, p2, q1);
    let d4 = orient(p1, p2, q2);

    if ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
    {
        return true;
    }

    on_segment(q1, q2, p1)
        || on_segment(q1, q2, p2)
        || on_segment(p1, p2, q1)
        || on_segment(p1, p2, q2)
}

/// Signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise winding, negative for clockwise.
pub fn signed_area(vertices: &[Vector2<f64>]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let twice_area: f64 = (0..n)
        .map(|i| {
            let a = &vertices[i];
            let b = &vertices[(i + 1) % n];
            a.x * b.y - b.x * a.y
        })
        .sum();
    0.5 * twice_area
}

/// Approximate equality of two points, relative to their magnitude.
#[inline]
pub fn points_coincide(a: &Vector2<f64>, b: &Vector2<f64>) -> bool {
    let scale = a.amax().max(b.amax()).max(1.0);
    (a - b).amax() <= GEOMETRY_EPSILON * scale
}
