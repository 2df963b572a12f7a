use nalgebra::Vector2;

use crate::components::aircraft::config::CentrogramPoint;
use crate::utils::{
    on_segment, orient, points_coincide, segments_intersect, signed_area, WnbError,
    GEOMETRY_EPSILON,
};

/// The centrogram as a closed polygon in (lever arm, mass) space.
///
/// Construction guarantees at least three distinct vertices, a non-zero area
/// and no self-intersection. Repeated consecutive vertices, including a
/// closing vertex equal to the first, are collapsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    vertices: Vec<Vector2<f64>>,
}

impl Envelope {
    /// Builds the envelope polygon from centrogram points, in their given order.
    pub fn from_centrogram(points: &[CentrogramPoint]) -> Result<Self, WnbError> {
        let vertices = points
            .iter()
            .map(|pt| Vector2::new(pt.lever_arm, pt.mass))
            .collect();
        Self::from_vertices(vertices)
    }

    /// Builds the envelope from `(lever arm, mass)` vertices.
    pub fn from_vertices(raw: Vec<Vector2<f64>>) -> Result<Self, WnbError> {
        if raw.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(WnbError::InvalidEnvelope(
                "vertex coordinates must be finite".to_string(),
            ));
        }

        let mut vertices: Vec<Vector2<f64>> = Vec::with_capacity(raw.len());
        for v in raw {
            if vertices.last().map_or(true, |last| !points_coincide(last, &v)) {
                vertices.push(v);
            }
        }
        while vertices.len() > 1 && points_coincide(&vertices[0], &vertices[vertices.len() - 1]) {
            vertices.pop();
        }

        if vertices.len() < 3 {
            return Err(WnbError::InvalidEnvelope(format!(
                "{} distinct vertices, at least 3 required",
                vertices.len()
            )));
        }

        let area = signed_area(&vertices);
        let extent = bounding_extent(&vertices);
        if area.abs() <= GEOMETRY_EPSILON * extent {
            return Err(WnbError::InvalidEnvelope("polygon has zero area".to_string()));
        }

        let envelope = Self { vertices };
        envelope.check_simple()?;
        Ok(envelope)
    }

    /// Vertices in polygon order, without the closing repetition.
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    /// Enclosed area (kg·m), independent of winding direction.
    pub fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    /// Iterator over the polygon edges, closing the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Vector2<f64>, &Vector2<f64>)> {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Checks whether the point lies on an edge or vertex of the polygon.
    pub fn on_boundary(&self, lever_arm: f64, mass: f64) -> bool {
        let p = Vector2::new(lever_arm, mass);
        self.edges().any(|(a, b)| on_segment(a, b, &p))
    }

    /// Point-in-polygon test; the boundary counts as inside.
    ///
    /// Uses the winding number, so concave envelopes and either vertex order
    /// give the same answer.
    pub fn contains(&self, lever_arm: f64, mass: f64) -> bool {
        if !lever_arm.is_finite() || !mass.is_finite() {
            return false;
        }
        if self.on_boundary(lever_arm, mass) {
            return true;
        }
        self.winding_number(&Vector2::new(lever_arm, mass)) != 0
    }

    fn winding_number(&self, p: &Vector2<f64>) -> i32 {
        let mut winding = 0;
        for (a, b) in self.edges() {
            if a.y <= p.y {
                if b.y > p.y && orient(a, b, p) > 0.0 {
                    winding += 1;
                }
            } else if b.y <= p.y && orient(a, b, p) < 0.0 {
                winding -= 1;
            }
        }
        winding
    }

    /// Rejects polygons whose edges cross or fold back onto each other.
    fn check_simple(&self) -> Result<(), WnbError> {
        let n = self.vertices.len();
        let edge = |i: usize| (&self.vertices[i], &self.vertices[(i + 1) % n]);

        for i in 0..n {
            // Adjacent edges only share their common vertex unless one doubles back.
            let (a, b) = edge(i);
            let (_, c) = edge((i + 1) % n);
            let ab = b - a;
            let bc = c - b;
            let cross = ab.x * bc.y - ab.y * bc.x;
            let scale = (ab.x * bc.y).abs() + (ab.y * bc.x).abs();
            if cross.abs() <= GEOMETRY_EPSILON * scale && ab.dot(&bc) < 0.0 {
                return Err(WnbError::InvalidEnvelope(format!(
                    "edges {} and {} fold back onto each other",
                    i + 1,
                    (i + 1) % n + 1
                )));
            }

            for j in (i + 2)..n {
                if i == 0 && j == n - 1 {
                    continue;
                }
                let (p1, p2) = edge(i);
                let (q1, q2) = edge(j);
                if segments_intersect(p1, p2, q1, q2) {
                    return Err(WnbError::InvalidEnvelope(format!(
                        "edges {} and {} intersect",
                        i + 1,
                        j + 1
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Product of the bounding box sides, used to scale the zero-area test.
fn bounding_extent(vertices: &[Vector2<f64>]) -> f64 {
    let (mut min, mut max) = (vertices[0], vertices[0]);
    for v in vertices {
        min = min.inf(v);
        max = max.sup(v);
    }
    let size = max - min;
    size.x * size.y
}
