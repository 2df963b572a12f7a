use tracing::debug;

use crate::components::{CenterOfGravity, CentrogramAxis, CentrogramPoint, Envelope};
use crate::utils::WnbError;

/// Checks whether the center of gravity lies within the centrogram.
///
/// The centrogram points form a closed polygon in (lever arm, mass) space, in
/// the given order. A point on the limit lines counts as inside.
///
/// # Errors
/// `InvalidEnvelope` when the centrogram has fewer than three distinct
/// vertices, zero area, or crossing edges.
pub fn inside_envelope(
    point: &CenterOfGravity,
    centrogram: &[CentrogramPoint],
) -> Result<bool, WnbError> {
    let envelope = Envelope::from_centrogram(centrogram)?;
    let inside = envelope.contains(point.lever_arm, point.mass);
    debug!(
        "G (lever_arm={:.3} m, mass={:.1} kg) is {} the centrogram",
        point.lever_arm,
        point.mass,
        if inside { "inside" } else { "outside" }
    );
    Ok(inside)
}

/// Closed outline of the centrogram for plotting, with `axis` horizontal and
/// mass vertical. The first point is repeated at the end.
pub fn centrogram_outline(
    centrogram: &[CentrogramPoint],
    axis: CentrogramAxis,
) -> Vec<(f64, f64)> {
    let mut outline: Vec<(f64, f64)> = centrogram.iter().map(|pt| pt.coordinates(axis)).collect();
    if let Some(&first) = outline.first() {
        outline.push(first);
    }
    outline
}
