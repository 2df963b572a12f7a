use wnb::CentrogramPoint;

/// Builds a centrogram from `(lever_arm, mass)` pairs, named Pt1, Pt2, ...
pub fn centrogram(vertices: &[(f64, f64)]) -> Vec<CentrogramPoint> {
    vertices
        .iter()
        .enumerate()
        .map(|(i, &(lever_arm, mass))| CentrogramPoint::new(format!("Pt{}", i + 1), lever_arm, mass))
        .collect()
}

/// Envelope of the reference Cessna 150, counter-clockwise.
pub fn cessna_150_centrogram() -> Vec<CentrogramPoint> {
    centrogram(&[
        (0.8, 250.0),
        (0.8, 560.0),
        (0.87, 726.0),
        (0.94, 726.0),
        (0.94, 250.0),
    ])
}

/// U-shaped envelope with a notch cut from the top between lever arms 1 and 2.
pub fn notched_centrogram() -> Vec<CentrogramPoint> {
    centrogram(&[
        (0.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ])
}
