use super::Point2;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns `true` if two points coincide within `TOLERANCE` scaled by `scale`.
#[cfg(test)]
#[must_use]
pub(crate) fn points_coincide(a: &Point2, b: &Point2, scale: f64) -> bool {
    let eps = super::TOLERANCE * scale.abs().max(1.0);
    (a - b).norm() <= eps
}
