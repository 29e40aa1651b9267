//! Point and plane helpers over `glam::DVec3`.

use glam::DVec3;

/// Tolerance for the point-on-plane test
pub const EPSILON: f64 = 1e-5;

/// Point at `far + ratio * (near - far)`.
///
/// With `ratio` close to 1 the point sits close to `near`; this is where a
/// corner is cut when `near` is the vertex being truncated.
#[inline]
pub fn truncation_point(far: DVec3, near: DVec3, ratio: f64) -> DVec3 {
    far + (near - far) * ratio
}

/// Index of the candidate closest to `target`. Ties keep the first candidate.
pub fn closest_to(target: DVec3, candidates: impl IntoIterator<Item = DVec3>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, point) in candidates.into_iter().enumerate() {
        let d = point.distance(target);
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((i, d));
        }
    }
    best.map(|(i, _)| i)
}

/// A plane in Hessian normal form: `normal · p = offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub offset: f64,
}

impl Plane {
    /// Plane through three points. `None` when the points are collinear.
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Option<Self> {
        let normal = (b - a).cross(c - a).try_normalize()?;
        Some(Self {
            normal,
            offset: normal.dot(a),
        })
    }

    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.offset
    }

    /// Point-on-plane test with `EPSILON` tolerance
    pub fn contains(&self, point: DVec3) -> bool {
        self.signed_distance(point).abs() <= EPSILON
    }
}

/// Order-independent key identifying triangles with bit-identical corners,
/// whichever node they were reached from. `-0.0` and `0.0` compare equal.
pub type SimilarityKey = [[u64; 3]; 3];

pub fn similarity_key(corners: [DVec3; 3]) -> SimilarityKey {
    let bits = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
    let mut key = corners.map(|p| [bits(p.x), bits(p.y), bits(p.z)]);
    key.sort_unstable();
    key
}
