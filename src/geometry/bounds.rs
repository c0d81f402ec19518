//! Axis-aligned bounding box of a molecule.
//!
//! The extrema are seeded at the origin rather than at the first atom, so the
//! box always contains `(0, 0, 0)`. Scene files written by earlier versions of
//! this format depend on that shape, so it is kept as is.

/// Largest atom radius assumed by the include file; used as the margin of the
/// commented `bounded_by` box.
pub const MAX_ATOM_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            min: [0.0; 3],
            max: [0.0; 3],
        }
    }
}

impl BoundingBox {
    /// Scans every position once, widening an origin-seeded box.
    pub fn from_positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = [f64; 3]>,
    {
        let mut bbox = Self::default();
        for p in positions {
            for axis in 0..3 {
                if p[axis] < bbox.min[axis] {
                    bbox.min[axis] = p[axis];
                }
                if p[axis] > bbox.max[axis] {
                    bbox.max[axis] = p[axis];
                }
            }
        }
        bbox
    }

    /// Grows every side by `margin`.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: self.min.map(|v| v - margin),
            max: self.max.map(|v| v + margin),
        }
    }

    pub fn midpoint(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    /// Translation that moves the box midpoint onto the origin.
    pub fn recentering(&self) -> [f64; 3] {
        self.midpoint().map(|v| -v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_degenerate_origin_box() {
        let bbox = BoundingBox::from_positions(std::iter::empty());
        assert_eq!(bbox.min, [0.0, 0.0, 0.0]);
        assert_eq!(bbox.max, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn single_atom_box_includes_origin() {
        let bbox = BoundingBox::from_positions([[2.0, -1.0, 5.0]]);
        assert_eq!(bbox.min, [0.0, -1.0, 0.0]);
        assert_eq!(bbox.max, [2.0, 0.0, 5.0]);
    }

    #[test]
    fn far_cluster_still_reaches_origin() {
        let bbox = BoundingBox::from_positions([[10.0, 11.0, 12.0], [14.0, 13.0, 12.5]]);
        assert_eq!(bbox.min, [0.0, 0.0, 0.0]);
        assert_eq!(bbox.max, [14.0, 13.0, 12.5]);
    }

    #[test]
    fn mixed_signs() {
        let bbox = BoundingBox::from_positions([[-1.5, 2.0, -3.0], [4.0, -2.5, 1.0]]);
        assert_eq!(bbox.min, [-1.5, -2.5, -3.0]);
        assert_eq!(bbox.max, [4.0, 2.0, 1.0]);
    }

    #[test]
    fn expanded_adds_margin_on_every_side() {
        let bbox = BoundingBox::from_positions([[2.0, -1.0, 5.0]]).expanded(MAX_ATOM_RADIUS);
        assert_eq!(bbox.min, [-3.0, -4.0, -3.0]);
        assert_eq!(bbox.max, [5.0, 3.0, 8.0]);
    }

    #[test]
    fn recentering_negates_midpoint() {
        let bbox = BoundingBox {
            min: [-2.0, 0.0, -4.0],
            max: [4.0, 6.0, 0.0],
        };
        assert_eq!(bbox.midpoint(), [1.0, 3.0, -2.0]);
        assert_eq!(bbox.recentering(), [-1.0, -3.0, 2.0]);
    }
}
