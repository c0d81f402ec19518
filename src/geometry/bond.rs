//! Orientation of a bond relative to the canonical bond primitive.
//!
//! The include file models every bond primitive as a unit-length cylinder along
//! the +x axis starting at the origin. Placing it between two atoms takes, in
//! order:
//!
//! 1. `scale <dist, 1, 1>` to the bond length,
//! 2. `rotate <0, 0, 90 - phi>` about z, tilting it to the polar angle `phi`
//!    measured from the vertical (+y) axis,
//! 3. `rotate <0, ∓theta, 0>` about y, swinging it to the azimuthal angle
//!    `theta` of the bond's projection onto the x-z plane,
//! 4. `translate` to the begin atom.
//!
//! Each statement is dropped when it would be the identity within [`EPSILON`].

use super::EPSILON;

/// Length and orientation of the vector from one bond endpoint to the other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondGeometry {
    /// Euclidean distance between the endpoints.
    pub dist: f64,
    /// Distance between the endpoints projected onto the x-z plane.
    pub dy: f64,
    /// Angle between the bond and the +y axis, in radians.
    pub phi: f64,
    /// Angle between the bond's x-z projection and the +x axis, in radians.
    pub theta: f64,
    /// `1.0` when the end atom lies at or beyond the begin atom along z,
    /// `-1.0` otherwise.
    pub direction_sign: f64,
}

impl BondGeometry {
    /// Solves the geometry of the bond from `p1` to `p2`.
    ///
    /// # Arguments
    ///
    /// * `p1` - Begin atom position [x, y, z]
    /// * `p2` - End atom position [x, y, z]
    ///
    /// # Returns
    ///
    /// The bond geometry. Coincident endpoints give `phi = 0`, and endpoints
    /// that coincide in the x-z plane give `theta = 0`.
    pub fn between(p1: [f64; 3], p2: [f64; 3]) -> Self {
        let dx = p2[0] - p1[0];
        let dh = p2[1] - p1[1];
        let dz = p2[2] - p1[2];

        let dist = (dx * dx + dh * dh + dz * dz).sqrt();
        let dy = (dx * dx + dz * dz).sqrt();

        let phi = if dist >= EPSILON {
            (dh / dist).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };
        let theta = if dy >= EPSILON {
            (dx / dy).clamp(-1.0, 1.0).acos()
        } else {
            0.0
        };

        Self {
            dist,
            dy,
            phi,
            theta,
            direction_sign: if dz >= 0.0 { 1.0 } else { -1.0 },
        }
    }

    /// Scale factor along x for a full-length bond, if one is needed.
    pub fn full_scale(&self) -> Option<f64> {
        (self.dist >= EPSILON).then_some(self.dist)
    }

    /// Scale factor along x for one half of a capped stick, if one is needed.
    pub fn half_scale(&self) -> Option<f64> {
        (2.0 * self.dist >= EPSILON).then_some(0.5 * self.dist)
    }

    /// Rotation about z (degrees) orienting the primitive from begin to end.
    pub fn z_rotation(&self) -> Option<f64> {
        let angle = 90.0 - self.phi.to_degrees();
        (angle.abs() >= EPSILON).then_some(angle)
    }

    /// Rotation about z (degrees) for the half drawn back from the end atom.
    pub fn z_rotation_reversed(&self) -> Option<f64> {
        let angle = 270.0 - self.phi.to_degrees();
        (angle.abs() >= EPSILON).then_some(angle)
    }

    /// Rotation about y (degrees), shared by both bond halves.
    pub fn y_rotation(&self) -> Option<f64> {
        (self.theta >= EPSILON).then(|| -self.direction_sign * self.theta.to_degrees())
    }
}
