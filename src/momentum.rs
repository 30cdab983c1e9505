//! This module implements some domain-specific 4-momentum handling logic.

use crate::numeric::Float;
use nalgebra::{SVector, Vector3};
use prefix_num_ops::real::*;
use std::{fmt::Display, ops::Add};

/// 4-momentum dimension
pub const MOMENTUM_DIM: usize = 4;

/// Convenience const for accessing the X coordinate of a 4-vector
pub const X: usize = 0;

/// Convenience const for accessing the Y coordinate of a 4-vector
pub const Y: usize = 1;

/// Convenience const for accessing the Z coordinate of a 4-vector
pub const Z: usize = 2;

/// Convenience const for accessing the E coordinate of a 4-vector
pub const E: usize = 3;

/// Relativistic 4-momentum, stored as (x, y, z, E)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourMomentum(SVector<Float, MOMENTUM_DIM>);
//
impl FourMomentum {
    /// Build a 4-momentum from its spatial components and energy
    pub fn from_xyze(p: Vector3<Float>, e: Float) -> Self {
        Self(SVector::<Float, MOMENTUM_DIM>::new(p[X], p[Y], p[Z], e))
    }

    /// Build an on-shell 4-momentum from a 3-momentum and a rest mass
    ///
    /// The energy follows the mass-shell relation E² = |p|² + m². A negative
    /// mass is interpreted as a spacelike particle, whose energy is then
    /// sqrt(|p|² - m²), clamped to zero. Either way, the energy is never
    /// negative.
    ///
    pub fn from_xyzm(p: Vector3<Float>, m: Float) -> Self {
        let p2 = p.norm_squared();
        let e = if m >= 0. {
            sqrt(p2 + m * m)
        } else {
            sqrt((p2 - m * m).max(0.))
        };
        Self::from_xyze(p, e)
    }

    /// Energy (time component)
    pub fn energy(&self) -> Float {
        self.0[E]
    }

    /// Spatial part of the 4-momentum
    pub fn xyz(&self) -> Vector3<Float> {
        self.0.fixed_rows::<3>(X).into_owned()
    }

    /// Minkowski square E² - |p|²
    pub fn mass_squared(&self) -> Float {
        let e = self.energy();
        e * e - self.xyz().norm_squared()
    }

    /// Invariant mass
    ///
    /// Spacelike 4-vectors (negative squared mass) get a negative mass
    /// -sqrt(|m²|) rather than NaN, so that they stay visible downstream.
    ///
    pub fn mass(&self) -> Float {
        let m2 = self.mass_squared();
        if m2 < 0. {
            -sqrt(-m2)
        } else {
            sqrt(m2)
        }
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Display for FourMomentum {
    /// Dump the 4-momentum as (x, y, z; E)
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            fmt,
            "({}, {}, {}; {})",
            self.0[X], self.0[Y], self.0[Z], self.0[E]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::vector;

    #[test]
    fn particle_at_rest_has_energy_equal_to_mass() {
        let p = FourMomentum::from_xyzm(Vector3::zeros(), 0.1057);
        assert_eq!(p.energy(), 0.1057);
        assert_relative_eq!(p.mass(), 0.1057, max_relative = 1e-6);
    }

    #[test]
    fn energy_follows_mass_shell() {
        let p = FourMomentum::from_xyzm(vector![3., 0., 4.], 12.);
        assert_relative_eq!(p.energy(), 13., max_relative = 1e-6);
        assert_relative_eq!(p.mass_squared(), 144., max_relative = 1e-5);
    }

    #[test]
    fn massless_energy_is_momentum_norm() {
        let p = FourMomentum::from_xyzm(vector![0., 3., 4.], 0.);
        assert_eq!(p.energy(), 5.);
        assert_eq!(p.mass(), 0.);
    }

    #[test]
    fn negative_mass_subtracts_from_momentum() {
        let p = FourMomentum::from_xyzm(vector![5., 0., 0.], -3.);
        assert_relative_eq!(p.energy(), 4., max_relative = 1e-6);

        // |m| > |p| clamps the energy to zero
        let p = FourMomentum::from_xyzm(vector![1., 0., 0.], -3.);
        assert_eq!(p.energy(), 0.);
    }

    #[test]
    fn spacelike_mass_is_negative() {
        let p = FourMomentum::from_xyze(vector![0., 0., 5.], 3.);
        assert_eq!(p.mass_squared(), -16.);
        assert_eq!(p.mass(), -4.);
    }

    #[test]
    fn back_to_back_pair_mass() {
        // Two massless particles of energy 45 flying apart form a system of
        // mass 90 at rest
        let p1 = FourMomentum::from_xyzm(vector![0., 0., 45.], 0.);
        let p2 = FourMomentum::from_xyzm(vector![0., 0., -45.], 0.);
        let sum = p1 + p2;
        assert_eq!(sum.xyz(), Vector3::zeros());
        assert_eq!(sum.energy(), 90.);
        assert_eq!(sum.mass(), 90.);
    }

    #[test]
    fn display_lists_spatial_part_then_energy() {
        let p = FourMomentum::from_xyze(vector![1., 2., 3.], 4.);
        assert_eq!(p.to_string(), "(1, 2, 3; 4)");
    }
}
