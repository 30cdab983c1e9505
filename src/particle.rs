//! This module defines the particle records handed over by the event
//! processing framework

use crate::{momentum::FourMomentum, numeric::Float};
use nalgebra::Vector3;

/// PDG code of the electron
pub const ELECTRON: i32 = 11;

/// PDG code of the positron
pub const POSITRON: i32 = -ELECTRON;

/// PDG code of the muon
pub const MUON: i32 = 13;

/// PDG code of the antimuon
pub const ANTIMUON: i32 = -MUON;

/// Generated particle, as stored in the framework's per-event collections
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleRecord {
    /// 3-momentum
    pub momentum: Vector3<Float>,

    /// Rest mass
    pub mass: Float,

    /// Species, in the PDG particle numbering scheme
    pub pdg: i32,
}
//
impl ParticleRecord {
    /// Build a particle record
    pub fn new(momentum: Vector3<Float>, mass: Float, pdg: i32) -> Self {
        Self {
            momentum,
            mass,
            pdg,
        }
    }

    /// On-shell 4-momentum of this particle
    pub fn four_momentum(&self) -> FourMomentum {
        FourMomentum::from_xyzm(self.momentum, self.mass)
    }
}
