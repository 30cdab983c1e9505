//! Selection of the leading particle/antiparticle pair of an event and
//! computation of its invariant mass

use crate::{
    momentum::FourMomentum, numeric::Float, particle::ParticleRecord, selection::PairSelection,
};

/// Leading particle and antiparticle of an event
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeadingPair {
    /// Highest-energy particle
    pub particle: FourMomentum,

    /// Highest-energy antiparticle
    pub antiparticle: FourMomentum,
}
//
impl LeadingPair {
    /// Total 4-momentum of the pair
    pub fn combined(&self) -> FourMomentum {
        self.particle + self.antiparticle
    }

    /// Invariant mass of the pair
    pub fn invariant_mass(&self) -> Float {
        self.combined().mass()
    }
}

/// Finds the highest-energy pair of some species in an event, and measures
/// its invariant mass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InvariantMassFinder {
    selection: PairSelection,
}
//
impl InvariantMassFinder {
    /// Set up a finder for a certain pair of species
    pub fn new(selection: PairSelection) -> Self {
        Self { selection }
    }

    /// Species which this finder pairs up
    pub fn selection(&self) -> PairSelection {
        self.selection
    }

    /// Pick the highest-energy particle and antiparticle of an event
    ///
    /// Ties in energy are resolved in favor of the particle which comes first.
    /// Returns None unless at least one member of each species is present.
    ///
    pub fn find_pair(&self, particles: &[ParticleRecord]) -> Option<LeadingPair> {
        let mut best_particle = LeadingCandidate::default();
        let mut best_antiparticle = LeadingCandidate::default();

        for record in particles {
            let slot = if record.pdg == self.selection.particle {
                &mut best_particle
            } else if record.pdg == self.selection.antiparticle {
                &mut best_antiparticle
            } else {
                continue;
            };
            let p = record.four_momentum();
            if slot.offer(p) {
                log::trace!("New leading PDG {} candidate: {}", record.pdg, p);
            }
        }

        let pair = LeadingPair {
            particle: best_particle.into_inner()?,
            antiparticle: best_antiparticle.into_inner()?,
        };
        log::trace!("Selected pair: {} + {}", pair.particle, pair.antiparticle);
        Some(pair)
    }

    /// Invariant mass of the leading pair of an event
    ///
    /// The output has one element if the pair was found, and none otherwise.
    /// This is the per-event column format that the framework expects.
    ///
    pub fn compute(&self, particles: &[ParticleRecord]) -> Vec<Float> {
        let result: Vec<Float> = self
            .find_pair(particles)
            .map(|pair| pair.invariant_mass())
            .into_iter()
            .collect();
        log::trace!("Invariant mass column: {:?}", result);
        result
    }
}

/// Invariant mass of the leading muon/antimuon pair of an event
pub fn invariant_mass(particles: &[ParticleRecord]) -> Vec<Float> {
    InvariantMassFinder::default().compute(particles)
}

/// Running maximum of particle energy, remembering the matching 4-momentum
#[derive(Default)]
struct LeadingCandidate(Option<FourMomentum>);
//
impl LeadingCandidate {
    /// Take a 4-momentum if nothing was selected yet or if it has strictly more
    /// energy than the current pick, and tell whether it was taken.
    fn offer(&mut self, p: FourMomentum) -> bool {
        let better = match &self.0 {
            None => true,
            Some(current) => p.energy() > current.energy(),
        };
        if better {
            self.0 = Some(p);
        }
        better
    }

    /// Extract the selected 4-momentum, if any
    fn into_inner(self) -> Option<FourMomentum> {
        self.0
    }
}
