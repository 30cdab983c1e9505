//! Dimuon mass: leading muon pair reconstruction
//!
//!
//! # Introduction (for the physicist)
//!
//! This small library computes, for each event of a simulated sample, the
//! invariant mass of the system formed by the most energetic muon and the most
//! energetic antimuon. In e⁺e⁻ → ZH events with Z → μ⁺μ⁻, this is what peaks at
//! the Z⁰ mass.
//!
//! Other lepton flavours can be paired up by picking another
//! [`PairSelection`].
//!
//!
//! # Introduction (for the computer guy)
//!
//! There is no event loop, file I/O or histogramming here. All of that belongs
//! to the surrounding event processing framework, which hands us the particle
//! collection of one event at a time and stores the result as a per-event
//! column holding zero or one value.
//!
//! Each call is a pure function of its input, so the framework is free to
//! process events from as many threads as it likes.
//!
//! Diagnostics are emitted through the `log` facade at trace level; the host
//! application decides whether and where they go.

#![warn(missing_docs)]

pub mod finder;
pub mod momentum;
pub mod numeric;
pub mod particle;
pub mod selection;

pub use crate::{
    finder::{invariant_mass, InvariantMassFinder, LeadingPair},
    momentum::FourMomentum,
    numeric::Float,
    particle::{ParticleRecord, ANTIMUON, ELECTRON, MUON, POSITRON},
    selection::PairSelection,
};

/// We'll use eyre's type-erased result type throughout the crate
pub type Result<T> = eyre::Result<T>;
