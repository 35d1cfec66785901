//! Synthetic solar-system population synthesis
//!
//! Derives internally consistent physical attributes for a population of
//! celestial bodies around one fixed central mass. Synthesis is a pure
//! function of an RNG handle plus an explicit bounds configuration, so a
//! fixed seed reproduces a population exactly.

pub mod bounds;
pub mod synthesis;

#[cfg(test)]
mod synthesis_test;

pub use bounds::{SynthesisBounds, SynthesisError};
pub use synthesis::synthesize;
