//! Celestial body data model and dataset codec
//!
//! This crate defines the record type shared by the generator and the
//! dataset writer: one fixed central body plus a population of synthesized
//! bodies in a flat, single-level orbital hierarchy.

pub mod body;
pub mod dataset;

#[cfg(test)]
mod body_test;

pub use body::{
    diameter_for, kepler_period, CelestialBody, CENTRAL_BODY_DIAMETER_M, CENTRAL_BODY_MASS_KG,
    CENTRAL_BODY_NAME, CENTRAL_BODY_ROTATION_HOURS, G,
};
pub use dataset::{format_record, write_dataset, write_dataset_file, DATASET_HEADER};
