//! blob_contacts – bounded contact generation for 2D particle scenes.
//!
//! Detects overlaps between circular particles ("blobs") and static
//! line-segment platforms, writing contact records into caller-owned,
//! fixed-capacity buffers for an external physics resolver to consume.
//!
//! The crate is organized leaves-first: [`particle`] holds per-entity state,
//! [`collision`] holds the contact record and the two generators, and
//! [`ContactPipeline`] runs a heterogeneous set of generators against one
//! shared buffer each simulation step. Generators never allocate, never
//! write past the supplied buffer, and report exactly how many slots they
//! used so multiple generators can share a buffer sequentially.

pub mod collision;
pub mod config;
pub mod error;
pub mod particle;
pub mod utils;

pub use glam::Vec2;

pub use collision::{
    contact::ParticleContact,
    pairwise::PairwiseCollisions,
    pipeline::{ContactGenerator, ContactPipeline},
    platform::Platform,
};
pub use error::{ContactError, Result};
pub use particle::{Particle, ParticleId};
