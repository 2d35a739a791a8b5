//! Contact generation: particle-vs-platform and particle-vs-particle overlap
//! detection writing into bounded, caller-owned buffers.

pub mod contact;
pub mod pairwise;
pub mod pipeline;
pub mod platform;

pub use contact::ParticleContact;
pub use pairwise::PairwiseCollisions;
pub use pipeline::{ContactGenerator, ContactPipeline};
pub use platform::Platform;
