use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, Result};

/// Positional handle into an externally owned particle population.
///
/// Contact records refer to their participants through this index. The
/// population slice itself is borrowed for the duration of a generation
/// call and is never copied or reordered by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticleId(pub usize);

impl ParticleId {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Circular 2D particle ("blob") state consumed by the contact generators.
///
/// Particles are owned by scene setup and persist across simulation steps;
/// the generators only ever read them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Creates a particle after validating its fields.
    pub fn new(position: Vec2, radius: f32) -> Result<Self> {
        if !position.is_finite() {
            return Err(ContactError::NonFinite("particle position"));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(ContactError::InvalidRadius(radius));
        }
        Ok(Self { position, radius })
    }

    /// Squared radius, the comparison form used on rejection paths.
    #[inline]
    pub fn radius_sq(&self) -> f32 {
        self.radius * self.radius
    }
}
