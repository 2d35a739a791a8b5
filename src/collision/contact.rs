use glam::Vec2;

use crate::config;
use crate::particle::ParticleId;

/// A detected overlap between a particle and either another particle or a
/// static platform.
///
/// `body_b` is `None` for contacts against an immovable platform. The normal
/// is a unit vector pointing from `body_b` toward `body_a`; for platform
/// contacts it points from the platform's nearest point toward the particle
/// center. Penetration is non-negative for every reported contact.
///
/// Records are transient: generators write them into a caller-owned buffer
/// each simulation step and the resolver consumes them before the next.
#[derive(Debug, Clone, Copy)]
pub struct ParticleContact {
    pub body_a: ParticleId,
    pub body_b: Option<ParticleId>,
    pub normal: Vec2,
    pub penetration: f32,
    pub restitution: f32,
}

impl Default for ParticleContact {
    fn default() -> Self {
        Self {
            body_a: ParticleId(0),
            body_b: None,
            normal: Vec2::ZERO,
            penetration: 0.0,
            restitution: config::DEFAULT_RESTITUTION,
        }
    }
}

impl ParticleContact {
    /// Whether this contact involves two particles rather than a platform.
    #[inline]
    pub fn is_pair(&self) -> bool {
        self.body_b.is_some()
    }
}
