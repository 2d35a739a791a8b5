use crate::{
    config,
    particle::{Particle, ParticleId},
};

use super::{contact::ParticleContact, pipeline::ContactGenerator};

/// Detects overlaps between every unordered pair of particles.
///
/// Pairs are examined in a fixed order (outer index ascending, inner index
/// ascending from outer + 1), so discovery order is reproducible run to run.
/// Touching exactly at the boundary does not count as a collision.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairwiseCollisions;

impl ContactGenerator for PairwiseCollisions {
    fn add_contacts(&self, particles: &[Particle], contacts: &mut [ParticleContact]) -> usize {
        let mut used = 0;
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                // Checked before the pair is examined, so a pair is never
                // half-processed when the buffer runs out.
                if used >= contacts.len() {
                    return used;
                }

                let to_other = particles[j].position - particles[i].position;
                let distance_sq = to_other.length_squared();
                let sum_radii = particles[i].radius + particles[j].radius;
                if distance_sq >= sum_radii * sum_radii {
                    continue;
                }
                if distance_sq < config::MIN_SEPARATION_SQ {
                    // Coincident centers give no separation direction.
                    log::debug!("particles {i} and {j} share a center, skipping contact");
                    continue;
                }

                let distance = distance_sq.sqrt();
                // Slot order matters to the resolver: the normal points from
                // body_b toward body_a, here from particle i toward j.
                contacts[used] = ParticleContact {
                    body_a: ParticleId(j),
                    body_b: Some(ParticleId(i)),
                    normal: to_other / distance,
                    penetration: sum_radii - distance,
                    restitution: config::DEFAULT_RESTITUTION,
                };
                used += 1;
            }
        }
        used
    }
}
