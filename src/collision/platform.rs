use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{
    config,
    error::{ContactError, Result},
    particle::{Particle, ParticleId},
};

use super::{contact::ParticleContact, pipeline::ContactGenerator};

/// Static line segment that particles can rest on or bounce off.
///
/// Platforms double as contact generators: each one scans the whole particle
/// population against its own segment, emitting at most one contact per
/// overlapping particle. Platform state is owned by scene setup and stays
/// immutable for the lifetime of a simulation step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub start: Vec2,
    pub end: Vec2,
    /// Configured bounce coefficient. Kept for scene tuning; emitted contacts
    /// currently carry [`config::PLATFORM_RESTITUTION`] instead.
    pub restitution: f32,
}

impl Platform {
    /// Creates a platform after rejecting non-finite or degenerate segments.
    pub fn new(start: Vec2, end: Vec2, restitution: f32) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || !restitution.is_finite() {
            return Err(ContactError::NonFinite("platform"));
        }
        let length_sq = (end - start).length_squared();
        if length_sq < config::MIN_SEGMENT_LENGTH_SQ {
            return Err(ContactError::DegenerateSegment(length_sq));
        }
        Ok(Self {
            start,
            end,
            restitution,
        })
    }

    /// Segment direction from start to end, not normalized.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.end - self.start
    }
}

impl ContactGenerator for Platform {
    fn add_contacts(&self, particles: &[Particle], contacts: &mut [ParticleContact]) -> usize {
        let direction = self.direction();
        let length_sq = direction.length_squared();
        // Fields are public, so a platform mutated into a point after
        // construction would divide by zero below. Skip it instead.
        if length_sq < config::MIN_SEGMENT_LENGTH_SQ {
            log::warn!("skipping degenerate platform at {:?}", self.start);
            return 0;
        }

        let mut used = 0;
        for (index, particle) in particles.iter().enumerate() {
            if used >= contacts.len() {
                return used;
            }

            let to_particle = particle.position - self.start;
            let projected = to_particle.dot(direction);
            let radius_sq = particle.radius_sq();

            // Classify which region of the segment the center is nearest to.
            // All three comparisons stay in squared units, so the common
            // miss path never takes a square root.
            let (nearest, distance_sq) = if projected <= 0.0 {
                (self.start, to_particle.length_squared())
            } else if projected >= length_sq {
                (self.end, (particle.position - self.end).length_squared())
            } else {
                // Perpendicular distance to the line; the subtraction can
                // cancel to a tiny negative for centers almost on it.
                let perp_sq =
                    (to_particle.length_squared() - projected * projected / length_sq).max(0.0);
                (self.start + direction * (projected / length_sq), perp_sq)
            };

            if distance_sq >= radius_sq {
                continue;
            }

            let offset = particle.position - nearest;
            let normal = if offset.length_squared() < config::MIN_SEPARATION_SQ {
                // Center sits exactly on the platform, which leaves no
                // direction to separate along. Push out on the platform's
                // left side (counterclockwise from start->end).
                log::debug!("particle {index} centered on platform, using side normal");
                direction.perp() / length_sq.sqrt()
            } else {
                offset.normalize()
            };

            let distance = distance_sq.sqrt();
            contacts[used] = ParticleContact {
                body_a: ParticleId(index),
                body_b: None,
                normal,
                penetration: particle.radius - distance,
                // TODO: feed self.restitution through once the resolver
                // handles per-platform bounce; today every platform contact
                // is fully elastic.
                restitution: config::PLATFORM_RESTITUTION,
            };
            used += 1;
        }
        used
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_platform() -> Platform {
        Platform::new(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0), 0.6).unwrap()
    }

    fn fill(platform: &Platform, particles: &[Particle], cap: usize) -> Vec<ParticleContact> {
        let mut buffer = vec![ParticleContact::default(); cap];
        let used = platform.add_contacts(particles, &mut buffer);
        buffer.truncate(used);
        buffer
    }

    #[test]
    fn construction_rejects_degenerate_segment() {
        let err = Platform::new(Vec2::ONE, Vec2::ONE, 1.0).unwrap_err();
        assert!(matches!(err, ContactError::DegenerateSegment(_)));
    }

    #[test]
    fn interior_overlap_reports_perpendicular_normal() {
        let platform = flat_platform();
        let particle = Particle::new(Vec2::new(3.0, 1.5), 2.0).unwrap();

        let contacts = fill(&platform, &[particle], 4);
        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        assert_eq!(contact.body_a, ParticleId(0));
        assert!(contact.body_b.is_none());
        assert_relative_eq!(contact.penetration, 0.5, epsilon = 1e-5);
        assert_relative_eq!(contact.normal.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(contact.normal.y, 1.0, epsilon = 1e-5);
        // Normal must be perpendicular to the platform.
        assert_relative_eq!(contact.normal.dot(platform.direction()), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn endpoint_overlap_points_from_endpoint_to_center() {
        let platform = flat_platform();
        // Past the end endpoint, 1.0 away from it, radius 2.
        let particle = Particle::new(Vec2::new(10.6, 0.8), 2.0).unwrap();

        let contacts = fill(&platform, &[particle], 4);
        assert_eq!(contacts.len(), 1);
        let contact = &contacts[0];
        let expected = (particle.position - platform.end).normalize();
        assert_relative_eq!(contact.normal.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(contact.normal.y, expected.y, epsilon = 1e-5);
        let distance = (particle.position - platform.end).length();
        assert_relative_eq!(contact.penetration, 2.0 - distance, epsilon = 1e-5);
    }

    #[test]
    fn particle_beyond_endpoint_and_out_of_reach_misses() {
        let platform = flat_platform();
        // 5 units past the end, radius 2: endpoint distance test rejects it.
        let particle = Particle::new(Vec2::new(15.0, 0.0), 2.0).unwrap();
        assert!(fill(&platform, &[particle], 4).is_empty());
    }

    #[test]
    fn particle_centered_on_platform_gets_side_normal() {
        let platform = flat_platform();
        let particle = Particle::new(Vec2::ZERO, 2.0).unwrap();

        let contacts = fill(&platform, &[particle], 4);
        assert_eq!(contacts.len(), 1);
        assert_relative_eq!(contacts[0].penetration, 2.0, epsilon = 1e-5);
        // Left of start->end for a rightward platform is +Y.
        assert_relative_eq!(contacts[0].normal.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(contacts[0].normal.y, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn emitted_restitution_ignores_configured_value() {
        let platform = flat_platform();
        assert_relative_eq!(platform.restitution, 0.6);

        let particle = Particle::new(Vec2::new(0.0, 1.0), 2.0).unwrap();
        let contacts = fill(&platform, &[particle], 4);
        assert_relative_eq!(contacts[0].restitution, config::PLATFORM_RESTITUTION);
    }

    #[test]
    fn scan_stops_at_buffer_capacity() {
        let platform = flat_platform();
        let particles: Vec<Particle> = (0..5)
            .map(|i| Particle::new(Vec2::new(i as f32 * 2.0 - 4.0, 0.5), 1.0).unwrap())
            .collect();

        let mut buffer = vec![ParticleContact::default(); 3];
        let used = platform.add_contacts(&particles, &mut buffer);
        assert_eq!(used, 3);
        // Population order: the first three particles win the slots.
        assert_eq!(buffer[0].body_a, ParticleId(0));
        assert_eq!(buffer[2].body_a, ParticleId(2));

        let empty: &mut [ParticleContact] = &mut [];
        assert_eq!(platform.add_contacts(&particles, empty), 0);
    }

    #[test]
    fn touching_distance_is_not_a_contact() {
        let platform = flat_platform();
        // Perpendicular distance exactly equal to the radius.
        let particle = Particle::new(Vec2::new(0.0, 2.0), 2.0).unwrap();
        assert!(fill(&platform, &[particle], 4).is_empty());
    }
}
