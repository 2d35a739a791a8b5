use crate::{particle::Particle, utils::logging::ScopedTimer};

use super::contact::ParticleContact;

/// Capability shared by every contact generator: fill up to the buffer's
/// length with contact records and report how many slots were used.
///
/// Generators must write from index 0 of the slice they are handed, never
/// past its end, and must not mutate particle state. A full buffer is normal
/// early termination, not an error.
pub trait ContactGenerator: Send + Sync {
    fn add_contacts(&self, particles: &[Particle], contacts: &mut [ParticleContact]) -> usize;
}

/// Ordered, heterogeneous collection of contact generators sharing one
/// output buffer per simulation step.
///
/// The pipeline threads the write cursor between generators by re-slicing
/// the buffer, so each generator sees an exclusive view of the remaining
/// free slots. Calls run strictly in registration order.
#[derive(Default)]
pub struct ContactPipeline {
    generators: Vec<Box<dyn ContactGenerator>>,
}

impl ContactPipeline {
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    pub fn add_generator<G: ContactGenerator + 'static>(&mut self, generator: G) {
        self.generators.push(Box::new(generator));
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Runs every generator in order against `contacts`, returning the total
    /// number of records written.
    ///
    /// Stops as soon as the buffer is full; generators that did not get a
    /// turn contribute nothing this step and are retried fresh on the next.
    pub fn generate(&self, particles: &[Particle], contacts: &mut [ParticleContact]) -> usize {
        let _timer = ScopedTimer::new("contacts::generate");

        let mut used = 0;
        for (index, generator) in self.generators.iter().enumerate() {
            if used >= contacts.len() {
                log::debug!(
                    "contact buffer full at {used}, skipping {} generators",
                    self.generators.len() - index
                );
                break;
            }
            used += generator.add_contacts(particles, &mut contacts[used..]);
        }
        used
    }

    /// Convenience wrapper that owns the buffer: fills a fresh list bounded
    /// by `max_contacts` and returns only the records actually written.
    pub fn collect_contacts(
        &self,
        particles: &[Particle],
        max_contacts: usize,
    ) -> Vec<ParticleContact> {
        let mut contacts = vec![ParticleContact::default(); max_contacts];
        let used = self.generate(particles, &mut contacts);
        contacts.truncate(used);
        contacts
    }
}
