use log::{log_enabled, Level};
use std::time::Instant;

/// Scoped timer that logs the duration of a labeled section at trace level.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("{} took {} µs", self.label, self.start.elapsed().as_micros());
        }
    }
}
