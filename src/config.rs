//! Global configuration constants for the contact generation layer.

/// Restitution written into every platform contact.
///
/// Platforms carry their own coefficient for scene tuning, but emitted
/// contacts currently always use this constant. See DESIGN.md before
/// changing it.
pub const PLATFORM_RESTITUTION: f32 = 1.0;

/// Restitution written into pairwise particle contacts.
pub const DEFAULT_RESTITUTION: f32 = 1.0;

/// Squared length below which a platform segment counts as degenerate.
pub const MIN_SEGMENT_LENGTH_SQ: f32 = 1e-10;

/// Squared separation below which two points cannot define a contact normal.
pub const MIN_SEPARATION_SQ: f32 = 1e-12;

/// Default buffer size for callers that let the pipeline own the allocation.
pub const DEFAULT_CONTACT_CAPACITY: usize = 256;
