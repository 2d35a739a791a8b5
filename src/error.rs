use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ContactError>;

/// Errors reported while validating scene inputs.
///
/// Contact generation itself never fails: a full output buffer is normal
/// early termination and degenerate geometry is handled in place. Errors
/// only arise when building particles and platforms from untrusted values.
#[derive(Debug, Error)]
pub enum ContactError {
    /// A coordinate or coefficient was NaN or infinite.
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),

    /// Particle radius outside the accepted range.
    #[error("particle radius must be finite and >= 0, got {0}")]
    InvalidRadius(f32),

    /// Platform endpoints coincide (or nearly so), leaving no line direction.
    #[error("platform endpoints are too close together (squared length {0:e})")]
    DegenerateSegment(f32),
}
