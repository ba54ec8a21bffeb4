//! Error types for the aeolus-sounding crate.

/// Error type for sounding construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SoundingError {
    /// Returned when the profile has no levels at all.
    #[error("sounding has no levels")]
    EmptyProfile,

    /// Returned when a field's length differs from the pressure sequence.
    #[error("{field}: expected {expected} levels, got {got}")]
    LengthMismatch {
        /// Name of the mismatched field.
        field: &'static str,
        /// Expected length (the pressure sequence length).
        expected: usize,
        /// Actual length.
        got: usize,
    },
}
