//! Error types for the aeolus-trend crate.

/// Error type for structurally malformed trend input.
///
/// "Not enough data" is deliberately absent: short series map to a
/// degenerate [`TrendAnalysis`](crate::TrendAnalysis) instead of an error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TrendError {
    /// Returned when years are not strictly ascending.
    #[error("series years not strictly ascending at index {index}")]
    UnsortedYears {
        /// Index of the first out-of-order observation.
        index: usize,
    },

    /// Returned when a value is NaN or infinite.
    #[error("non-finite value for year {year}")]
    NonFiniteValue {
        /// Year of the offending observation.
        year: i32,
    },

    /// Returned when a window parameter is zero.
    #[error("invalid window size: {window} (must be >= 1)")]
    InvalidWindow {
        /// The rejected window size.
        window: usize,
    },
}
