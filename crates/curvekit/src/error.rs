use thiserror::Error;

/// Errors produced when a curve cannot be built from the supplied arguments.
///
/// Both variants render with the same `argument(s) out of range` prefix; match
/// on the variant to tell the causes apart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The control-point set is smaller than the method needs.
    #[error("argument(s) out of range: need at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of points required.
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
    /// The query abscissa lies outside the sampled domain.
    #[error("argument(s) out of range: {x} is outside [{min}, {max}]")]
    OutOfDomain {
        /// Requested abscissa.
        x: f64,
        /// First sample abscissa.
        min: f64,
        /// Last sample abscissa.
        max: f64,
    },
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
