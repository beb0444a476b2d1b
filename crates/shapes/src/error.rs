//! Construction errors.
//!
//! All variants are the same condition kind (an invalid constructor
//! argument). The `Display` strings are compared literally by existing
//! consumers, typos included; do not reword them.

/// Rejected constructor input. Property reads never produce this.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// `Circle::new` with `radius <= 0` (or NaN).
    #[error("Radius must be bigger then 0")]
    NonPositiveRadius { radius: f64 },
    /// `Triangle::with_tolerance` with `tolerance < 0` (or NaN).
    #[error("Tolerance must be greater then or equal to 0")]
    NegativeTolerance { tolerance: f64 },
    /// Signed collinearity value did not exceed the tolerance.
    #[error("Points must not be on a straight line! Tolerance: {tolerance}")]
    Collinear { tolerance: f64 },
}

impl InvalidArgument {
    /// Name of the offending constructor argument.
    pub fn argument(&self) -> &'static str {
        match self {
            Self::NonPositiveRadius { .. } => "radius",
            Self::NegativeTolerance { .. } => "tolerance",
            Self::Collinear { .. } => "points",
        }
    }
}
