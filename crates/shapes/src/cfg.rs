//! Tolerance defaults (internal).
//!
//! Policy
//! - Defaults are fixed constants. The only runtime knob is the per-instance
//!   tolerance passed to `Triangle::with_tolerance`.

/// Tolerance used by `Triangle::new` for the collinearity and right-angle checks.
pub const DEFAULT_TOLERANCE: f64 = 0.0001;
