//! Immutable 2D shapes with validated construction and memoized properties.
//!
//! Purpose
//! - `Point`, `Circle`, `Triangle` are plain values: construction checks the
//!   invariants once and either returns the shape or an `InvalidArgument`.
//! - Derived properties (area, right-angle flag) are computed on first read
//!   and cached per instance (`Memo`), so later reads are O(1).
//!
//! Conventions
//! - Error messages are part of the contract; consumers compare them literally.
//! - Tolerances are absolute (no scaling by side lengths).
//! - The library emits `tracing` events but never installs a subscriber.

pub mod cfg;
pub mod circle;
pub mod error;
pub mod memo;
pub mod point;
pub mod shape;
pub mod triangle;

pub use cfg::DEFAULT_TOLERANCE;
pub use circle::Circle;
pub use error::InvalidArgument;
pub use memo::Memo;
pub use point::Point;
pub use shape::Shape;
pub use triangle::Triangle;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::{Circle, InvalidArgument, Point, Shape, Triangle, DEFAULT_TOLERANCE};
}
