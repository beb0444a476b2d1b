//! Shape capability shared by `Circle` and `Triangle`.

/// Anything exposing an area. Object-safe, so callers may hold `&dyn Shape`.
pub trait Shape {
    /// Area of the shape; memoized by the implementors.
    fn area(&self) -> f64;
}
