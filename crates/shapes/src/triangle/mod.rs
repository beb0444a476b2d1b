//! Triangle with memoized area and right-angle classification.
//!
//! Purpose
//! - Reject degenerate input at construction (negative tolerance, points on a
//!   line) so the property formulas never see a flat triangle.
//! - Cache `area` and `is_right` independently: reading one never fills the other.
//!
//! Numerics
//! - The collinearity test is one-sided: the signed value
//!   `(a.y - b.y)·c.x + (b.x - a.x)·c.y + (a.x·b.y - b.x·a.y)` must exceed the
//!   tolerance. Clockwise triangles have a negative signed value and are
//!   rejected regardless of their size. Existing callers depend on this.
//! - Right-angle checks compare Pythagorean sums of squared sides against the
//!   absolute tolerance with strict `<`.

use nalgebra::Vector2;

use crate::cfg::DEFAULT_TOLERANCE;
use crate::error::InvalidArgument;
use crate::memo::Memo;
use crate::point::Point;
use crate::shape::Shape;

/// Non-degenerate triangle `abc`.
///
/// Invariants:
/// - `tolerance >= 0` (NaN rejected).
/// - `signed_collinearity(a, b, c) > tolerance`.
/// - Caches are filled on first read and never change afterwards.
#[derive(Clone, Debug)]
pub struct Triangle {
    a: Point,
    b: Point,
    c: Point,
    tolerance: f64,
    area: Memo<f64>,
    is_right: Memo<bool>,
}

impl Triangle {
    /// Build with `DEFAULT_TOLERANCE`.
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self, InvalidArgument> {
        Self::with_tolerance(a, b, c, DEFAULT_TOLERANCE)
    }

    pub fn with_tolerance(
        a: Point,
        b: Point,
        c: Point,
        tolerance: f64,
    ) -> Result<Self, InvalidArgument> {
        if tolerance.is_nan() || tolerance < 0.0 {
            let err = InvalidArgument::NegativeTolerance { tolerance };
            tracing::debug!(tolerance, error = %err, "triangle rejected");
            return Err(err);
        }
        let signed = signed_collinearity(a, b, c);
        if signed.is_nan() || signed <= tolerance {
            let err = InvalidArgument::Collinear { tolerance };
            tracing::debug!(%a, %b, %c, signed, tolerance, error = %err, "triangle rejected");
            return Err(err);
        }
        Ok(Self {
            a,
            b,
            c,
            tolerance,
            area: Memo::new(),
            is_right: Memo::new(),
        })
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }
    #[inline]
    pub fn c(&self) -> Point {
        self.c
    }
    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }
    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// `½ |(b − a) × (c − a)|`, computed once per instance.
    pub fn area(&self) -> f64 {
        self.area.get_or_compute(|| {
            let (ab, ac) = self.edges_from_a();
            let area = 0.5 * ab.perp(&ac).abs();
            tracing::trace!(area, "triangle area computed");
            area
        })
    }

    /// True if some angle is right within `tolerance`, computed once per instance.
    pub fn is_right(&self) -> bool {
        self.is_right.get_or_compute(|| {
            let [s1, s2, s3] = self.squared_sides();
            let tol = self.tolerance;
            let is_right = (s1 + s2 - s3).abs() < tol
                || (s2 + s3 - s1).abs() < tol
                || (s3 + s1 - s2).abs() < tol;
            tracing::trace!(is_right, "triangle right-angle computed");
            is_right
        })
    }

    /// Cached area, or `None` if `area()` was never called on this instance.
    #[inline]
    pub fn cached_area(&self) -> Option<f64> {
        self.area.get()
    }

    /// Cached classification, or `None` if `is_right()` was never called.
    #[inline]
    pub fn cached_is_right(&self) -> Option<bool> {
        self.is_right.get()
    }

    #[inline]
    fn edges_from_a(&self) -> (Vector2<f64>, Vector2<f64>) {
        let a: Vector2<f64> = self.a.into();
        (Vector2::from(self.b) - a, Vector2::from(self.c) - a)
    }

    /// `[|AB|², |BC|², |CA|²]`.
    fn squared_sides(&self) -> [f64; 3] {
        let [a, b, c] = self.points().map(Vector2::<f64>::from);
        [
            (b - a).norm_squared(),
            (c - b).norm_squared(),
            (a - c).norm_squared(),
        ]
    }
}

impl Shape for Triangle {
    #[inline]
    fn area(&self) -> f64 {
        Triangle::area(self)
    }
}

/// Twice the signed area of `abc`; positive for counterclockwise order.
///
/// Keep the expanded form: rewriting it as `(b − a) × (c − a)` changes rounding
/// near the tolerance boundary.
#[inline]
pub fn signed_collinearity(a: Point, b: Point, c: Point) -> f64 {
    (a.y() - b.y()) * c.x() + (b.x() - a.x()) * c.y() + (a.x() * b.y() - b.x() * a.y())
}
