//! Circle with a memoized area.

use std::f64::consts::PI;

use crate::error::InvalidArgument;
use crate::memo::Memo;
use crate::shape::Shape;

/// Circle of strictly positive radius.
///
/// Invariants:
/// - `radius > 0` (NaN rejected).
/// - `area` is filled on first read and never changes afterwards.
#[derive(Clone, Debug)]
pub struct Circle {
    radius: f64,
    area: Memo<f64>,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, InvalidArgument> {
        if radius.is_nan() || radius <= 0.0 {
            let err = InvalidArgument::NonPositiveRadius { radius };
            tracing::debug!(radius, error = %err, "circle rejected");
            return Err(err);
        }
        Ok(Self {
            radius,
            area: Memo::new(),
        })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `π r²`, computed once per instance.
    pub fn area(&self) -> f64 {
        self.area.get_or_compute(|| {
            let area = PI * self.radius.powi(2);
            tracing::trace!(radius = self.radius, area, "circle area computed");
            area
        })
    }

    /// Cached area, or `None` if `area()` was never called on this instance.
    #[inline]
    pub fn cached_area(&self) -> Option<f64> {
        self.area.get()
    }
}

impl Shape for Circle {
    #[inline]
    fn area(&self) -> f64 {
        Circle::area(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOL: f64 = 1e-5;

    #[test]
    fn rejects_non_positive_radius() {
        for radius in [0.0, -0.001, -5.0, -0.0, f64::NAN, f64::NEG_INFINITY] {
            let err = Circle::new(radius).unwrap_err();
            assert!(matches!(err, InvalidArgument::NonPositiveRadius { .. }));
            assert_eq!(err.to_string(), "Radius must be bigger then 0");
        }
    }

    #[test]
    fn area_known_values() {
        for (radius, expected) in [(1.0, PI), (0.01, PI / 10000.0), (5.0, PI * 25.0)] {
            let c = Circle::new(radius).unwrap();
            assert!(
                (c.area() - expected).abs() < TOL,
                "r={radius}: {} vs {expected}",
                c.area()
            );
        }
    }

    #[test]
    fn area_is_memoized() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.cached_area(), None);
        let a1 = c.area();
        assert_eq!(c.cached_area(), Some(a1));
        let a2 = c.area();
        let a3 = c.area();
        assert_eq!(a1.to_bits(), a2.to_bits());
        assert_eq!(a1.to_bits(), a3.to_bits());
        assert!((a1 - PI * 25.0).abs() < TOL);
    }

    #[test]
    fn clone_of_cold_circle_is_cold() {
        let c = Circle::new(2.0).unwrap();
        let d = c.clone();
        c.area();
        assert!(c.cached_area().is_some());
        assert!(d.cached_area().is_none());
        assert_eq!(d.radius(), 2.0);
    }

    #[test]
    fn usable_as_dyn_shape() {
        let c = Circle::new(1.0).unwrap();
        let s: &dyn Shape = &c;
        assert!((s.area() - PI).abs() < TOL);
        assert_eq!(c.cached_area(), Some(s.area()));
    }

    proptest! {
        #[test]
        fn area_matches_formula(radius in 1e-3f64..1e3) {
            let c = Circle::new(radius).unwrap();
            let expected = PI * radius * radius;
            prop_assert!((c.area() - expected).abs() <= 1e-9 * expected.max(1.0));
        }

        #[test]
        fn negative_radius_always_rejected(radius in -1e6f64..=0.0) {
            prop_assert_eq!(
                Circle::new(radius).unwrap_err(),
                InvalidArgument::NonPositiveRadius { radius }
            );
        }
    }
}
