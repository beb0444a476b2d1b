//! Publish-once cache for derived shape properties.
//!
//! State machine: `Uncomputed → Computed(value)`, filled by the first read and
//! never invalidated. Backed by `OnceLock`, so a shared `&Memo` may be read
//! from several threads; concurrent first readers block until the single
//! initializer publishes.

use std::fmt;
use std::sync::OnceLock;

/// Lazily computed value, filled at most once.
#[derive(Clone, Default)]
pub struct Memo<T> {
    slot: OnceLock<T>,
}

impl<T: Copy> Memo<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Return the cached value, running `compute` only if nothing is cached yet.
    #[inline]
    pub fn get_or_compute(&self, compute: impl FnOnce() -> T) -> T {
        *self.slot.get_or_init(compute)
    }

    /// Peek at the cached value without computing.
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.slot.get().copied()
    }

    #[inline]
    pub fn is_computed(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T: fmt::Debug> fmt::Debug for Memo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(v) => f.debug_tuple("Computed").field(v).finish(),
            None => f.write_str("Uncomputed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn computes_once() {
        let memo = Memo::new();
        let calls = Cell::new(0u32);
        let compute = || {
            calls.set(calls.get() + 1);
            42.0_f64
        };
        assert_eq!(memo.get(), None);
        assert_eq!(memo.get_or_compute(compute), 42.0);
        assert_eq!(memo.get_or_compute(compute), 42.0);
        assert_eq!(memo.get_or_compute(compute), 42.0);
        assert_eq!(calls.get(), 1);
        assert_eq!(memo.get(), Some(42.0));
    }

    #[test]
    fn zero_is_a_real_value() {
        // A cached 0.0 must not look like "not computed".
        let memo = Memo::new();
        assert!(!memo.is_computed());
        assert_eq!(memo.get_or_compute(|| 0.0_f64), 0.0);
        assert!(memo.is_computed());
        assert_eq!(memo.get_or_compute(|| 1.0), 0.0);
    }

    #[test]
    fn clone_keeps_state() {
        let memo: Memo<bool> = Memo::new();
        let cold = memo.clone();
        memo.get_or_compute(|| true);
        let warm = memo.clone();
        assert!(!cold.is_computed());
        assert_eq!(warm.get(), Some(true));
    }

    #[test]
    fn debug_shows_state() {
        let memo: Memo<f64> = Memo::default();
        assert_eq!(format!("{memo:?}"), "Uncomputed");
        memo.get_or_compute(|| 2.5);
        assert_eq!(format!("{memo:?}"), "Computed(2.5)");
    }

    #[test]
    fn concurrent_first_reads_agree() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let memo: Memo<f64> = Memo::new();
        let calls = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let v = memo.get_or_compute(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        std::f64::consts::PI
                    });
                    assert_eq!(v, std::f64::consts::PI);
                });
            }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
