//! Rotation primitives for the spindle engine
//!
//! All angular arithmetic works in fractions of a full turn. 0 is the
//! reference orientation, where the pointer sits; the wheel rotates under it.

use std::ops::Add;

/// Wheel rotation as a fraction of a full turn
/// INVARIANT: the wrapped value is always in [0, 1)
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Turns(f64);

impl Turns {
    pub const ZERO: Turns = Turns(0.0);

    /// Wrap an arbitrary fraction-of-turn value into [0, 1)
    #[inline]
    pub fn wrap(value: f64) -> Self {
        Turns(value.rem_euclid(1.0))
    }

    #[inline]
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Advance by an angular delta (fraction of a turn), wrapping
    #[inline]
    pub fn advanced_by(self, delta: f64) -> Self {
        Turns::wrap(self.0 + delta)
    }

    /// Forward angular distance from `self` to `to`, in [0, 1)
    ///
    /// Measured in the direction of rotation, so the result is how far the
    /// wheel must still turn before `to` comes around.
    #[inline]
    pub fn forward_gap(self, to: Turns) -> f64 {
        (to.0 - self.0).rem_euclid(1.0)
    }
}

impl Add<f64> for Turns {
    type Output = Turns;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        self.advanced_by(rhs)
    }
}

impl std::fmt::Debug for Turns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}turn", self.0)
    }
}
