//! Landing Resolver - forcing computation and segment read-out
//!
//! Both algorithms work in fraction-of-turn arithmetic modulo 1.0, with a
//! fixed convention: segment i occupies the angular range [i/N, (i+1)/N)
//! measured from the reference direction, and the pointer sits at the
//! reference direction (angle 0) while the wheel rotates under it.

use spindle_core::{Turns, WheelConfig};

/// Rotation value at which segment `target`'s anchor point aligns with the
/// pointer
///
/// With the default anchor of 0.5 this is the segment center. `rem_euclid`
/// yields the non-negative residue directly, so no large-constant padding of
/// the subtraction is needed.
pub fn stop_position(target: usize, segment_count: usize, anchor: f64) -> Turns {
    let n = segment_count as f64;
    Turns::wrap(-(target as f64 / n) - anchor / n)
}

/// Theoretical total angular distance a decaying wheel travels from `speed`,
/// the sum of the infinite geometric decay series
#[inline]
pub fn natural_distance(speed: f64, friction: f64) -> f64 {
    speed / (1.0 - friction)
}

/// Forcing computation: the decay-phase initial speed that terminates the
/// stop cycle with segment `target` under the pointer
///
/// The chosen travel distance is the raw angular gap to the target's stop
/// position, padded by whole turns until it is at least the natural
/// coast-down distance of the current speed. That keeps the deceleration
/// looking physically continuous rather than visibly truncated or stretched.
///
/// `target` is range-reduced modulo N (its origin is an untrusted gesture).
/// Precondition: `config.segment_count >= 1`, enforced at configuration.
pub fn forcing_speed(current: Turns, speed: f64, target: usize, config: &WheelConfig) -> f64 {
    let target = target % config.segment_count;
    let stop_pos = stop_position(target, config.segment_count, config.landing_anchor);
    let natural = natural_distance(speed, config.friction);

    let mut distance = current.forward_gap(stop_pos);
    while distance < natural {
        distance += 1.0;
    }

    tracing::trace!(
        target,
        stop_pos = stop_pos.as_f64(),
        natural,
        distance,
        "forcing decay speed"
    );

    // The unique speed whose geometric decay sum equals the chosen distance
    distance * (1.0 - config.friction)
}

/// Resolution computation: the segment index under the pointer at `rotation`
///
/// One unified read-out path: the same formula is applied whether or not a
/// target steered the stop, so targeted and untargeted spins cannot be told
/// apart by outcome alone. The bias pushes exact-boundary float round-off
/// toward the intended segment instead of its neighbor.
pub fn resolve_index(rotation: Turns, segment_count: usize, bias: f64) -> usize {
    let final_pos = (1.0 - rotation.as_f64()).rem_euclid(1.0);
    let raw = (final_pos * segment_count as f64 + bias).floor() as usize;
    raw % segment_count
}
