//! Wheel Engine - host-facing facade over simulator, resolver, and channel

use spindle_core::{Outcome, SpinPhase, Turns, WheelConfig, WheelResult};

use crate::landing;
use crate::{RotationSim, TargetSlot};

/// Result of a single `advance()` call
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Frame {
    /// No spin in progress; nothing advanced
    Idle,
    /// The wheel moved this frame; redraw at this rotation. `speed` is the
    /// angular speed remaining after the tick.
    Moved { rotation: Turns, speed: f64 },
    /// The wheel came to rest this frame; outcome resolved, engine back to
    /// Idle
    Resolved(Outcome),
}

/// Wheel Engine - owns rotation/speed state, the target channel, and the
/// stop-cycle lifecycle
///
/// Single-threaded and frame-driven: the host's animation scheduler calls
/// `advance()` once per frame, and the two public entry points
/// (`spin_start`, `spin_stop`) are expected from the same execution context,
/// never concurrently with a tick. Cancellation is simply not calling
/// `advance()` again.
pub struct WheelEngine {
    config: WheelConfig,
    sim: RotationSim,
    target: TargetSlot,
}

impl WheelEngine {
    /// Create an engine, rejecting invalid configuration up front
    pub fn new(config: WheelConfig) -> WheelResult<Self> {
        config.validate()?;
        Ok(WheelEngine {
            config,
            sim: RotationSim::new(),
            target: TargetSlot::new(),
        })
    }

    #[inline]
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    #[inline]
    pub fn rotation(&self) -> Turns {
        self.sim.rotation()
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.sim.speed()
    }

    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.sim.phase()
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.sim.phase().is_spinning()
    }

    /// Whether a covert target is pending for the next stop cycle
    #[inline]
    pub fn has_pending_target(&self) -> bool {
        self.target.is_set()
    }

    /// Change the segment count. A pending target stays pending; it is
    /// range-reduced against the new count when consumed.
    pub fn configure_segments(&mut self, segment_count: usize) -> WheelResult<()> {
        let candidate = WheelConfig {
            segment_count,
            ..self.config.clone()
        };
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }

    /// Reposition the wheel while at rest (host-side initialization)
    pub fn align_rotation(&mut self, rotation: Turns) {
        self.sim.align_to(rotation);
    }

    /// Nominate a landing segment for the next stop cycle
    ///
    /// No validation happens here; the index is range-reduced modulo the
    /// segment count in force when the stop cycle consumes it.
    pub fn set_target(&mut self, index: usize) {
        self.target.set(index);
        tracing::trace!(index, "landing target set");
    }

    /// Enter the cruise regime. No-op unless Idle.
    pub fn spin_start(&mut self) {
        if self.sim.start_cruise(self.config.cruise_speed) {
            tracing::debug!(speed = self.config.cruise_speed, "spin started");
        }
    }

    /// Request a stop: consume the target channel, adjust the decay speed if
    /// a target was pending, and enter the decay regime. No-op unless
    /// Cruising (duplicate stop requests and stops while Idle are ignored).
    pub fn spin_stop(&mut self) {
        if self.sim.phase() != SpinPhase::Cruising {
            return;
        }

        let target = self.target.consume();
        let initial_speed = match target {
            Some(index) => landing::forcing_speed(
                self.sim.rotation(),
                self.sim.speed(),
                index,
                &self.config,
            ),
            None => self.sim.speed(),
        };

        self.sim.begin_decay(initial_speed);
        tracing::debug!(forced = target.is_some(), "stop requested");
    }

    /// Advance one frame under the current regime
    ///
    /// Cruise and decay are never both advanced in one frame: `spin_stop`
    /// switches the regime in place between frames. When the decay regime
    /// terminates, the outcome is resolved from the terminal rotation, any
    /// still-pending target is dropped, and the engine returns to Idle.
    pub fn advance(&mut self) -> Frame {
        match self.sim.phase() {
            SpinPhase::Idle | SpinPhase::Stopped => Frame::Idle,
            SpinPhase::Cruising => {
                self.sim.tick_cruise();
                Frame::Moved {
                    rotation: self.sim.rotation(),
                    speed: self.sim.speed(),
                }
            }
            SpinPhase::Decaying => {
                let stopped = self
                    .sim
                    .tick_decay(self.config.friction, self.config.stop_threshold);
                if !stopped {
                    return Frame::Moved {
                        rotation: self.sim.rotation(),
                        speed: self.sim.speed(),
                    };
                }

                let outcome = Outcome {
                    index: landing::resolve_index(
                        self.sim.rotation(),
                        self.config.segment_count,
                        self.config.resolution_bias,
                    ),
                    rotation: self.sim.rotation(),
                    travel: self.sim.decay_travel(),
                };
                self.sim.finish();
                // A target set mid-decay does not leak into the next cycle
                self.target.clear();
                tracing::debug!(index = outcome.index, travel = outcome.travel, "wheel at rest");
                Frame::Resolved(outcome)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::WheelError;

    fn settle(engine: &mut WheelEngine) -> Outcome {
        for _ in 0..100_000 {
            if let Frame::Resolved(outcome) = engine.advance() {
                return outcome;
            }
        }
        panic!("wheel never came to rest");
    }

    #[test]
    fn test_rejects_empty_wheel() {
        let result = WheelEngine::new(WheelConfig::with_segments(0));
        assert_eq!(result.err(), Some(WheelError::EmptyWheel));
    }

    #[test]
    fn test_configure_segments_rejects_zero() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        assert_eq!(
            engine.configure_segments(0),
            Err(WheelError::EmptyWheel)
        );
        assert_eq!(engine.config().segment_count, 5);

        assert!(engine.configure_segments(8).is_ok());
        assert_eq!(engine.config().segment_count, 8);
    }

    #[test]
    fn test_advance_while_idle_is_noop() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        assert_eq!(engine.advance(), Frame::Idle);
        assert_eq!(engine.rotation(), Turns::ZERO);
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_stop();
        assert_eq!(engine.phase(), SpinPhase::Idle);
    }

    #[test]
    fn test_duplicate_start_and_stop_ignored() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_start();
        let speed = engine.speed();
        engine.spin_start();
        assert_eq!(engine.speed(), speed);
        assert_eq!(engine.phase(), SpinPhase::Cruising);

        engine.spin_stop();
        let decay_speed = engine.speed();
        engine.spin_stop();
        assert_eq!(engine.speed(), decay_speed);
        assert_eq!(engine.phase(), SpinPhase::Decaying);
    }

    #[test]
    fn test_full_cycle_returns_to_idle() {
        let mut engine = WheelEngine::new(WheelConfig::quick_stop()).unwrap();
        engine.spin_start();
        for _ in 0..10 {
            engine.advance();
        }
        engine.spin_stop();

        let outcome = settle(&mut engine);
        assert!(outcome.index < 5);
        assert_eq!(engine.phase(), SpinPhase::Idle);
        assert_eq!(engine.rotation(), outcome.rotation);

        // The engine is reusable for the next cycle
        engine.spin_start();
        assert_eq!(engine.phase(), SpinPhase::Cruising);
    }

    #[test]
    fn test_forced_cycle_lands_on_target() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_start();
        for _ in 0..7 {
            engine.advance();
        }
        engine.set_target(2);
        engine.spin_stop();

        let outcome = settle(&mut engine);
        assert_eq!(outcome.index, 2);
        assert!(!engine.has_pending_target());
    }

    #[test]
    fn test_target_set_mid_cruise_applies_at_stop() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.set_target(4);
        engine.spin_start();
        for _ in 0..31 {
            engine.advance();
        }
        engine.spin_stop();

        assert_eq!(settle(&mut engine).index, 4);
    }

    #[test]
    fn test_out_of_range_target_normalized() {
        // set_target(N + k) behaves identically to set_target(k mod N)
        for offset in [0usize, 5, 10, 95] {
            let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
            engine.spin_start();
            for _ in 0..13 {
                engine.advance();
            }
            engine.set_target(3 + offset);
            engine.spin_stop();
            assert_eq!(settle(&mut engine).index, 3);
        }
    }

    #[test]
    fn test_target_revalidated_against_new_segment_count() {
        // Target set under N = 5, consumed under N = 3: reduced modulo 3
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.set_target(4);
        engine.configure_segments(3).unwrap();
        engine.spin_start();
        for _ in 0..11 {
            engine.advance();
        }
        engine.spin_stop();

        assert_eq!(settle(&mut engine).index, 4 % 3);
    }

    #[test]
    fn test_fair_stop_keeps_cruise_speed() {
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_start();
        engine.advance();
        engine.spin_stop();
        assert_eq!(engine.speed(), engine.config().cruise_speed);
    }

    #[test]
    fn test_fair_spin_is_deterministic() {
        // Concrete scenario: N = 5, no target, cruise 0.07, rotation 0.37
        // at the stop request; identical inputs give identical outcomes
        let run = || {
            let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
            engine.align_rotation(Turns::wrap(0.37));
            engine.spin_start();
            engine.spin_stop();
            settle(&mut engine)
        };

        let first = run();
        let second = run();
        assert_eq!(first.index, second.index);
        assert_eq!(first.rotation, second.rotation);
        assert_eq!(first.travel, second.travel);
    }

    #[test]
    fn test_forced_and_fair_share_resolution() {
        // Resolution is a pure function of final rotation: rerunning the
        // read-out on a forced outcome's rotation gives the same index
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_start();
        for _ in 0..3 {
            engine.advance();
        }
        engine.set_target(1);
        engine.spin_stop();
        let outcome = settle(&mut engine);

        let replayed = crate::landing::resolve_index(outcome.rotation, 5, 0.01);
        assert_eq!(replayed, outcome.index);
    }

    #[test]
    fn test_target_dropped_after_fair_cycle() {
        // A target set during decay does not leak into the next cycle
        let mut engine = WheelEngine::new(WheelConfig::default()).unwrap();
        engine.spin_start();
        engine.advance();
        engine.spin_stop();
        engine.set_target(1);
        settle(&mut engine);
        assert!(!engine.has_pending_target());
    }
}
