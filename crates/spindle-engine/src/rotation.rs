//! Rotation Simulator - cruise and decay regimes

use spindle_core::{SpinPhase, Turns};

/// Rotation Simulator - owns continuous rotation state and angular speed
///
/// Advances once per tick under one of two regimes: constant cruise speed
/// (free spin) or exponential frictional decay (stopping). State persists
/// across stop cycles; the terminal rotation of one cycle is the starting
/// rotation of the next.
///
/// INVARIANT: decay-phase speed is monotonically non-increasing.
#[derive(Debug)]
pub struct RotationSim {
    /// Absolute angular offset, fraction of a full turn in [0, 1)
    rotation: Turns,
    /// Angular speed, fraction of a turn advanced per tick
    speed: f64,
    /// Lifecycle phase
    phase: SpinPhase,
    /// Distance covered since the decay regime began, in turns
    decay_travel: f64,
}

impl RotationSim {
    pub fn new() -> Self {
        RotationSim {
            rotation: Turns::ZERO,
            speed: 0.0,
            phase: SpinPhase::Idle,
            decay_travel: 0.0,
        }
    }

    #[inline]
    pub fn rotation(&self) -> Turns {
        self.rotation
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    #[inline]
    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    /// Distance covered since the decay regime began, in turns
    #[inline]
    pub fn decay_travel(&self) -> f64 {
        self.decay_travel
    }

    /// Reposition the wheel without spinning it
    ///
    /// Host-side initialization; meaningless (and ignored) while in motion.
    pub fn align_to(&mut self, rotation: Turns) {
        if !self.phase.is_spinning() {
            self.rotation = rotation;
        }
    }

    /// Enter the cruise regime. Only meaningful from Idle; returns whether
    /// the transition happened.
    pub fn start_cruise(&mut self, cruise_speed: f64) -> bool {
        if self.phase != SpinPhase::Idle {
            return false;
        }
        self.speed = cruise_speed;
        self.phase = SpinPhase::Cruising;
        true
    }

    /// Advance one cruise tick: rotation <- (rotation + speed) mod 1.0
    pub fn tick_cruise(&mut self) {
        debug_assert_eq!(self.phase, SpinPhase::Cruising);
        self.rotation = self.rotation.advanced_by(self.speed);
    }

    /// Transition from cruise to decay with the given initial speed. Only
    /// meaningful from Cruising; returns whether the transition happened.
    pub fn begin_decay(&mut self, initial_speed: f64) -> bool {
        if self.phase != SpinPhase::Cruising {
            return false;
        }
        debug_assert!(initial_speed >= 0.0, "negative decay speed");
        self.speed = initial_speed;
        self.decay_travel = 0.0;
        self.phase = SpinPhase::Decaying;
        true
    }

    /// Advance one decay tick: rotation advances by the current speed, then
    /// the speed shrinks by the friction factor. Returns true once the speed
    /// has fallen to or below `stop_threshold` (the simulator is Stopped).
    ///
    /// Advance-before-decay order matters: with initial speed d * (1 - F)
    /// the delivered travel sums to the chosen distance d, minus only the
    /// truncated tail below the threshold.
    pub fn tick_decay(&mut self, friction: f64, stop_threshold: f64) -> bool {
        debug_assert_eq!(self.phase, SpinPhase::Decaying);
        debug_assert!(self.speed >= 0.0, "negative decay speed");

        self.rotation = self.rotation.advanced_by(self.speed);
        self.decay_travel += self.speed;
        self.speed *= friction;

        if self.speed <= stop_threshold {
            self.phase = SpinPhase::Stopped;
            return true;
        }
        false
    }

    /// Return to Idle after the outcome has been read. Rotation is kept.
    pub fn finish(&mut self) {
        debug_assert_eq!(self.phase, SpinPhase::Stopped);
        self.speed = 0.0;
        self.phase = SpinPhase::Idle;
    }
}

impl Default for RotationSim {
    fn default() -> Self {
        Self::new()
    }
}
