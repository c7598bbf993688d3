//! Wheel configuration

use crate::{WheelError, WheelResult};

/// Wheel engine configuration
///
/// The landing anchor and resolution bias are tuning constants: their only
/// hard requirement is that the forcing and resolution computations agree on
/// where a segment's angular range begins and ends.
#[derive(Clone, Debug, PartialEq)]
pub struct WheelConfig {
    /// Number of segments on the dial (N >= 1)
    pub segment_count: usize,
    /// Angular speed during free spin, fraction of a turn per tick
    pub cruise_speed: f64,
    /// Per-tick multiplicative speed decay, in (0, 1)
    pub friction: f64,
    /// Speed at or below which the decaying wheel counts as stopped
    pub stop_threshold: f64,
    /// Where inside a segment the forced stop lands, as a fraction of the
    /// segment width (0.5 = segment center)
    pub landing_anchor: f64,
    /// Small positive bias added before the floor in resolution, pushing
    /// float round-off at segment boundaries toward the intended segment
    pub resolution_bias: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        // Reference wheel constants
        WheelConfig {
            segment_count: 5,
            cruise_speed: 0.07,
            friction: 0.988,
            stop_threshold: 0.0001,
            landing_anchor: 0.5,
            resolution_bias: 0.01,
        }
    }
}

impl WheelConfig {
    /// Configuration with `segment_count` segments and default physics
    pub fn with_segments(segment_count: usize) -> Self {
        WheelConfig {
            segment_count,
            ..WheelConfig::default()
        }
    }

    /// Configuration with harder friction for short spins (tests, benches)
    pub fn quick_stop() -> Self {
        WheelConfig {
            friction: 0.9,
            ..WheelConfig::default()
        }
    }

    /// Check the configuration preconditions
    ///
    /// N = 0 is a configuration error, not a runtime failure: the engine
    /// refuses to enter the cruising phase with an empty wheel.
    pub fn validate(&self) -> WheelResult<()> {
        if self.segment_count == 0 {
            return Err(WheelError::EmptyWheel);
        }
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(WheelError::InvalidFriction(self.friction));
        }
        if self.cruise_speed <= 0.0 {
            return Err(WheelError::InvalidCruiseSpeed(self.cruise_speed));
        }
        if self.stop_threshold <= 0.0 {
            return Err(WheelError::InvalidStopThreshold(self.stop_threshold));
        }
        if !(0.0..1.0).contains(&self.landing_anchor) {
            return Err(WheelError::InvalidLandingAnchor(self.landing_anchor));
        }
        if self.resolution_bias < 0.0 {
            return Err(WheelError::InvalidResolutionBias(self.resolution_bias));
        }
        Ok(())
    }

    /// Angular width of one segment, fraction of a turn
    #[inline]
    pub fn segment_width(&self) -> f64 {
        1.0 / self.segment_count as f64
    }
}
