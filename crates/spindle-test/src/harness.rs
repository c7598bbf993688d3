//! Spin harness - full frame-driven simulation for engine testing

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spindle_core::{Outcome, Turns, WheelConfig};
use spindle_engine::{Frame, WheelEngine};

/// Spin harness - drives the engine like a host scheduler and keeps stats
pub struct SpinHarness {
    engine: WheelEngine,
    stats: SpinStats,
}

/// What one harness run observed
#[derive(Clone, Debug, Default)]
pub struct SpinStats {
    /// Frames executed across all regimes
    pub frames: u64,
    /// Frames executed in the cruise regime
    pub cruise_frames: u64,
    /// Frames executed in the decay regime
    pub decay_frames: u64,
    /// Highest speed observed after any decay tick
    pub peak_decay_speed: f64,
    /// Whether decay speed ever increased between consecutive frames
    pub decay_speed_increased: bool,
}

impl SpinHarness {
    pub fn new(config: WheelConfig) -> Self {
        let engine = WheelEngine::new(config).expect("harness config must be valid");
        SpinHarness {
            engine,
            stats: SpinStats::default(),
        }
    }

    #[inline]
    pub fn engine(&self) -> &WheelEngine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut WheelEngine {
        &mut self.engine
    }

    #[inline]
    pub fn stats(&self) -> &SpinStats {
        &self.stats
    }

    /// Start a spin and cruise for a number of frames
    pub fn cruise_for(&mut self, frames: u64) {
        self.engine.spin_start();
        for _ in 0..frames {
            self.engine.advance();
            self.stats.frames += 1;
            self.stats.cruise_frames += 1;
        }
    }

    /// Request a stop and advance frames until the wheel rests
    ///
    /// Panics if the wheel does not rest within `max_frames`; decay is
    /// guaranteed to terminate, so a trip here means a broken invariant.
    pub fn stop_and_settle(&mut self, max_frames: u64) -> Outcome {
        self.engine.spin_stop();

        let mut last_speed = self.engine.speed();
        for _ in 0..max_frames {
            let frame = self.engine.advance();
            self.stats.frames += 1;
            self.stats.decay_frames += 1;

            match frame {
                Frame::Moved { speed, .. } => {
                    if speed > last_speed {
                        self.stats.decay_speed_increased = true;
                    }
                    self.stats.peak_decay_speed = self.stats.peak_decay_speed.max(speed);
                    last_speed = speed;
                }
                Frame::Resolved(outcome) => return outcome,
                Frame::Idle => panic!("engine went idle without resolving an outcome"),
            }
        }
        panic!("wheel did not rest within {max_frames} frames");
    }

    /// One complete cycle: cruise, then stop and settle
    pub fn full_cycle(&mut self, cruise_frames: u64) -> Outcome {
        self.cruise_for(cruise_frames);
        self.stop_and_settle(1_000_000)
    }
}

/// Predefined harness scenarios
pub mod scenarios {
    use super::*;

    /// The reference five-segment wheel
    pub fn reference_wheel() -> SpinHarness {
        SpinHarness::new(WheelConfig::default())
    }

    /// Reference wheel with a covert target already pending
    pub fn rigged_wheel(target: usize) -> SpinHarness {
        let mut harness = SpinHarness::new(WheelConfig::default());
        harness.engine_mut().set_target(target);
        harness
    }

    /// A wheel of `segment_count` segments starting from a seeded random
    /// rotation - randomized but reproducible
    pub fn seeded_wheel(segment_count: usize, seed: u64) -> SpinHarness {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut harness = SpinHarness::new(WheelConfig::with_segments(segment_count));
        harness
            .engine_mut()
            .align_rotation(Turns::wrap(rng.gen_range(0.0..1.0)));
        harness
    }
}
