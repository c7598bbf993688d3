//! Shared engine handle for multi-callback hosts

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};
use spindle_core::SpinPhase;
use spindle_engine::{Frame, WheelEngine};

/// Clonable handle to one wheel engine
///
/// Interactive hosts often hand input events and frame callbacks to
/// different closures; this wraps the engine so each closure can hold its
/// own handle. Lock scope is a single call, never held across frames, so
/// the cooperative single-threaded model of the engine is preserved.
#[derive(Clone)]
pub struct SharedWheel {
    inner: Arc<Mutex<WheelEngine>>,
}

impl SharedWheel {
    pub fn new(engine: WheelEngine) -> Self {
        SharedWheel {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Lock the engine for a compound operation
    pub fn lock(&self) -> MutexGuard<'_, WheelEngine> {
        self.inner.lock()
    }

    pub fn spin_start(&self) {
        self.inner.lock().spin_start();
    }

    pub fn spin_stop(&self) {
        self.inner.lock().spin_stop();
    }

    pub fn set_target(&self, index: usize) {
        self.inner.lock().set_target(index);
    }

    pub fn advance(&self) -> Frame {
        self.inner.lock().advance()
    }

    pub fn phase(&self) -> SpinPhase {
        self.inner.lock().phase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::WheelConfig;

    #[test]
    fn test_handles_share_one_engine() {
        let wheel = SharedWheel::new(WheelEngine::new(WheelConfig::quick_stop()).unwrap());
        let input_handle = wheel.clone();

        wheel.spin_start();
        input_handle.set_target(2);
        assert!(wheel.lock().has_pending_target());

        wheel.advance();
        wheel.spin_stop();
        loop {
            if let Frame::Resolved(outcome) = wheel.advance() {
                assert_eq!(outcome.index, 2);
                break;
            }
        }
        assert_eq!(input_handle.phase(), SpinPhase::Idle);
    }
}
