//! Frame driver - scheduler-facing wrapper around the engine

use spindle_core::{Outcome, Turns};
use spindle_engine::{Frame, WheelEngine};

/// Redraw callback, invoked after every frame that moved the wheel
pub type RedrawHook = Box<dyn FnMut(Turns)>;

/// Outcome callback, invoked once per completed stop cycle
pub type OutcomeHook = Box<dyn FnMut(&Outcome)>;

/// Frame driver - owns the engine and dispatches its frames to host hooks
///
/// The host's animation scheduler decides when `frame()` runs (fixed
/// timestep or refresh-driven); cancellation is simply not calling it again.
pub struct FrameDriver {
    engine: WheelEngine,
    on_redraw: Option<RedrawHook>,
    on_outcome: Option<OutcomeHook>,
}

impl FrameDriver {
    pub fn new(engine: WheelEngine) -> Self {
        FrameDriver {
            engine,
            on_redraw: None,
            on_outcome: None,
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

    /// Install the redraw hook
    pub fn redraw_hook(&mut self, hook: impl FnMut(Turns) + 'static) {
        self.on_redraw = Some(Box::new(hook));
    }

    /// Install the outcome hook
    pub fn outcome_hook(&mut self, hook: impl FnMut(&Outcome) + 'static) {
        self.on_outcome = Some(Box::new(hook));
    }

    /// Run one frame: advance the engine and dispatch hooks
    ///
    /// The redraw hook fires for every frame that moved the wheel, including
    /// the terminal one; the outcome hook fires once per stop cycle, after
    /// the terminal redraw.
    pub fn frame(&mut self) -> Frame {
        let frame = self.engine.advance();
        match frame {
            Frame::Idle => {}
            Frame::Moved { rotation, .. } => {
                if let Some(hook) = &mut self.on_redraw {
                    hook(rotation);
                }
            }
            Frame::Resolved(outcome) => {
                if let Some(hook) = &mut self.on_redraw {
                    hook(outcome.rotation);
                }
                if let Some(hook) = &mut self.on_outcome {
                    hook(&outcome);
                }
            }
        }
        frame
    }

    /// Drive frames until the wheel comes to rest, or `max_frames` elapse
    ///
    /// Returns the outcome if the wheel stopped within the budget. Intended
    /// for hosts without a frame scheduler (tests, batch tools); interactive
    /// hosts call `frame()` from their animation callback instead.
    pub fn run_to_rest(&mut self, max_frames: u64) -> Option<Outcome> {
        for _ in 0..max_frames {
            match self.frame() {
                Frame::Resolved(outcome) => return Some(outcome),
                Frame::Idle => return None,
                Frame::Moved { .. } => {}
            }
        }
        None
    }
}
