//! Stop-cycle outcomes

use crate::Turns;

/// Result of one completed stop cycle
///
/// Produced once per stop cycle and handed to the collaborator for display.
/// Labels are owned by the presentation layer; the engine reports the index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outcome {
    /// Resolved segment index in [0, N)
    pub index: usize,
    /// Terminal rotation the wheel came to rest at
    pub rotation: Turns,
    /// Total angular distance covered by the decay phase, in turns
    pub travel: f64,
}
