//! Target Channel - single-use covert landing slot

/// Write-only slot through which a collaborator nominates a landing segment
///
/// The channel carries no information about how it was set; gesture
/// recognition is entirely the collaborator's concern. The only contract the
/// engine relies on is "an index, or nothing, available at stop time".
///
/// Stored indices are not validated here: the wheel's segment count can
/// change while a value is pending, so range reduction happens at
/// consumption, against the count in force at that moment.
#[derive(Debug, Default)]
pub struct TargetSlot {
    pending: Option<usize>,
}

impl TargetSlot {
    pub fn new() -> Self {
        TargetSlot::default()
    }

    /// Store a landing index, overwriting any unconsumed previous value
    pub fn set(&mut self, index: usize) {
        self.pending = Some(index);
    }

    /// Take the pending value, clearing the slot
    ///
    /// Idempotent on repeated calls: returns the stored value once, then
    /// None. Called exactly once per stop cycle, at stop time.
    pub fn consume(&mut self) -> Option<usize> {
        self.pending.take()
    }

    /// Drop any pending value without reading it
    pub fn clear(&mut self) {
        self.pending = None;
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.pending.is_some()
    }
}
