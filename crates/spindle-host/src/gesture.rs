//! Covert gesture adapters
//!
//! These recognizers turn hidden host input into a landing target. They end
//! in a plain index handed to `WheelEngine::set_target`; the engine never
//! learns how the target was chosen. Timestamps are injected by the caller
//! in milliseconds, so recognition is deterministic and testable.

/// Chord recognizer configuration
#[derive(Clone, Debug)]
pub struct ChordConfig {
    /// How long the modifier must be held before the buffer commits
    pub commit_delay_ms: u64,
    /// How many trailing digits the buffer keeps
    pub buffer_len: usize,
}

impl Default for ChordConfig {
    fn default() -> Self {
        // Reference gesture: two digits, one-second modifier hold
        ChordConfig {
            commit_delay_ms: 1000,
            buffer_len: 2,
        }
    }
}

/// Digit-chord recognizer
///
/// Digits accumulate in a short buffer (most recent `buffer_len` kept).
/// Pressing the modifier arms a timer; once the commit delay has elapsed,
/// `poll` commits the buffered number B > 0 as the zero-based landing index
/// B - 1 and clears the buffer. A buffer that is empty or reads zero commits
/// nothing. The committed index is not range-reduced here; the engine
/// normalizes it against the segment count at stop time.
#[derive(Debug, Default)]
pub struct ChordRecognizer {
    config: ChordConfig,
    digits: String,
    armed_at: Option<u64>,
}

impl ChordRecognizer {
    pub fn new(config: ChordConfig) -> Self {
        ChordRecognizer {
            config,
            digits: String::new(),
            armed_at: None,
        }
    }

    /// Feed a typed character; non-digits are ignored
    pub fn press_digit(&mut self, ch: char) {
        if !ch.is_ascii_digit() {
            return;
        }
        self.digits.push(ch);
        while self.digits.len() > self.config.buffer_len {
            self.digits.remove(0);
        }
    }

    /// Modifier pressed: arm the commit timer. Key auto-repeat is harmless,
    /// only the first press arms.
    pub fn modifier_down(&mut self, now_ms: u64) {
        if self.armed_at.is_none() {
            self.armed_at = Some(now_ms);
        }
    }

    /// Check whether the chord has committed
    ///
    /// Returns the zero-based landing index once, when the modifier has
    /// been armed for at least the commit delay; the buffer and timer reset
    /// either way once the delay elapses.
    pub fn poll(&mut self, now_ms: u64) -> Option<usize> {
        let armed_at = self.armed_at?;
        if now_ms.saturating_sub(armed_at) < self.config.commit_delay_ms {
            return None;
        }

        self.armed_at = None;
        let number = self.digits.parse::<usize>().ok();
        self.digits.clear();

        match number {
            Some(number) if number > 0 => {
                tracing::debug!(number, "chord committed");
                Some(number - 1)
            }
            _ => None,
        }
    }

    /// Buffered digits awaiting commit (diagnostics)
    pub fn buffered(&self) -> &str {
        &self.digits
    }
}

/// Touch rig - fixed-index nomination for touch hosts
///
/// A touch anywhere while the wheel is idle nominates a fixed segment.
/// The host supplies its own "is a touch device" predicate result.
#[derive(Clone, Copy, Debug)]
pub struct TouchRig {
    index: usize,
}

impl Default for TouchRig {
    fn default() -> Self {
        // Reference gesture: first segment
        TouchRig { index: 0 }
    }
}

impl TouchRig {
    pub fn new(index: usize) -> Self {
        TouchRig { index }
    }

    /// Map a touch to a landing target: only on touch hosts, only while the
    /// wheel is not spinning
    pub fn on_touch(&self, touch_host: bool, spinning: bool) -> Option<usize> {
        if touch_host && !spinning {
            Some(self.index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chord_commits_after_delay() {
        let mut chord = ChordRecognizer::default();
        chord.press_digit('3');
        chord.modifier_down(0);

        assert_eq!(chord.poll(999), None);
        assert_eq!(chord.poll(1000), Some(2));
    }

    #[test]
    fn test_chord_commits_once() {
        let mut chord = ChordRecognizer::default();
        chord.press_digit('5');
        chord.modifier_down(100);

        assert_eq!(chord.poll(1200), Some(4));
        assert_eq!(chord.poll(2400), None);
    }

    #[test]
    fn test_buffer_keeps_last_two_digits() {
        let mut chord = ChordRecognizer::default();
        for ch in "123".chars() {
            chord.press_digit(ch);
        }
        assert_eq!(chord.buffered(), "23");

        chord.modifier_down(0);
        assert_eq!(chord.poll(1000), Some(22));
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut chord = ChordRecognizer::default();
        chord.press_digit('x');
        chord.press_digit('7');
        chord.press_digit(' ');
        assert_eq!(chord.buffered(), "7");
    }

    #[test]
    fn test_zero_and_empty_do_not_commit() {
        let mut chord = ChordRecognizer::default();
        chord.modifier_down(0);
        assert_eq!(chord.poll(1000), None);

        chord.press_digit('0');
        chord.modifier_down(2000);
        assert_eq!(chord.poll(3000), None);
    }

    #[test]
    fn test_buffer_clears_after_commit_window() {
        // A zero commit still clears the stale buffer
        let mut chord = ChordRecognizer::default();
        chord.press_digit('0');
        chord.modifier_down(0);
        assert_eq!(chord.poll(1000), None);
        assert_eq!(chord.buffered(), "");
    }

    #[test]
    fn test_modifier_auto_repeat_does_not_rearm() {
        let mut chord = ChordRecognizer::default();
        chord.press_digit('2');
        chord.modifier_down(0);
        chord.modifier_down(500);
        chord.modifier_down(900);
        // Armed at 0, not re-armed by repeats
        assert_eq!(chord.poll(1000), Some(1));
    }

    #[test]
    fn test_touch_rig_gating() {
        let rig = TouchRig::default();
        assert_eq!(rig.on_touch(true, false), Some(0));
        assert_eq!(rig.on_touch(true, true), None);
        assert_eq!(rig.on_touch(false, false), None);

        let rig = TouchRig::new(3);
        assert_eq!(rig.on_touch(true, false), Some(3));
    }
}
