//! Segment labels and display formatting

use spindle_core::{WheelError, WheelResult};

/// Ordered segment labels, owned by the presentation layer
///
/// Only the count reaches the engine; labels are free-form and may be blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentList {
    labels: Vec<String>,
}

impl Default for SegmentList {
    fn default() -> Self {
        // Reference wheel: five blank segments
        SegmentList {
            labels: vec![String::new(); 5],
        }
    }
}

impl SegmentList {
    /// Build a list from labels; a wheel needs at least one segment
    pub fn new(labels: Vec<String>) -> WheelResult<Self> {
        if labels.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        Ok(SegmentList { labels })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Replace the whole label set
    pub fn set_labels(&mut self, labels: Vec<String>) -> WheelResult<()> {
        if labels.is_empty() {
            return Err(WheelError::EmptyWheel);
        }
        self.labels = labels;
        Ok(())
    }

    /// Display form of a segment: "{position}.{label}", or just the
    /// one-based position when the label is blank
    pub fn display(&self, index: usize) -> String {
        let position = index + 1;
        match self.get(index).map(str::trim) {
            Some(label) if !label.is_empty() => format!("{position}.{label}"),
            _ => position.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_five_blank_segments() {
        let list = SegmentList::default();
        assert_eq!(list.len(), 5);
        assert!(list.labels().iter().all(String::is_empty));
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(SegmentList::new(vec![]), Err(WheelError::EmptyWheel));

        let mut list = SegmentList::default();
        assert_eq!(list.set_labels(vec![]), Err(WheelError::EmptyWheel));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_display_formatting() {
        let list = SegmentList::new(vec![
            "Pizza".to_string(),
            String::new(),
            "  ".to_string(),
        ])
        .unwrap();

        assert_eq!(list.display(0), "1.Pizza");
        assert_eq!(list.display(1), "2");
        // Whitespace-only labels count as blank
        assert_eq!(list.display(2), "3");
        // Out of range falls back to the bare position
        assert_eq!(list.display(7), "8");
    }
}
