//! Spindle Host - presentation-side adapters
//!
//! Everything the engine deliberately does not know about lives here:
//! - [`FrameDriver`]: wires `advance()` to redraw and outcome callbacks
//! - [`ChordRecognizer`] / [`TouchRig`]: covert gestures that nominate a
//!   landing target without touching the engine's physics
//! - [`SegmentList`]: owned labels and their display formatting
//! - [`SharedWheel`]: a clonable handle for hosts whose input and frame
//!   callbacks arrive through different closures
//!
//! Keeping gesture recognition out of the engine preserves testability and
//! avoids coupling physics to input devices: adapters end in a plain
//! `set_target` call, and the engine never learns how a target was chosen.

pub mod driver;
pub mod gesture;
pub mod labels;
pub mod shared;

pub use driver::*;
pub use gesture::*;
pub use labels::*;
pub use shared::*;
