//! Spindle Engine - spin simulation and landing resolution
//!
//! Two components evaluated every animation tick, plus the channel that
//! couples them:
//! - Rotation Simulator ([`RotationSim`]): owns rotation and angular speed,
//!   advancing under constant cruise speed or exponential frictional decay
//! - Landing Resolver ([`landing`]): computes the decay-phase speed that
//!   lands the wheel on a chosen segment, and reads the final segment index
//!   from terminal rotation
//! - Target Channel ([`TargetSlot`]): write-only slot a collaborator may set
//!   so a stop cycle silently terminates on a chosen segment
//!
//! [`WheelEngine`] ties the three together behind the host-facing surface:
//! `spin_start`, `spin_stop`, `set_target`, and a per-frame `advance`.

pub mod landing;
pub mod rotation;
pub mod target;
pub mod wheel;

pub use rotation::*;
pub use target::*;
pub use wheel::*;
