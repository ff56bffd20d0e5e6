//! Platform abstraction layer
//!
//! Host-side glue that sits in front of the simulation:
//! - Input events (key press/release to logical actions)
//! - Tick scheduling (elapsed wall time to a number of steps)

pub mod input;
pub mod ticker;

pub use input::{Action, InputState, Key, KeyBindings};
pub use ticker::FixedTicker;
