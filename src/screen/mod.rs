//! Speed control screen
//!
//! - `slider`: the bounded, stepped input control
//! - `controller`: the observable speed state and its subscribers

pub mod controller;
pub mod slider;

pub use controller::{ScreenController, SpeedControlView};
