//! Transport state machine: the simulated-playback core of the widget.
//!
//! `TransportState` lives in `transport::model` and owns playback status,
//! progress, volume/mute and the toggle flags. Display-string helpers live
//! in `transport::display`.

mod display;
mod model;

pub use display::*;
pub use model::*;
