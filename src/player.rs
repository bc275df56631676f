//! Player actor: serializes transport commands and drives the tick timer.
//!
//! One worker thread owns the `TransportState`; everything else talks to it
//! through the `Player` handle and reads published snapshots.

mod handle;
mod thread;
mod types;

pub use handle::*;
pub use types::*;
