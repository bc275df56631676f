//! Player command enum and shared handle types.

use std::sync::{Arc, Mutex};

use crate::transport::{Track, TransportState};

#[derive(Debug)]
pub enum PlayerCmd {
    /// Flip between playing and stopped.
    TogglePlay,
    /// Seek: set progress to a percentage (clamped into [0, 100]).
    SetProgress(f64),
    /// Set the volume percentage (clamped into [0, 100]; un-mutes).
    SetVolume(i32),
    /// Flip mute without touching the stored volume.
    ToggleMute,
    /// Flip the like flag.
    ToggleLike,
    /// Flip the repeat flag.
    ToggleRepeat,
    /// Flip the shuffle flag.
    ToggleShuffle,
    /// Swap in a new track from a metadata source and rewind.
    Connect(Track),
    /// Shut the player thread down.
    Quit,
}

/// Snapshot of the transport state shared with whatever front-end is
/// attached. Updated by the player thread after every mutation.
pub type StateHandle = Arc<Mutex<TransportState>>;
