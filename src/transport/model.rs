//! Transport model types: `Track` and `TransportState`.
//!
//! The `TransportState` struct is the single mutable aggregate of the
//! widget: playback status, simulated progress, volume/mute and the
//! like/repeat/shuffle flags. All mutating operations clamp or normalize
//! their input instead of failing.

/// Descriptor of a playable media item.
///
/// Immutable once set; `TransportState::connect` replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    /// URI of the artwork image, if the source provides one.
    pub artwork: Option<String>,
    pub duration_secs: u32,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        artwork: Option<String>,
        duration_secs: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            artwork,
            // A zero duration would stall the tick math; normalize up.
            duration_secs: duration_secs.max(1),
        }
    }

    /// The placeholder descriptor shown before any source is linked.
    pub fn placeholder() -> Self {
        Self::new("Connect to SoundCloud", "No track playing", None, 180)
    }
}

/// The transport aggregate controlled by the player commands.
#[derive(Clone, Debug, PartialEq)]
pub struct TransportState {
    /// Whether the progress timer is active.
    pub playing: bool,
    /// Playback position as a percentage of the track duration, in [0, 100].
    pub progress: f64,
    /// Stored volume percentage, in [0, 100]. Muting does not alter it.
    pub volume: u8,
    pub muted: bool,
    pub liked: bool,
    pub repeat: bool,
    pub shuffle: bool,
    /// Whether a metadata source has been linked.
    pub connected: bool,
    pub track: Track,
}

impl Default for TransportState {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportState {
    /// Stopped on the placeholder track, progress zero.
    pub fn new() -> Self {
        Self {
            playing: false,
            progress: 0.0,
            volume: 70,
            muted: false,
            liked: false,
            repeat: false,
            shuffle: false,
            connected: false,
            track: Track::placeholder(),
        }
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Set the playback position (seeking on the progress bar), clamped
    /// into [0, 100].
    pub fn set_progress(&mut self, p: f64) {
        self.progress = p.clamp(0.0, 100.0);
    }

    /// Advance one tick worth of simulated playback.
    ///
    /// No-op while stopped. Reaching 100% auto-stops and rewinds to zero
    /// instead of overflowing (end-of-track).
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        let step = 100.0 / f64::from(self.track.duration_secs);
        let next = self.progress + step;
        if next >= 100.0 {
            self.playing = false;
            self.progress = 0.0;
        } else {
            self.progress = next;
        }
    }

    /// Set the volume, clamped into [0, 100]. Adjusting the volume while
    /// muted un-mutes.
    pub fn set_volume(&mut self, v: i32) {
        self.volume = v.clamp(0, 100) as u8;
        self.muted = false;
    }

    /// Flip mute. The stored volume is untouched so un-muting restores it.
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Swap in a new track from a source, rewind, and mark the source
    /// linked. Repeated connects are allowed; the last track wins.
    pub fn connect(&mut self, track: Track) {
        self.track = track;
        self.progress = 0.0;
        self.connected = true;
    }

    /// Elapsed playback time implied by the current progress.
    pub fn current_time_secs(&self) -> f64 {
        self.progress / 100.0 * f64::from(self.track.duration_secs)
    }

    /// Time left until end-of-track.
    pub fn remaining_time_secs(&self) -> f64 {
        f64::from(self.track.duration_secs) - self.current_time_secs()
    }

    /// The volume actually in effect: zero while muted.
    pub fn effective_volume(&self) -> u8 {
        if self.muted { 0 } else { self.volume }
    }
}
