//! Streaming-source metadata boundary.
//!
//! The transport stays agnostic to where a `Track` came from. Today the
//! only implementation is the hardcoded SoundCloud stub; a real streaming
//! client would slot in behind the same trait.

use anyhow::Result;

use crate::transport::Track;

/// A source of track metadata the widget can "connect" to.
pub trait MetadataSource {
    /// Link the source and fetch the track to show.
    ///
    /// A real client does network work here and can fail; the stub cannot.
    fn connect(&self) -> Result<Track>;
}

/// Stub SoundCloud client returning fixed metadata.
pub struct MockSoundCloud;

impl MetadataSource for MockSoundCloud {
    fn connect(&self) -> Result<Track> {
        Ok(Track::new(
            "Summer Vibes Mix",
            "DJ Example",
            Some("https://via.placeholder.com/80/ff5500/ffffff?text=SC".to_string()),
            240,
        ))
    }
}
