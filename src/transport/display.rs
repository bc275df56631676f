//! Display-string helpers for the transport state.
//!
//! Kept out of the model so the state machine stays presentation-free;
//! the runtime driver and any attached front-end build their readouts
//! from these.

use super::model::TransportState;

/// Format seconds as `m:ss`, flooring sub-second precision.
pub fn format_time(secs: f64) -> String {
    let total = secs.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// One-line summary of the transport for logs and the dev driver.
///
/// With `show_remaining` the time readout counts down (`0:47 / -3:13`),
/// otherwise it shows the total duration.
pub fn status_line(state: &TransportState, show_remaining: bool) -> String {
    let marker = if state.playing { "playing" } else { "stopped" };

    let time = if show_remaining {
        format!(
            "{} / -{}",
            format_time(state.current_time_secs()),
            format_time(state.remaining_time_secs())
        )
    } else {
        format!(
            "{} / {}",
            format_time(state.current_time_secs()),
            format_time(f64::from(state.track.duration_secs))
        )
    };

    let mut flags = String::new();
    if state.liked {
        flags.push_str(" liked");
    }
    if state.repeat {
        flags.push_str(" repeat");
    }
    if state.shuffle {
        flags.push_str(" shuffle");
    }
    if state.muted {
        flags.push_str(" muted");
    }

    format!(
        "[{marker}] {} - {} ({time}) vol {}{}",
        state.track.artist,
        state.track.title,
        state.effective_volume(),
        flags
    )
}
