use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use crate::transport::TransportState;

use super::types::{PlayerCmd, StateHandle};

/// Receive timeout while no tick is scheduled (stopped).
const IDLE_POLL: Duration = Duration::from_millis(200);

pub(super) fn spawn_player_thread(
    initial: TransportState,
    rx: Receiver<PlayerCmd>,
    state: StateHandle,
    tick_interval: Duration,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut transport = initial;

        // Deadline of the next scheduled tick; `None` while stopped.
        // This thread is the only mutator, so at most one timer exists per
        // transport and clearing the deadline cancels it before any later
        // receive can observe a stale tick.
        let mut next_tick: Option<Instant> = if transport.playing {
            Some(Instant::now() + tick_interval)
        } else {
            None
        };

        publish(&state, &transport);

        loop {
            let timeout = match next_tick {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => IDLE_POLL,
            };

            match rx.recv_timeout(timeout) {
                Ok(PlayerCmd::Quit) => break,
                Ok(cmd) => {
                    let was_playing = transport.playing;
                    let is_connect = matches!(cmd, PlayerCmd::Connect(_));

                    apply(&mut transport, cmd);

                    if !transport.playing {
                        // Stopped by command or already stopped: cancel.
                        next_tick = None;
                    } else if !was_playing {
                        // Started: arm a fresh timer.
                        next_tick = Some(Instant::now() + tick_interval);
                    } else if is_connect {
                        // New track while playing: restart the cadence so the
                        // first tick of the new track is a full interval away.
                        next_tick = Some(Instant::now() + tick_interval);
                    }

                    publish(&state, &transport);
                }
                Err(RecvTimeoutError::Timeout) => {
                    if let Some(deadline) = next_tick {
                        if Instant::now() >= deadline {
                            transport.tick();
                            // Auto-stop at end-of-track cancels the timer.
                            next_tick = if transport.playing {
                                Some(deadline + tick_interval)
                            } else {
                                None
                            };
                            publish(&state, &transport);
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

fn apply(transport: &mut TransportState, cmd: PlayerCmd) {
    match cmd {
        PlayerCmd::TogglePlay => transport.toggle_play(),
        PlayerCmd::SetProgress(p) => transport.set_progress(p),
        PlayerCmd::SetVolume(v) => transport.set_volume(v),
        PlayerCmd::ToggleMute => transport.toggle_mute(),
        PlayerCmd::ToggleLike => transport.toggle_like(),
        PlayerCmd::ToggleRepeat => transport.toggle_repeat(),
        PlayerCmd::ToggleShuffle => transport.toggle_shuffle(),
        PlayerCmd::Connect(track) => transport.connect(track),
        // Handled by the caller before `apply`.
        PlayerCmd::Quit => {}
    }
}

fn publish(state: &StateHandle, transport: &TransportState) {
    if let Ok(mut s) = state.lock() {
        *s = transport.clone();
    }
}
