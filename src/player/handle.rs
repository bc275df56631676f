use std::sync::mpsc::{self, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::transport::TransportState;

use super::thread::spawn_player_thread;
use super::types::{PlayerCmd, StateHandle};

/// Handle to the player thread that owns the transport state.
pub struct Player {
    tx: Sender<PlayerCmd>,
    state: StateHandle,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Player {
    /// Spawn the player thread with `initial` transport state and the
    /// given simulated-playback tick cadence.
    pub fn new(initial: TransportState, tick_interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel::<PlayerCmd>();
        let state: StateHandle = Arc::new(Mutex::new(initial.clone()));

        let join = spawn_player_thread(initial, rx, state.clone(), tick_interval);

        Self {
            tx,
            state,
            join: Mutex::new(Some(join)),
        }
    }

    /// Clone the latest published transport snapshot.
    pub fn snapshot(&self) -> TransportState {
        self.state.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn send(&self, cmd: PlayerCmd) -> Result<(), mpsc::SendError<PlayerCmd>> {
        self.tx.send(cmd)
    }

    /// Ask the player thread to shut down and wait for it to finish.
    pub fn quit(&self) {
        let _ = self.send(PlayerCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
