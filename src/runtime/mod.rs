use std::io::BufRead;
use std::sync::mpsc;
use std::time::Duration;

use crate::backend::MockSoundCloud;
use crate::player::Player;
use crate::shell::LogShell;
use crate::transport::TransportState;

mod event_loop;
mod settings;
mod startup;

pub use event_loop::ControlCmd;


pub fn run() -> anyhow::Result<()> {
    let settings = settings::load_settings();

    let player = Player::new(
        TransportState::new(),
        Duration::from_millis(settings.playback.tick_interval_ms),
    );
    let shell = LogShell;
    let backend = MockSoundCloud;

    startup::apply_startup_defaults(&player, &shell, &settings);

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    spawn_stdin_reader(control_tx);

    let result = event_loop::run(&settings, &player, &backend, &shell, &control_rx);

    player.quit();
    result
}

/// Feed stdin lines into the control channel.
///
/// Stands in for the widget front-end, which would produce the same
/// commands from button presses.
fn spawn_stdin_reader(tx: mpsc::Sender<ControlCmd>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match event_loop::parse_command(&line) {
                Some(cmd) => {
                    let last = matches!(cmd, ControlCmd::Quit | ControlCmd::Close);
                    if tx.send(cmd).is_err() || last {
                        break;
                    }
                }
                None => {
                    if !line.trim().is_empty() {
                        log::warn!("unknown command: {line}");
                    }
                }
            }
        }
    });
}
