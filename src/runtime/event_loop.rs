use std::sync::mpsc::Receiver;

use crate::backend::MetadataSource;
use crate::config;
use crate::player::{Player, PlayerCmd};
use crate::shell::WindowShell;
use crate::transport::status_line;

/// Commands fed into the runtime loop by whatever front-end is attached.
///
/// The bundled driver parses them from stdin lines; a real widget would
/// produce them from its buttons and sliders.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlCmd {
    TogglePlay,
    /// Progress-bar click: jump to a percentage.
    Seek(f64),
    /// Volume slider: set a percentage.
    Volume(i32),
    ToggleMute,
    ToggleLike,
    ToggleRepeat,
    ToggleShuffle,
    /// Link the metadata source and swap in its track.
    Connect,
    /// Print a status line of the current transport snapshot.
    Status,
    /// Ask the host shell to (un)pin the window on top.
    Pin(bool),
    Minimize,
    Close,
    Quit,
}

/// Parse one driver line into a `ControlCmd`.
pub fn parse_command(line: &str) -> Option<ControlCmd> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();

    let cmd = match head {
        "play" | "pause" | "p" => ControlCmd::TogglePlay,
        "seek" => ControlCmd::Seek(arg?.parse().ok()?),
        "volume" | "vol" => ControlCmd::Volume(arg?.parse().ok()?),
        "mute" | "m" => ControlCmd::ToggleMute,
        "like" => ControlCmd::ToggleLike,
        "repeat" => ControlCmd::ToggleRepeat,
        "shuffle" => ControlCmd::ToggleShuffle,
        "connect" => ControlCmd::Connect,
        "status" | "s" => ControlCmd::Status,
        "pin" => ControlCmd::Pin(true),
        "unpin" => ControlCmd::Pin(false),
        "minimize" | "min" => ControlCmd::Minimize,
        "close" => ControlCmd::Close,
        "quit" | "q" => ControlCmd::Quit,
        _ => return None,
    };
    Some(cmd)
}

/// Control loop: forwards transport commands to the player, window commands
/// to the host shell, and connects through the metadata source. Returns
/// when the channel closes or a `Close`/`Quit` arrives.
pub fn run(
    settings: &config::Settings,
    player: &Player,
    backend: &dyn MetadataSource,
    shell: &dyn WindowShell,
    control_rx: &Receiver<ControlCmd>,
) -> anyhow::Result<()> {
    for cmd in control_rx.iter() {
        match cmd {
            ControlCmd::TogglePlay => {
                let _ = player.send(PlayerCmd::TogglePlay);
            }
            ControlCmd::Seek(p) => {
                let _ = player.send(PlayerCmd::SetProgress(p));
            }
            ControlCmd::Volume(v) => {
                let _ = player.send(PlayerCmd::SetVolume(v));
            }
            ControlCmd::ToggleMute => {
                let _ = player.send(PlayerCmd::ToggleMute);
            }
            ControlCmd::ToggleLike => {
                let _ = player.send(PlayerCmd::ToggleLike);
            }
            ControlCmd::ToggleRepeat => {
                let _ = player.send(PlayerCmd::ToggleRepeat);
            }
            ControlCmd::ToggleShuffle => {
                let _ = player.send(PlayerCmd::ToggleShuffle);
            }
            ControlCmd::Connect => match backend.connect() {
                Ok(track) => {
                    log::info!("connected: {} - {}", track.artist, track.title);
                    let _ = player.send(PlayerCmd::Connect(track));
                }
                Err(e) => {
                    log::warn!("connect failed: {e}");
                }
            },
            ControlCmd::Status => {
                println!(
                    "{}",
                    status_line(&player.snapshot(), settings.ui.show_remaining)
                );
            }
            ControlCmd::Pin(flag) => shell.set_always_on_top(flag),
            ControlCmd::Minimize => shell.minimize(),
            ControlCmd::Close => {
                shell.close();
                break;
            }
            ControlCmd::Quit => break,
        }
    }

    Ok(())
}
