use crate::config::Settings;
use crate::player::{Player, PlayerCmd};
use crate::shell::WindowShell;

/// Apply configured defaults before the control loop starts.
pub fn apply_startup_defaults(player: &Player, shell: &dyn WindowShell, settings: &Settings) {
    // Out-of-range volume falls under the clamping policy, not validation.
    let _ = player.send(PlayerCmd::SetVolume(settings.playback.volume));

    shell.set_always_on_top(settings.window.pinned);
}
