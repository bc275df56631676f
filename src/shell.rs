//! Host windowing shell boundary.
//!
//! The host window owns minimize/close/pin-on-top; the widget only forwards
//! requests. The transport core never calls these, only the runtime driver
//! does, on behalf of the (out-of-process) presentation layer.

/// Fire-and-forget window commands exposed by the host shell.
pub trait WindowShell {
    fn minimize(&self);
    fn close(&self);
    fn set_always_on_top(&self, flag: bool);
}

/// Shell stand-in that logs each forwarded command.
pub struct LogShell;

impl WindowShell for LogShell {
    fn minimize(&self) {
        log::info!("shell: minimize window");
    }

    fn close(&self) {
        log::info!("shell: close window");
    }

    fn set_always_on_top(&self, flag: bool) {
        log::info!("shell: set always-on-top = {flag}");
    }
}
