mod backend;
mod config;
mod player;
mod runtime;
mod shell;
mod transport;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    runtime::run()
}
