mod app;
mod config;
mod effects;
mod input;
mod logging;
mod render;

use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::CONFIG_FILENAME));
    let config = config::load(&config_path);
    logging::initialize(config.log_destination.into());
    app::run_app(config)
}
