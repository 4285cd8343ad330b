//! Bubble seek bar demo
//! Opens a window with a single seek bar built from the user's config

mod app;

use std::path::PathBuf;

use anyhow::Context;
use bubble_seekbar::SeekBarConfig;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            tracing::info!("Loading seek bar config from {:?}", path);
            SeekBarConfig::load_from_file(&path)
                .with_context(|| format!("failed to load config {:?}", path))?
        }
        None => SeekBarConfig::load(),
    };

    iced::application(move || app::App::new(&config), app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .antialiasing(true)
        .run()
        .map_err(|e| anyhow::anyhow!("seek bar window failed: {}", e))
}
