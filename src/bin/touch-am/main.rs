//! touch-am - terminal touch-pad amplitude modulation synth
//!
//! Run with: cargo run --bin touch-am
//!
//! Click and drag on the pad (or latch a touch with Space and steer with the
//! arrow keys). Vertical position sets the carrier pitch, horizontal position
//! the modulator pitch. Logs go to `touch-am.log` in the temp directory.

mod app;
mod sensor;
mod ui;

use std::{fs::File, io};

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use touch_am::{control::PollerConfig, EngineConfig};

use app::TouchAm;
use ui::UiApp;

fn main() -> EyreResult<()> {
    color_eyre::install()?;
    init_logging()?;

    let (synth, scope_rx) = TouchAm::start(EngineConfig::default(), PollerConfig::default())?;

    let mut terminal = ratatui::init();
    let res = execute!(io::stdout(), EnableMouseCapture)
        .wrap_err("failed to enable mouse capture")
        .and_then(|()| UiApp::new(&synth, scope_rx).run(&mut terminal));

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    synth.stop();
    res
}

/// Route `log` output to a file so it cannot tear the TUI.
fn init_logging() -> EyreResult<()> {
    let path = std::env::temp_dir().join("touch-am.log");
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
