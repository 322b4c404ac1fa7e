/// WireCube Terminal - Rotate a wireframe cube from the keyboard
///
/// Controls:
///   - Q: rotate about X, then Y, then Z
///   - A: rotate about -X
///   - W/S: rotate about +Y/-Y
///   - E/D: rotate about +Z/-Z
///   - Esc / Ctrl-C: Quit

use log::LevelFilter;
use simplelog::{Config, WriteLogger};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use wirecube_core::RotatorConfig;
use wirecube_terminal::{restore_terminal, TerminalApp};

const LOG_FILE: &str = "wirecube.log";

fn init_logging() -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)?;

    WriteLogger::init(LevelFilter::Info, Config::default(), log_file)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

fn main() -> io::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {}", e);
    }

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore_terminal() {
            eprintln!("Failed to restore terminal: {}", e);
        }
        log::error!("panic: {}", panic_info);
        original_hook(panic_info);
    }));

    log::info!("starting wirecube terminal");
    let mut app = TerminalApp::new(RotatorConfig::default())?;
    app.run()?;
    log::info!("exiting");

    Ok(())
}
