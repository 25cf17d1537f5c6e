//! nixfolio entry point.
//!
//! Boots the desktop, opens the terminal, and drives it line by line from
//! stdin. Output goes to stdout as a terminal stream; logs go to stderr.
//! The session ends when the shell runs `exit` or stdin closes.

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::Result;

use nixfolio_app::{Desktop, console};
use nixfolio_types::AppId;
use nixfolio_types::config::DesktopConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg or NIXFOLIO_CONFIG env var.
    let config = match std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NIXFOLIO_CONFIG").ok())
    {
        Some(path) => DesktopConfig::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("Falling back to default config: {e}");
            DesktopConfig::default()
        }),
        None => DesktopConfig::default(),
    };
    log::info!(
        "Starting nixfolio as {}@{} ({}x{})",
        config.user,
        config.hostname,
        config.viewport_width,
        config.viewport_height,
    );

    let mut desktop = Desktop::from_config(config)?;
    desktop.subscribe(|event, state| {
        log::debug!("{event:?} -> focus {:?}, z {}", state.active_window, state.max_z_index);
    });
    desktop.finish_boot();
    desktop.launch(AppId::Terminal);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    console::render(&desktop.drain_terminal(), &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in console::line_to_keys(&line) {
            desktop.handle_key(key);
        }
        console::render(&desktop.drain_terminal(), &mut out)?;
        if !desktop.terminal_running() {
            break;
        }
    }

    log::info!("Shutting down");
    Ok(())
}
