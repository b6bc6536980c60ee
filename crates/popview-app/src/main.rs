mod cli;
mod launcher;
mod notify;
mod shell;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn main() {
    let args = cli::parse();

    // The config contributes the log directive, so it loads before
    // the subscriber exists; its load failure is reported just after.
    let config_result = match args.config.as_deref() {
        Some(path) => popview_config::load_from_path(Path::new(path)),
        None => popview_config::load_config(),
    };

    let config_directive = config_result
        .as_ref()
        .map(|c| c.logging.level.as_str())
        .unwrap_or(popview_config::DEFAULT_LOG_DIRECTIVE);
    let log_directive = args.log_level.as_deref().unwrap_or(config_directive);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "popview=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("Popview v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config_result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        popview_config::PopviewConfig::default()
    });
    if let Ok(dump) = serde_json::to_string(&config) {
        tracing::debug!("effective config: {dump}");
    }

    let home_url = args
        .url
        .unwrap_or_else(|| config.startup.home_url.clone());
    let devtools = args.devtools || config.window.devtools;
    tracing::info!("Home URL: {home_url}");

    let event_loop = match EventLoop::new() {
        Ok(el) => el,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = shell::HostShell::new(config, home_url, devtools);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
