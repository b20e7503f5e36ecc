//! Atrium demo entry point.
//!
//! Builds the demo desktop, replays a scripted input session through the
//! controller, and renders the final frame as text. Pass a TOML config
//! path as the first argument (or via `ATRIUM_CONFIG`) to override the
//! desktop dimensions, icons and startup popups.

mod demo;
mod text_backend;

use anyhow::Result;

use atrium_scene::SceneRegistry;
use atrium_shell::services::{DesktopLinkService, SystemTimeService};
use atrium_shell::{DesktopController, EventOutcome, ShellConfig};
use text_backend::TextBackend;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("ATRIUM_CONFIG").ok());
    let config = match config_path {
        Some(ref path) => {
            log::info!("Loading config from {path}");
            let mut config = ShellConfig::load(std::path::Path::new(path))?;
            if config.popup_windows.is_empty() {
                config.popup_windows = demo::demo_config().popup_windows;
            }
            config
        },
        None => demo::demo_config(),
    };
    log::info!(
        "Starting Atrium ({}x{})",
        config.desktop_width,
        config.desktop_height,
    );

    let mut scene = SceneRegistry::new();
    demo::populate_demo_scene(&mut scene, &config);

    let mut controller = DesktopController::new(
        &mut scene,
        &config,
        Box::new(DesktopLinkService::new()),
        Box::new(SystemTimeService::new()),
    );
    log::info!("Desktop ready: {} windows managed", controller.wm.window_ids().len());

    let script = demo::demo_script(&scene, &config);
    let mut last_ms = 0;
    for (at_ms, event) in script {
        controller.tick(&mut scene, at_ms);
        last_ms = at_ms;
        if controller.handle_event(&mut scene, &event) == EventOutcome::Quit {
            log::info!("Session script requested quit at {at_ms}ms");
            break;
        }
    }
    controller.tick(&mut scene, last_ms);

    let mut backend = TextBackend::new(config.desktop_width, config.desktop_height);
    scene.draw(&mut backend)?;
    print!("{}", backend.frame());

    log::info!("Atrium shut down cleanly");
    Ok(())
}
