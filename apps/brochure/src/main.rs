mod backend_bridge;
mod config;
mod controller;
mod ui;

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{load_settings, Cli};
use crate::controller::events::UiEvent;
use crate::ui::{BrochureApp, PageOptions};

const APP_NAME: &str = "PixelPerfect";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli).context("failed to load settings")?;

    let filter = EnvFilter::try_new(&settings.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    tracing::info!(
        contact_endpoint = settings.contact_endpoint.as_deref().unwrap_or("<simulated>"),
        reveal_animations = settings.reveal_animations,
        "starting brochure"
    );

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    let page = PageOptions {
        carousel_interval: settings.carousel_interval(),
        reveal_animations: settings.reveal_animations,
    };
    backend_bridge::runtime::launch(cmd_rx, ui_tx, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("PixelPerfect | Digital Agency")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(BrochureApp::new(cc, cmd_tx, ui_rx, page)?))),
    )
    .map_err(|err| anyhow::anyhow!("brochure window failed: {err}"))
}
