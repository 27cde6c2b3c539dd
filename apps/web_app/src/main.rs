use std::sync::Arc;

mod backend_bridge;
mod component;
mod controller;
mod ui;

use anyhow::anyhow;
use backend_bridge::{commands::BackendCommand, runtime::RepaintSignal};
use clap::Parser;
use controller::events::UiEvent;
use crossbeam_channel::bounded;
use eframe::egui;
use info_client::HttpInfoSource;
use tracing_subscriber::EnvFilter;
use ui::{StartupConfig, WebApp};

#[derive(Parser, Debug)]
#[command(about = "Chops example web application")]
struct Args {
    /// Page URL the relative info endpoint is resolved against.
    #[arg(long, env = "WEB_APP_BASE_URL", default_value = "http://127.0.0.1:5000/")]
    base_url: String,
    #[arg(long, default_value = "Chops Example Web App")]
    window_title: String,
}

impl From<Args> for StartupConfig {
    fn from(args: Args) -> Self {
        Self {
            base_url: args.base_url,
            window_title: args.window_title,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let startup = StartupConfig::from(Args::parse());
    tracing::info!(base_url = %startup.base_url, "starting web app");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(startup.window_title.clone())
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };
    let app_name = startup.window_title.clone();
    eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| {
            let repaint_ctx = cc.egui_ctx.clone();
            let repaint: RepaintSignal = Arc::new(move || repaint_ctx.request_repaint());
            backend_bridge::runtime::launch(
                cmd_rx,
                ui_tx,
                Arc::new(HttpInfoSource::new()),
                repaint,
            );
            Ok(Box::new(WebApp::new(cmd_tx, ui_rx, &startup)))
        }),
    )
    .map_err(|err| anyhow!("native window failed: {err}"))
}
