use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ComponentId;

use crate::backend_bridge::commands::BackendCommand;
use crate::component::{
    state::ComponentState,
    view::{StaticAssets, ViewNode},
    InfoComponent,
};
use crate::controller::{
    events::{FetchFailure, UiEvent},
    reducer::{self, Transition},
};
use crate::ui::{logo::LogoTexture, paint::paint_node};

const AWAITING_POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub base_url: String,
    pub window_title: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000/".to_string(),
            window_title: "Chops Example Web App".to_string(),
        }
    }
}

pub struct WebApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    base_url: String,
    next_component_id: u64,
    component: InfoComponent,
    // Set once the worker reports it is gone; every later instance starts failed.
    backend_failure: Option<FetchFailure>,

    assets: StaticAssets,
    logo: LogoTexture,
}

impl WebApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: &StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            base_url: startup.base_url.clone(),
            next_component_id: 2,
            component: InfoComponent::new(ComponentId(1), startup.base_url.clone()),
            backend_failure: None,
            assets: StaticAssets::default(),
            logo: LogoTexture::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn component(&self) -> &InfoComponent {
        &self.component
    }

    /// Tears the component down and puts a fresh instance in its place, as a page reload would.
    pub(crate) fn reload(&mut self) {
        let id = ComponentId(self.next_component_id);
        self.next_component_id += 1;
        tracing::info!(
            previous_component_id = %self.component.id(),
            component_id = %id,
            "reloading page"
        );
        self.component = InfoComponent::new(id, self.base_url.clone());
        if let Some(failure) = &self.backend_failure {
            self.component.settle(ComponentState::failed(failure.clone()));
        }
    }

    fn process_ui_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(event) = self.ui_rx.try_recv() {
            if let UiEvent::BackendUnavailable(reason) = &event {
                self.backend_failure = Some(FetchFailure::transport(reason.clone()));
            }
            if reducer::apply(&mut self.component, event) == Transition::Settled {
                changed = true;
            }
        }
        changed
    }

    /// One frame minus painting: drain events, mount once, render.
    pub(crate) fn frame(&mut self) -> (ViewNode, bool) {
        let changed = self.process_ui_events();
        self.component.mount(&self.cmd_tx);
        (self.component.render(&self.assets), changed)
    }
}

impl eframe::App for WebApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|input| input.key_pressed(egui::Key::F5)) {
            self.reload();
        }

        let (tree, changed) = self.frame();
        let logo = self.logo.get(ctx);
        egui::CentralPanel::default().show(ctx, |ui| paint_node(ui, &tree, logo));

        if changed {
            ctx.request_repaint();
        } else if self.component.state().phase().is_awaiting() {
            ctx.request_repaint_after(AWAITING_POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
#[path = "../tests/app_tests.rs"]
mod tests;
