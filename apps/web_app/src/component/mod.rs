//! The info component: one fetch on mount, a pure render of whatever state it holds.

pub mod state;
pub mod view;

use crossbeam_channel::Sender;
use info_client::resolve_info_endpoint;
use shared::domain::ComponentId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{events::FetchFailure, orchestration::dispatch_backend_command};
use state::ComponentState;
use view::{StaticAssets, ViewNode};

pub struct InfoComponent {
    id: ComponentId,
    base_url: String,
    state: ComponentState,
    mounted: bool,
}

impl InfoComponent {
    pub fn new(id: ComponentId, base_url: impl Into<String>) -> Self {
        Self {
            id,
            base_url: base_url.into(),
            state: ComponentState::default(),
            mounted: false,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn state(&self) -> &ComponentState {
        &self.state
    }

    /// Issues the info request the first time it is called; later calls are no-ops.
    /// Returns whether a request was queued by this call.
    pub fn mount(&mut self, cmd_tx: &Sender<BackendCommand>) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        if !self.state.phase().is_awaiting() {
            tracing::debug!(component_id = %self.id, "component already settled; skipping request");
            return false;
        }

        let endpoint = match resolve_info_endpoint(&self.base_url) {
            Ok(endpoint) => endpoint,
            Err(err) => {
                tracing::error!(component_id = %self.id, base_url = %self.base_url, "{err}");
                self.settle(ComponentState::failed(FetchFailure::from(&err)));
                return false;
            }
        };

        tracing::info!(
            component_id = %self.id,
            %endpoint,
            "component mounted; requesting app info"
        );
        match dispatch_backend_command(
            cmd_tx,
            BackendCommand::FetchInfo {
                component_id: self.id,
                endpoint,
            },
        ) {
            Ok(()) => true,
            Err(failure) => {
                self.settle(ComponentState::failed(failure));
                false
            }
        }
    }

    pub fn render(&self, assets: &StaticAssets) -> ViewNode {
        view::render(&self.state, assets)
    }

    /// Replaces the placeholder state. Only the first call per instance takes effect.
    pub(crate) fn settle(&mut self, next: ComponentState) -> bool {
        if !self.state.phase().is_awaiting() {
            tracing::warn!(
                component_id = %self.id,
                "ignoring second state update for settled component"
            );
            return false;
        }
        tracing::info!(
            component_id = %self.id,
            app_name = %next.app_name(),
            "component state updated"
        );
        self.state = next;
        true
    }
}

#[cfg(test)]
#[path = "../tests/component_tests.rs"]
mod tests;
