use shared::domain::AppInfo;

use crate::controller::events::FetchFailure;

pub const PLACEHOLDER_APP_NAME: &str = "Awaiting for response...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPhase {
    Awaiting,
    Loaded,
    Failed(FetchFailure),
}

impl FetchPhase {
    pub fn is_awaiting(&self) -> bool {
        matches!(self, Self::Awaiting)
    }
}

/// Everything the render function reads. Always holds displayable text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentState {
    app_name: String,
    phase: FetchPhase,
}

impl Default for ComponentState {
    fn default() -> Self {
        Self {
            app_name: PLACEHOLDER_APP_NAME.to_string(),
            phase: FetchPhase::Awaiting,
        }
    }
}

impl ComponentState {
    pub fn loaded(info: AppInfo) -> Self {
        Self {
            app_name: info.app_name,
            phase: FetchPhase::Loaded,
        }
    }

    pub fn failed(failure: FetchFailure) -> Self {
        Self {
            app_name: failure.title_text(),
            phase: FetchPhase::Failed(failure),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match &self.phase {
            FetchPhase::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}
