//! Backend-to-UI events and failure modeling for the info component.

use info_client::FetchError;
use shared::domain::{AppInfo, ComponentId};

pub enum UiEvent {
    InfoLoaded {
        component_id: ComponentId,
        info: AppInfo,
    },
    InfoFailed {
        component_id: ComponentId,
        failure: FetchFailure,
    },
    BackendUnavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    Endpoint,
    Transport,
    HttpStatus,
    Decode,
}

pub fn category_label(category: FailureCategory) -> &'static str {
    match category {
        FailureCategory::Endpoint => "Configuration",
        FailureCategory::Transport => "Transport",
        FailureCategory::HttpStatus => "HTTP",
        FailureCategory::Decode => "Payload",
    }
}

/// Why the info fetch ended without an application name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    category: FailureCategory,
    status: Option<u16>,
    message: String,
}

impl FetchFailure {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            category: FailureCategory::Transport,
            status: None,
            message: message.into(),
        }
    }

    pub fn category(&self) -> FailureCategory {
        self.category
    }

    #[cfg(test)]
    pub(crate) fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Text shown in place of the application name.
    pub fn title_text(&self) -> String {
        let summary = match (self.category, self.status) {
            (FailureCategory::HttpStatus, Some(status)) => {
                format!("invalid request status {status}")
            }
            (FailureCategory::HttpStatus, None) => "invalid request status".to_string(),
            (FailureCategory::Transport, _) => "server unreachable".to_string(),
            (FailureCategory::Decode, _) => "malformed response".to_string(),
            (FailureCategory::Endpoint, _) => "invalid endpoint".to_string(),
        };
        format!("Failed to load application info: {summary}")
    }
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        let category = match err {
            FetchError::Endpoint(_) => FailureCategory::Endpoint,
            FetchError::Transport(_) => FailureCategory::Transport,
            FetchError::HttpStatus { .. } => FailureCategory::HttpStatus,
            FetchError::Decode(_) => FailureCategory::Decode,
        };
        Self {
            category,
            status: err.status(),
            message: err.to_string(),
        }
    }
}
