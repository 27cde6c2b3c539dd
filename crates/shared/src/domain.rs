use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

// Identifies one mounted component instance; completions are routed back by it.
id_newtype!(ComponentId);

/// Application metadata as the UI consumes it, detached from the wire envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppInfo {
    pub app_name: String,
}

impl From<crate::protocol::InfoResponse> for AppInfo {
    fn from(value: crate::protocol::InfoResponse) -> Self {
        Self {
            app_name: value.app_name,
        }
    }
}
