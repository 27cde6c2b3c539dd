use serde::{Deserialize, Serialize};

/// Relative path of the info endpoint, resolved against the page's base URL.
pub const INFO_PATH: &str = "api/info";

/// Route the info service mounts [`INFO_PATH`] under.
pub fn info_route() -> &'static str {
    "/api/info"
}

/// Body of `GET api/info`. Fields other than `appName` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    #[serde(rename = "appName")]
    pub app_name: String,
}
