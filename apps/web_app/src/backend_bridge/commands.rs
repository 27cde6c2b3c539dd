//! Backend commands queued from UI to backend worker.

use shared::domain::ComponentId;
use url::Url;

#[derive(Debug)]
pub enum BackendCommand {
    FetchInfo {
        component_id: ComponentId,
        endpoint: Url,
    },
}
