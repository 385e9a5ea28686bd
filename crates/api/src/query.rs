//! Shared query parameter types for API handlers.

use cronlog_core::job_key::JobKey;
use cronlog_core::types::DbId;
use serde::Deserialize;

/// `?server=` selecting a single host.
#[derive(Debug, Deserialize)]
pub struct ServerParams {
    pub server: String,
}

/// `?path=&server=`, the remainder of a job's composite key after the ID in
/// the URL path.
#[derive(Debug, Deserialize)]
pub struct JobKeyParams {
    pub path: String,
    pub server: String,
}

impl JobKeyParams {
    pub fn into_key(self, id: DbId) -> JobKey {
        JobKey::new(id, self.path, self.server)
    }
}
