//! Backend Config

use std::time::Duration;

use clap::Args;
use organimo::endpoints::Endpoints;

/// Where the catalog and checkout services live.
#[derive(Debug, Args)]
pub struct BackendConfig {
    /// Base URL of the storefront backend; empty means same-origin paths
    #[arg(long, env = "ORGANIMO_BACKEND_URL", default_value = "")]
    pub backend_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "ORGANIMO_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    #[must_use]
    pub fn endpoints(&self) -> Endpoints {
        Endpoints::new(&self.backend_url)
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
