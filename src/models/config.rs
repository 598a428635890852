//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_session_idle_secs() -> u64 {
    60 * 60
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the roster backend serving `/getGenderList` and `/getClientsForAge`.
    pub backend_url: String,
    pub templates_dir: String,
    /// Cookie signing key, at least 64 bytes.
    pub secret: String,
    /// Dashboard sessions idle for longer than this are dropped.
    #[serde(default = "default_session_idle_secs")]
    pub session_idle_secs: u64,
}
