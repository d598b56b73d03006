//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to tera, e.g. `templates/**/*`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// tRPC endpoint of the poetry backend.
    pub backend_url: String,
    /// Whether the backend wraps payloads with the superjson transformer.
    #[serde(default)]
    pub backend_superjson: bool,
}
