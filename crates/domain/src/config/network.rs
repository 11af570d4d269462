use serde::{Deserialize, Serialize};

use crate::network::STANDARD_WEB_PORT;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// Plain-HTTP port of the admin console, used when leaving https
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

fn default_http_port() -> u16 {
    STANDARD_WEB_PORT
}
