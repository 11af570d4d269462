use guardview_domain::{
    CurrentLocation, RedirectAction, TlsRedirectSettings, STANDARD_HTTPS_PORT, STANDARD_WEB_PORT,
};
use tracing::debug;

/// Decides where the console must go after the encryption settings were saved.
pub struct PlanProtocolRedirectUseCase {
    http_port: u16,
}

impl PlanProtocolRedirectUseCase {
    pub fn new(http_port: u16) -> Self {
        Self { http_port }
    }

    pub fn execute(
        &self,
        location: &CurrentLocation,
        tls: &TlsRedirectSettings,
    ) -> RedirectAction {
        let action = match tls.active_https_port() {
            Some(https_port) if !location.secure || effective_port(location) != https_port => {
                RedirectAction::Probe(https_url(location, https_port))
            }
            Some(_) => RedirectAction::Stay,
            None if location.secure => RedirectAction::Replace(format!(
                "http://{}:{}/{}",
                location.hostname, self.http_port, location.hash
            )),
            None => RedirectAction::Stay,
        };

        debug!(
            secure = location.secure,
            tls_enabled = tls.enabled,
            action = ?action,
            "Planned protocol redirect"
        );
        action
    }
}

impl Default for PlanProtocolRedirectUseCase {
    fn default() -> Self {
        Self::new(STANDARD_WEB_PORT)
    }
}

/// Port the page is served from, filling in the scheme default.
fn effective_port(location: &CurrentLocation) -> u16 {
    match (location.port, location.secure) {
        (Some(port), _) => port,
        (None, true) => STANDARD_HTTPS_PORT,
        (None, false) => STANDARD_WEB_PORT,
    }
}

fn https_url(location: &CurrentLocation, https_port: u16) -> String {
    let port = if https_port == STANDARD_HTTPS_PORT {
        String::new()
    } else {
        format!(":{}", https_port)
    };
    format!("https://{}{}/{}", location.hostname, port, location.hash)
}
