pub mod api;
pub mod assets;

use crate::bot::SimpleBot;
use crate::cli::Args;
use api::AppState;
use log::{error, info};
use std::error::Error;

pub struct Server {
    args: Args,
}

/// Resolves the TLS settings: `None` for plain HTTP, both paths when TLS is fully configured.
pub fn tls_paths(args: &Args) -> Result<Option<(&str, &str)>, Box<dyn Error + Send + Sync>> {
    if !args.enable_tls {
        return Ok(None);
    }
    match (&args.tls_cert_path, &args.tls_key_path) {
        (Some(cert_path), Some(key_path)) => Ok(Some((cert_path.as_str(), key_path.as_str()))),
        (Some(_), None) | (None, Some(_)) => {
            error!("Both --tls-cert-path and --tls-key-path must be provided to enable TLS.");
            Err("Missing TLS certificate or key path".into())
        }
        (None, None) => {
            error!("--enable-tls was set but no certificate/key paths provided.");
            Err("TLS enabled without cert/key".into())
        }
    }
}

impl Server {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.args.socket_addr()?;
        let app = api::router(AppState::new(SimpleBot::new()));

        match tls_paths(&self.args)? {
            Some((cert_path, key_path)) => api::serve_tls(addr, app, cert_path, key_path).await,
            None => {
                info!("TLS not enabled. Running plain HTTP server.");
                api::serve_plain(addr, app).await
            }
        }
    }
}
