pub mod bot;
pub mod cli;
pub mod error;
pub mod models;
pub mod server;

use cli::Args;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Host: {}", args.host);
    info!("Port: {}", args.port);
    info!("Debug: {}", args.debug);
    info!("TLS Enabled: {}", args.enable_tls);
    if args.enable_tls {
        info!(
            "TLS Certificate: {}",
            args.tls_cert_path.as_deref().unwrap_or("<unset>")
        );
        info!(
            "TLS Key: {}",
            args.tls_key_path.as_deref().unwrap_or("<unset>")
        );
    }
    info!("-------------------------");

    let server = Server::new(args);
    server.run().await?;

    Ok(())
}
