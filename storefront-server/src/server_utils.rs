use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use tokio::signal;
use tracing::info;

use storefront_types::models::ServerConfig;

pub fn bind_address(server: &ServerConfig) -> Result<SocketAddr> {
    let ip: IpAddr = server
        .host
        .parse()
        .with_context(|| format!("Invalid bind address '{}'", server.host))?;
    Ok(SocketAddr::new(ip, server.port))
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, shutting down..."),
        () = terminate => info!("🛑 Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let server = ServerConfig { host: "0.0.0.0".to_string(), port: 8080, ..Default::default() };
        assert_eq!(bind_address(&server).unwrap().to_string(), "0.0.0.0:8080");

        let bad = ServerConfig { host: "localhost".to_string(), ..Default::default() };
        assert!(bind_address(&bad).is_err());
    }
}
