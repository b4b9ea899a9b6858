use crate::utility::shutdown::shutdown_signal;
use axum::Router;
use eyre::{eyre, Report};
use std::net::SocketAddr;
use swiftcodes_primitives::models::app_config::AppConfig;
use tokio::net::TcpListener;
use tracing::info;

/// Parses `host:port` from the config; IPv6 hosts may be given bare or bracketed.
pub fn bind_address(config: &AppConfig) -> Result<SocketAddr, Report> {
    let host = config.host.trim_start_matches('[').trim_end_matches(']');
    let candidate = if host.contains(':') {
        format!("[{}]:{}", host, config.port)
    } else {
        format!("{}:{}", host, config.port)
    };

    candidate
        .parse()
        .map_err(|e| eyre!("Invalid bind address {}: {}", candidate, e))
}

pub async fn serve(router: Router, config: &AppConfig) -> Result<(), Report> {
    let addr = bind_address(config)?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!(
        "API under http://{}/{}, Swagger UI at http://{}/swagger-ui/",
        addr, config.api_version, addr
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
