//! HTTP discovery surface.
//!
//! A thin axum wrapper over the registry: `GET /cameras` forwards the
//! registry result verbatim as JSON. No retry, pagination, or error shaping;
//! transport concerns beyond this route belong to the surrounding service.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::config::ServerConfig;
use crate::registry::{CameraListResponse, CameraProbe, CameraRegistry, Clock};

/// Errors that can occur while running the discovery server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid bind address '{value}': {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handler state: the registry plus the sweep bound.
struct AppState<P, C> {
    registry: CameraRegistry<P, C>,
    max_index: u32,
}

/// Build the discovery router around a registry.
///
/// The probe sweep opens hardware handles and blocks, so the handler hops to
/// `spawn_blocking` rather than probing on an async worker thread.
pub fn router<P, C>(registry: CameraRegistry<P, C>, max_index: u32) -> Router
where
    P: CameraProbe + 'static,
    C: Clock + 'static,
{
    let state = Arc::new(AppState {
        registry,
        max_index,
    });

    Router::new().route(
        "/cameras",
        get(move || {
            let state = state.clone();
            async move {
                let cameras = tokio::task::spawn_blocking(move || {
                    state.registry.list_available_cameras(state.max_index)
                })
                .await
                .unwrap_or_default();
                Json(CameraListResponse { cameras })
            }
        }),
    )
}

/// Bind and serve the discovery router until ctrl-c.
pub async fn serve<P, C>(
    config: &ServerConfig,
    registry: CameraRegistry<P, C>,
    max_index: u32,
) -> Result<(), ServerError>
where
    P: CameraProbe + 'static,
    C: Clock + 'static,
{
    let value = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = value
        .parse()
        .map_err(|source| ServerError::InvalidAddr { value, source })?;

    let app = router(registry, max_index);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", addr);
    log::info!("Camera list endpoint: http://{}/cameras", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    log::info!("Shutdown signal received, stopping server");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SystemClock;
    use std::time::Duration;

    struct FixedProbe(Vec<u32>);

    impl CameraProbe for FixedProbe {
        fn is_openable(&self, index: u32) -> bool {
            self.0.contains(&index)
        }
    }

    #[test]
    fn test_invalid_bind_host_is_rejected() {
        let config = ServerConfig {
            host: "not-a-host".to_string(),
            port: 8000,
        };
        let registry =
            CameraRegistry::new(FixedProbe(vec![]), SystemClock, Duration::from_secs(300));

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let result = runtime.block_on(serve(&config, registry, 3));
        assert!(matches!(result, Err(ServerError::InvalidAddr { .. })));
    }
}
