use std::future::Future;
use std::sync::Arc;

use tokio::net::TcpListener;

use inv_store::{InMemoryMaterialStore, MaterialStore};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// Inventory material server.
pub struct InvServer {
    config: ServerConfig,
    store: Arc<dyn MaterialStore>,
}

impl InvServer {
    /// Server backed by an empty in-memory store using `config.store`.
    pub fn new(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryMaterialStore::with_policy(config.store.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: ServerConfig, store: Arc<dyn MaterialStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn MaterialStore> {
        Arc::clone(&self.store)
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::new(self.store()), self.config.cors_permissive)
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> ServerResult<()> {
        self.serve_with_shutdown(shutdown_signal()).await
    }

    /// Serve until `signal` completes, then drain in-flight requests.
    pub async fn serve_with_shutdown<F>(self, signal: F) -> ServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        let local = listener.local_addr()?;
        tracing::info!("inventory server listening on {local}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(signal)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))?;
        tracing::info!("inventory server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;

    #[test]
    fn server_construction() {
        let server = InvServer::new(ServerConfig::default());
        assert_eq!(
            server.config().bind_addr,
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(server.store().count().unwrap(), 0);
    }

    #[test]
    fn router_builds() {
        let server = InvServer::new(ServerConfig::default());
        let _router = server.router();
    }

    #[tokio::test]
    async fn serve_stops_on_signal() {
        let config = ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            ..ServerConfig::default()
        };
        let server = InvServer::new(config);
        server.serve_with_shutdown(async {}).await.unwrap();
    }
}
