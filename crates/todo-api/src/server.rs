//! HTTP server wiring

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use todo_persistence::{seed, InMemoryTodoListRepository};

use crate::{
    config::{ConfigError, ServerConfig},
    routes,
    state::AppState,
};

/// Todo list HTTP server
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Build the server from validated configuration, seeding if enabled
    pub async fn from_config(config: ServerConfig) -> Result<Self, ConfigError> {
        let categories = config.validate()?;
        let repository = Arc::new(InMemoryTodoListRepository::new(categories));

        if config.seed_sample_data {
            seed::seed_sample_data(repository.as_ref()).await;
        }

        Ok(Self {
            config,
            state: AppState::with_repository(repository),
        })
    }

    /// Shared state handed to handlers
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Router with all routes and middleware
    pub fn router(&self) -> Router {
        routes::build_router(self.state.clone())
    }

    /// Bind the configured address and serve until Ctrl-C
    pub async fn run(self) -> std::io::Result<()> {
        let listener = TcpListener::bind(self.config.bind_address()).await?;
        self.serve(listener).await
    }

    /// Serve on an already bound listener until Ctrl-C
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        let addr = listener.local_addr()?;
        info!(%addr, "Todo API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Todo API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
