//! Server lifecycle - storage and listener held by one explicit handle.

use std::io;
use std::net::SocketAddr;

use actix_web::rt::task::JoinHandle;
use actix_web::{App, HttpServer, dev::ServerHandle, web};
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use blog_core::error::RepoError;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Error opening storage: {0}")]
    Storage(#[from] RepoError),
    #[error("Error binding tcp listener on {addr}: {source}")]
    Bind { addr: String, source: io::Error },
}

/// A listening server and the storage it serves from.
pub struct RunningServer {
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    state: AppState,
    local_addr: SocketAddr,
}

impl RunningServer {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Disconnect storage, then stop the listener gracefully.
    pub async fn close(self) -> io::Result<()> {
        tracing::info!("Closing server");

        self.state.close().await;
        self.handle.stop(true).await;

        self.task.await.map_err(io::Error::other)?
    }
}

/// Open storage and start listening as configured.
pub async fn run_server(config: &AppConfig) -> Result<RunningServer, StartupError> {
    let state = AppState::new(config.database.as_ref()).await?;

    match serve(state.clone(), &config.host, config.port) {
        Ok(server) => Ok(server),
        Err(e) => {
            // Don't leave the storage connection open behind a failed bind
            state.close().await;
            Err(e)
        }
    }
}

/// Bind the HTTP listener over `state` and start serving in the background.
pub fn serve(state: AppState, host: &str, port: u16) -> Result<RunningServer, StartupError> {
    let bind_error = |source| StartupError::Bind {
        addr: format!("{host}:{port}"),
        source,
    };

    let app_state = state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .configure(handlers::configure(app_state.clone()))
            .default_service(web::to(handlers::not_found))
    })
    .disable_signals()
    .bind((host, port))
    .map_err(bind_error)?;

    let local_addr = server.addrs().first().copied().ok_or_else(|| {
        bind_error(io::Error::new(
            io::ErrorKind::AddrNotAvailable,
            "no address bound",
        ))
    })?;

    let server = server.run();
    let handle = server.handle();
    let task = actix_web::rt::spawn(server);

    tracing::info!(%local_addr, "Your app is listening");

    Ok(RunningServer {
        handle,
        task,
        state,
        local_addr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_serve_binds_ephemeral_port_and_closes() {
        let server = serve(AppState::in_memory(), "127.0.0.1", 0).unwrap();

        assert_ne!(server.local_addr().port(), 0);
        server.close().await.unwrap();
    }

    #[actix_web::test]
    async fn test_run_server_without_database_uses_memory() {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
        };

        let server = run_server(&config).await.unwrap();
        server.close().await.unwrap();
    }
}
