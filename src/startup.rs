use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use crate::{config::Config, routes::init_router, state::AppState};

pub struct Application {
    port: u16,
    host: String,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, anyhow::Error> {
        let address = config.application.get_address();
        let state = AppState::init(config).context("Failed to create catalog client.")?;
        let router = init_router(state);

        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Unable to open {}", address))?;

        let address = listener.local_addr()?;
        let port = address.port();
        let host = address.ip().to_string();

        Ok(Application {
            port,
            host,
            listener,
            router,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn host(&self) -> String {
        self.host.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        tracing::info!("Starting server: {}:{}", self.host, self.port);

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(err.msg = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(err.msg = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
