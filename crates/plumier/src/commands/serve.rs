use std::time::Duration;

use clap::Parser;
use plumier_api_server::config::GatewayConfig;
use plumier_api_server::{ApiService, InitApiServiceParams};
use shared::error::CommonError;
use tokio::sync::{broadcast, oneshot};
use tracing::{error, info, warn};

use crate::server::{StartAxumServerParams, start_axum_server};

#[derive(Debug, Clone, Parser)]
pub struct ServeParams {
    /// Port to listen on, overrides the PORT environment variable
    #[arg(long)]
    pub port: Option<u16>,
    /// Host to bind to, overrides the HOST environment variable
    #[arg(long)]
    pub host: Option<String>,
}

/// Main entry point for the serve command
pub async fn cmd_serve(params: ServeParams) -> Result<(), CommonError> {
    let (system_shutdown_signal_trigger, _system_shutdown_signal_receiver) =
        broadcast::channel::<()>(1);

    let mut config = GatewayConfig::from_env()?;
    if let Some(port) = params.port {
        config.port = port;
    }
    if let Some(host) = params.host {
        config.host = host;
    }

    let api_service = ApiService::new(InitApiServiceParams {
        config: config.clone(),
    })?;

    let axum_system_shutdown_signal_rx = system_shutdown_signal_trigger.subscribe();
    let (axum_shutdown_complete_signal_trigger, mut axum_shutdown_complete_signal_receiver) =
        oneshot::channel::<Result<(), std::io::Error>>();

    let (server_fut, _handle, addr) = match start_axum_server(StartAxumServerParams {
        host: config.host.clone(),
        port: config.port,
        system_shutdown_signal_rx: axum_system_shutdown_signal_rx,
        api_service,
    })
    .await
    {
        Ok(result) => result,
        Err(e) => {
            error!("Failed to start Axum server: {:?}", e);
            return Err(e);
        }
    };

    tokio::spawn(async move {
        let res = server_fut.await;
        match &res {
            Ok(()) => info!("Axum server stopped gracefully"),
            Err(e) => error!("Axum server stopped with error: {:?}", e),
        }
        let _ = axum_shutdown_complete_signal_trigger.send(res);
    });

    let port = addr.port();
    info!("Server running on port {port}");
    info!("Try: http://localhost:{port}/rephrase?sapling=hey wuts going on");
    info!("Try: http://localhost:{port}/sapling_grammar?edite=Hi, How are you doing.");
    info!("Try: http://localhost:{port}/autocomplete?sapling_phras=Hi how are");
    info!("Try: http://localhost:{port}/ai?detection=This is sample text");
    info!("Try POST: http://localhost:{port}/summarize with {{\"text\": \"your text here\"}}");

    // Wait for a shutdown signal (Ctrl+C), or for the server to exit on its
    // own. The server binds lazily, so a taken port surfaces as an early exit.
    tokio::select! {
        signal = tokio::signal::ctrl_c() => {
            signal?;
            info!("Shutdown signal received, triggering graceful shutdown");
            let _ = system_shutdown_signal_trigger.send(());

            tokio::select! {
                _ = &mut axum_shutdown_complete_signal_receiver => {
                    info!("Axum server shut down");
                }
                _ = tokio::time::sleep(Duration::from_secs(35)) => {
                    warn!("Shutdown timed out after 35s, proceeding anyway");
                }
            }
        }
        res = &mut axum_shutdown_complete_signal_receiver => {
            error!("Axum server exited before a shutdown was requested");
            return match res {
                Ok(Err(e)) => Err(e.into()),
                _ => Err(CommonError::Unknown(anyhow::anyhow!(
                    "Axum server exited before a shutdown was requested"
                ))),
            };
        }
    }

    Ok(())
}
