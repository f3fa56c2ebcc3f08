use ems_dashboard::{render, ApiClient, Config, StatusDashboard};
use std::io::Write;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout belongs to the dashboard
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ems_dashboard=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting EMS status dashboard");

    let config = match std::env::var("CONFIG_PATH") {
        Ok(path) => {
            let config = Config::load(&path)?;
            info!("Configuration loaded from: {}", path);
            config
        }
        Err(_) => Config::from_env()?,
    };
    info!("Polling {} every {:?}", config.api.base_url, config.poll_interval());

    let client = ApiClient::new(&config)?;
    let mut dashboard = StatusDashboard::start(Arc::new(client), config.poll_interval());
    let mut updates = dashboard.subscribe();

    draw(&render(&dashboard.view()));

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    warn!("Dashboard state channel closed");
                    break;
                }
                let view = updates.borrow_and_update().view();
                draw(&render(&view));
            }
        }
    }

    dashboard.shutdown();
    info!("Dashboard shutdown complete");
    Ok(())
}

fn draw(frame: &str) {
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = write!(stdout, "{}{}", CLEAR_SCREEN, frame).and_then(|_| stdout.flush()) {
        warn!("Failed to draw dashboard: {}", e);
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
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
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down gracefully");
        },
    }
}
