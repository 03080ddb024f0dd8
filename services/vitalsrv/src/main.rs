use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitalsrv::api::{self, AppState};
use vitalsrv::engine::{HeartRateAlert, ReminderScheduler, SamplerSettings, VitalsSampler};
use vitalsrv::notify::{EventSink, LogNotifier, NotificationCenter};
use vitalsrv::presence::PresenceWatcher;
use vitalsrv::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load().context("failed to load configuration")?;

    let center = Arc::new(NotificationCenter::new(
        config.notifications.cap,
        Arc::new(LogNotifier::default()),
    ));
    let sink: Arc<dyn EventSink> = center.clone();

    let sampler = Arc::new(VitalsSampler::new(
        SamplerSettings {
            interval: Duration::from_millis(config.sampler.interval_ms),
            history_cap: config.sampler.history_cap,
            alert: config.alerts.enabled.then(|| HeartRateAlert {
                threshold: config.alerts.heart_rate_threshold,
            }),
        },
        Arc::clone(&sink),
    ));
    let scheduler = Arc::new(ReminderScheduler::new(Arc::clone(&sink)));
    let presence = Arc::new(PresenceWatcher::new(
        config.presence.state_path.clone(),
        config.presence.threshold_ms,
        Arc::clone(&sink),
    ));

    sampler.start().await;
    scheduler.start(config.reminders()).await;

    let app = api::router(AppState {
        sampler: Arc::clone(&sampler),
        center,
        presence,
    });

    let bind_addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port)
        .parse()
        .context("invalid bind address")?;
    info!("Starting vitals service on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.stop().await;
    sampler.stop().await;
    info!("vitals service stopped");

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
