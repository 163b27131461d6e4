// Framework bootstrap for the dashboard server runtime.

use crate::frameworks::config::DashboardConfig;
use crate::interface_adapters::routes::app;
use crate::interface_adapters::state::AppState;

use std::io::Result;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener, config: DashboardConfig) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state(config);

    let app = app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let config = DashboardConfig::from_env();
    let address = config.addr;

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, config).await
}

fn build_state(config: DashboardConfig) -> AppState {
    tracing::debug!(
        data_dir = %config.data_dir.display(),
        template_dir = %config.template_dir.display(),
        static_dir = %config.static_dir.display(),
        "dashboard directories configured"
    );

    if !config.data_dir.is_dir() {
        tracing::warn!(data_dir = %config.data_dir.display(), "data directory does not exist");
    }

    AppState::new(config.data_dir, config.template_dir, config.static_dir)
}
