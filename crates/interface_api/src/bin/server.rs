//! Claims Edit Desk - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (in-memory registries)
//! cargo run --bin claims-desk-api
//!
//! # Run with environment variables
//! API_HOST=0.0.0.0 API_PORT=8080 API_JWT_SECRET=... cargo run --bin claims-desk-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_JWT_SECRET` - JWT signing secret (required in production)
//! * `API_JWT_EXPIRATION_SECS` - JWT token expiration in seconds (default: 3600)
//! * `API_DATA_SOURCE` - "memory" or "external" (default: memory)
//! * `API_EXTERNAL_BASE_URL` - Upstream base URL when data source is external
//! * `API_SEED_DEMO` - Seed demo claims and users when "true" (default: false)
//! * `API_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app_services::{EditDeskService, InMemoryHandles};
use core_kernel::{Currency, Money};
use domain_claims::Claim;
use domain_users::{Role, User};
use interface_api::{config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();
    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_source = %config.data_source,
        "Starting Claims Edit Desk API Server"
    );

    let source = config
        .data_source_config()
        .context("invalid data source configuration")?;
    if !source.source.is_memory() {
        // The external adapter ships separately; this binary serves the
        // in-memory reference store.
        anyhow::bail!("this build only supports the 'memory' data source");
    }

    let (service, handles) = EditDeskService::in_memory();
    if std::env::var("API_SEED_DEMO").map(|v| v == "true").unwrap_or(false) {
        seed_demo_data(&handles).await;
        tracing::info!("Demo data seeded");
    }

    let app = create_router(Arc::new(service), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("invalid server address")?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads API configuration from environment variables, falling back to
/// individual variables or defaults.
fn load_config() -> ApiConfig {
    ApiConfig::from_env().unwrap_or_else(|_| ApiConfig {
        host: std::env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        port: std::env::var("API_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080),
        jwt_secret: std::env::var("API_JWT_SECRET")
            .unwrap_or_else(|_| "dev-secret-change-in-production".to_string()),
        jwt_expiration_secs: std::env::var("API_JWT_EXPIRATION_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3600),
        data_source: std::env::var("API_DATA_SOURCE").unwrap_or_else(|_| "memory".to_string()),
        external_base_url: std::env::var("API_EXTERNAL_BASE_URL").ok(),
        log_level: std::env::var("API_LOG_LEVEL")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".to_string()),
    })
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Seeds a small working set for local exploration.
async fn seed_demo_data(handles: &InMemoryHandles) {
    let alice = User::new("Alice Ward", "alice.ward@desk.example", Role::Editor);
    let bob = User::new("Bob Tran", "bob.tran@desk.example", Role::Editor);
    let mara = User::new("Mara Chen", "mara.chen@desk.example", Role::Manager);

    let mut claims = Vec::new();
    for (i, (patient, hospital, amount)) in [
        ("Amina Hassan", "City General", 1200),
        ("Tomas Rivera", "St. Anne", 2400),
        ("Noor Khalid", "Mercy Hospital", 800),
        ("Farid Aziz", "Riverside", 500),
    ]
    .into_iter()
    .enumerate()
    {
        let mut claim = Claim::intake(
            format!("V-{}", 1001 + i),
            patient,
            hospital,
            Money::new(Decimal::from(amount), Currency::USD),
        );
        if i % 2 == 0 {
            claim.assign_to(alice.id, alice.name.clone());
        }
        claims.push(claim);
    }

    handles.users.seed(vec![alice, bob, mara]).await;
    handles.claims.seed(claims).await;
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
