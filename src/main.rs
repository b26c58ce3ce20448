use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use turnstile::store::FileStore;
use turnstile::{AppConfig, AppState, AuthGate, build_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::build().data_dir(
        std::env::var("TURNSTILE_DATA_DIR").unwrap_or_else(|_| String::from("./data")),
    );
    let addr = std::env::var("TURNSTILE_ADDR").unwrap_or_else(|_| String::from("0.0.0.0:8080"));

    // Storage that cannot initialize is fatal at startup.
    let users = FileStore::open(config.data_dir.join("users")).expect("user store init failed");
    let sessions =
        FileStore::open(config.data_dir.join("sessions")).expect("session store init failed");

    let state = AppState {
        gate: Arc::new(AuthGate::new(users, sessions)),
        cookie: config.cookie,
    };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await.unwrap();
}
