use std::sync::Arc;

use anyhow::Context;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use arenax_notify::{
    app::create_router,
    app_state::AppState,
    config,
    db::{self, PgStore},
    push::FcmClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv().ok();

    let env = config::init().context("Failed to load configuration")?.clone();

    let pool = db::init_pool()
        .await
        .context("Failed to initialize database pool")?;
    let store = Arc::new(PgStore::new(pool));
    let push = Arc::new(FcmClient::from_config(&env.fcm));

    let state = AppState::new(store, push, env.clone());
    let app = create_router(state);

    let addr = env.server_addr();
    info!("{} listening on {}", env.app.name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .await
        .context("Failed to serve application")?;

    Ok(())
}
