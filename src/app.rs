use axum::{extract::State, middleware, routing::get, Json, Router};
use serde_json::json;

use crate::{
    app_state::AppState, middleware::observability_middleware,
    modules::notifications::routes::notification_routes,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/api/notifications", notification_routes())
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "ArenaX notification service says hello!\n"
}

async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_status = match state.store.ping().await {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.env.app.environment,
        "services": {
            "database": db_status,
        }
    }))
}
