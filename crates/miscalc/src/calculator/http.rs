use crate::prelude::{eprintln, *};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use miscalc_core::calculator::{CalculationRequest, CalculationResponse, Calculator};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub async fn run_serve(options: super::cli::ServeOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!(
            "Starting calculator service ({} engine) on {}:{}...",
            global.engine, options.host, options.port
        );
    }

    let addr = format!("{}:{}", options.host, options.port);
    let engine: Arc<dyn Calculator> = Arc::from(global.engine.engine());
    let app_router = router(engine);

    if global.verbose {
        eprintln!("Calculator endpoint: http://{}/calculator", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Server(f!("failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| Error::Server(f!("server error: {e}")))?;

    Ok(())
}

/// Build the calculator router around a shared engine.
///
/// The engine is stateless; handlers share it as an `Arc` with no locking.
pub fn router(engine: Arc<dyn Calculator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/calculator", post(calculate_handler))
        .route("/calculator/", post(calculate_handler))
        .layer(cors)
        .with_state(engine)
}

async fn calculate_handler(
    State(engine): State<Arc<dyn Calculator>>,
    Json(request): Json<CalculationRequest>,
) -> (StatusCode, Json<CalculationResponse>) {
    let (status, response) = super::respond(engine.as_ref(), request);
    (status, Json(response))
}
