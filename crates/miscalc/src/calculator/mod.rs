mod cli;
mod http;

pub use cli::App;

use crate::prelude::{println, *};
use axum::http::StatusCode;
use miscalc_core::calculator::{CalculationRequest, CalculationResponse, Calculator};

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        cli::Commands::Serve(options) => http::run_serve(options, global).await,
        cli::Commands::Eval(options) => run_eval(options, global),
    }
}

/// Run one calculation and map the outcome to a response envelope plus the
/// HTTP status it travels with.
///
/// Client-fault errors keep their descriptive message and map to 400. Engine
/// faults map to 500 with a generic message; the underlying detail is logged
/// rather than echoed to the caller.
pub fn respond(
    engine: &dyn Calculator,
    request: CalculationRequest,
) -> (StatusCode, CalculationResponse) {
    match engine.calculate(&request.operator, &request.operands) {
        Ok(value) => (
            StatusCode::OK,
            CalculationResponse::success(request, value),
        ),
        Err(error) if error.is_client_fault() => {
            let response = CalculationResponse::failure(request, &error);
            (StatusCode::BAD_REQUEST, response)
        }
        Err(error) => {
            log::error!("calculation engine fault: {error}");
            let response = CalculationResponse::failure(request, "internal calculation failure");
            (StatusCode::INTERNAL_SERVER_ERROR, response)
        }
    }
}

fn run_eval(options: cli::EvalOptions, global: crate::Global) -> Result<()> {
    let engine = global.engine.engine();
    let request = CalculationRequest {
        operator: options.operator,
        operands: options.operands,
    };

    let (status, response) = respond(engine.as_ref(), request);
    println!("{}", serde_json::to_string_pretty(&response)?);

    if !status.is_success() {
        return Err(Error::Calculation(response.result).into());
    }

    Ok(())
}
