//! Axum HTTP server: 4 endpoints for the quiz frontend.
//!
//! All endpoints are stateless. Plot generation seeds a fresh RNG from OS
//! entropy per request, and answer checking works entirely from the
//! submitted body, so any number of handlers can run concurrently.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Quiz page (`static/index.html`) |
//! | GET | `/health` | Health check |
//! | GET | `/get_plot` | Fresh density plot plus its color answer key |
//! | POST | `/check_answer` | Verdict on a submitted guess |

use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tower_http::cors::{Any, CorsLayer};

use crate::constants::{RESULT_CORRECT, RESULT_INCORRECT};
use crate::figure::build_figure;
use crate::generator;
use crate::quiz::{self, AnswerSubmission};

pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health_check))
        .route("/get_plot", get(handle_get_plot))
        .route("/check_answer", post(handle_check_answer))
        .layer(cors)
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

// ── GET handlers ────────────────────────────────────────────────────

async fn handle_index() -> Result<Html<String>, (StatusCode, Json<serde_json::Value>)> {
    let file_path = "static/index.html";
    match std::fs::read_to_string(file_path) {
        Ok(contents) => Ok(Html(contents)),
        Err(_) => Err(error_response(
            StatusCode::NOT_FOUND,
            &format!("Could not open {}", file_path),
        )),
    }
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_get_plot(
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let mut rng = SmallRng::from_os_rng();
    let generated = generator::generate(&mut rng);
    let colors = quiz::assign_colors(&mut rng);
    let figure = build_figure(&generated.curve, &generated.stats, colors);

    // The frontend expects the figure double-encoded: a JSON string inside
    // the JSON envelope.
    let graph = serde_json::to_string(&figure).map_err(|_| {
        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to serialize figure",
        )
    })?;

    Ok(Json(serde_json::json!({
        "graph": graph,
        "colors": colors,
    })))
}

// ── POST handlers ───────────────────────────────────────────────────

async fn handle_check_answer(
    Json(submission): Json<AnswerSubmission>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    let correct = submission
        .correct_answers
        .ok_or_else(|| error_response(StatusCode::BAD_REQUEST, "Missing correct_answers"))?;

    let result = if quiz::check_answers(&submission, &correct) {
        RESULT_CORRECT
    } else {
        RESULT_INCORRECT
    };

    Ok(Json(serde_json::json!({ "result": result })))
}
