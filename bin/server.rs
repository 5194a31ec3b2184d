// Numerology Calculator - Web Server
// REST API with Axum

use anyhow::{Context as AnyhowContext, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use numerology::{
    breakdown, validation, Calculator, CalculatorConfig, CompatibilityReport, InputValidator,
    LetterValue, Reading, ReadingCache, ValidationError, THEMES,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Shared application state
#[derive(Clone)]
struct AppState {
    calculator: Calculator,
    validator: Arc<InputValidator>,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn rejected(errors: &[ValidationError]) -> Self {
        Self {
            success: false,
            data: (),
            error: Some(validation::describe(errors)),
        }
    }
}

fn bad_request(route: &str, errors: &[ValidationError]) -> Response {
    tracing::warn!(route, error = %validation::describe(errors), "rejected input");
    (StatusCode::BAD_REQUEST, Json(ApiResponse::rejected(errors))).into_response()
}

#[derive(Deserialize)]
struct ReadingQuery {
    #[serde(default)]
    name: String,
    #[serde(default)]
    birthdate: String,
}

#[derive(Deserialize)]
struct CompatibilityQuery {
    #[serde(default)]
    first: String,
    #[serde(default)]
    second: String,
}

/// Per-letter breakdown response
#[derive(Serialize)]
struct LettersResponse {
    name: String,
    letters: Vec<LetterValue>,
    expression: u32,
    soul_urge: u32,
}

#[derive(Serialize)]
struct ThemeResponse {
    total: u32,
    theme: &'static str,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/reading?name=..&birthdate=YYYY-MM-DD - Four core numbers
async fn get_reading(
    State(state): State<AppState>,
    Query(query): Query<ReadingQuery>,
) -> Response {
    match state.validator.person(&query.name, &query.birthdate) {
        Ok((name, birthdate)) => {
            let reading = Reading::compute(&state.calculator, &name, birthdate);
            (StatusCode::OK, Json(ApiResponse::ok(reading))).into_response()
        }
        Err(errors) => bad_request("reading", &errors),
    }
}

/// GET /api/compatibility?first=..&second=.. - Life path compatibility
async fn get_compatibility(
    State(state): State<AppState>,
    Query(query): Query<CompatibilityQuery>,
) -> Response {
    match state.validator.pair(&query.first, &query.second) {
        Ok((first, second)) => {
            let report = CompatibilityReport::compute(&state.calculator, first, second);
            (StatusCode::OK, Json(ApiResponse::ok(report))).into_response()
        }
        Err(errors) => bad_request("compatibility", &errors),
    }
}

/// GET /api/letters/:name - Letter values of a name
async fn get_letters(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    // Path has already percent-decoded the segment
    match state.validator.name("name", &name) {
        Ok(name) => {
            let response = LettersResponse {
                letters: breakdown(&name),
                expression: state.calculator.expression(&name),
                soul_urge: state.calculator.soul_urge(&name),
                name,
            };
            (StatusCode::OK, Json(ApiResponse::ok(response))).into_response()
        }
        Err(error) => bad_request("letters", &[error]),
    }
}

/// GET /api/themes - Relationship theme table
async fn get_themes() -> impl IntoResponse {
    let themes: Vec<ThemeResponse> = THEMES
        .iter()
        .map(|&(total, theme)| ThemeResponse { total, theme })
        .collect();

    Json(ApiResponse::ok(themes))
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/reading", get(get_reading))
        .route("/compatibility", get(get_compatibility))
        .route("/letters/:name", get(get_letters))
        .route("/themes", get(get_themes))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    println!("🌐 Numerology Calculator - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let config = CalculatorConfig::load()?;
    println!(
        "✓ Birth dates accepted: {} to {} (cache: {} entries)",
        config.min_date, config.max_date, config.cache_capacity
    );

    // Create shared state
    let state = AppState {
        calculator: Calculator::with_cache(ReadingCache::new(config.cache_capacity)),
        validator: Arc::new(InputValidator::new(&config)),
    };

    let app = router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.server_addr))?;

    println!("\n🚀 Server running on http://{}", config.server_addr);
    println!("   API: http://{}/api/reading?name=TARO%20YAMADA&birthdate=1980-01-01", config.server_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = CalculatorConfig::default();
        AppState {
            calculator: Calculator::with_cache(ReadingCache::new(config.cache_capacity)),
            validator: Arc::new(InputValidator::new(&config)),
        }
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json("/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], "OK");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_reading_for_taro_yamada() {
        let (status, body) = get_json("/api/reading?name=TARO%20YAMADA&birthdate=1980-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["name"], "TARO YAMADA");
        assert_eq!(body["data"]["birthdate"], "1980-01-01");
        assert_eq!(body["data"]["life_path"], 2);
        assert_eq!(body["data"]["birth_day"], 1);
        assert_eq!(body["data"]["expression"], 9);
        assert_eq!(body["data"]["soul_urge"], 1);
    }

    #[tokio::test]
    async fn test_reading_rejects_empty_name() {
        let (status, body) = get_json("/api/reading?name=&birthdate=1980-01-01").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("please enter a name"));
    }

    #[tokio::test]
    async fn test_reading_rejects_out_of_range_date() {
        let (status, body) = get_json("/api/reading?name=TARO&birthdate=1900-01-01").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("birthdate:"));
    }

    #[tokio::test]
    async fn test_compatibility_total() {
        let (status, body) = get_json("/api/compatibility?first=1980-01-01&second=1980-01-01").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["result"]["first"], 2);
        assert_eq!(body["data"]["result"]["second"], 2);
        assert_eq!(body["data"]["result"]["relationship_type"], "TooSimilar");
        assert_eq!(body["data"]["result"]["total"], 4);
    }

    #[tokio::test]
    async fn test_compatibility_missing_date() {
        let (status, body) = get_json("/api/compatibility?first=1980-01-01").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("second:"));
    }

    #[tokio::test]
    async fn test_themes_table() {
        let (status, body) = get_json("/api/themes").await;

        assert_eq!(status, StatusCode::OK);
        let themes = body["data"].as_array().unwrap();
        assert_eq!(themes.len(), 12);
        assert_eq!(themes[9]["total"], 11);
    }

    #[tokio::test]
    async fn test_letters_decoded_once() {
        // %2541 arrives as the literal text "%41", which has no letters
        let (status, body) = get_json("/api/letters/%2541").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["name"], "%41");
        assert_eq!(body["data"]["letters"].as_array().unwrap().len(), 0);
        assert_eq!(body["data"]["expression"], 0);
        assert_eq!(body["data"]["soul_urge"], 0);
    }

    #[tokio::test]
    async fn test_letters_breakdown() {
        let (status, body) = get_json("/api/letters/TARO%20YAMADA").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["letters"].as_array().unwrap().len(), 10);
        assert_eq!(body["data"]["expression"], 9);
        assert_eq!(body["data"]["soul_urge"], 1);
    }
}
