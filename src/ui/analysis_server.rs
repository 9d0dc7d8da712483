use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Deserialize;
use serde_json::json;
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};
use warp::{Filter, Rejection, Reply};
use crate::config::constants::SERVICE_NAME;
use crate::errors::{PhishGuardError, PhishGuardResult};
use crate::services::email_analyzer::EmailAnalyzer;
use crate::services::url_analyzer::UrlAnalyzer;

const MAX_BODY_BYTES: u64 = 2 * 1024 * 1024;

/// Analyzers shared by every request. Both are immutable after construction.
pub struct AnalyzerState {
    pub url_analyzer: UrlAnalyzer,
    pub email_analyzer: EmailAnalyzer,
}

#[derive(Debug, Deserialize)]
struct UrlRequest {
    #[serde(default)]
    url: String,
}

#[derive(Debug, Deserialize)]
struct EmailRequest {
    #[serde(default)]
    email: String,
}

pub struct AnalysisServer {
    state: Arc<AnalyzerState>,
}

impl AnalysisServer {
    pub fn new(state: AnalyzerState) -> Self {
        Self {
            state: Arc::new(state),
        }
    }

    /// Serves until Ctrl+C. `open_browser` launches the front page once bound.
    pub async fn run(&self, host: &str, port: u16, open_browser: bool) -> PhishGuardResult<()> {
        let addr: SocketAddr = format!("{host}:{port}").parse().map_err(|_| {
            PhishGuardError::input_error(&format!("{host}:{port}"), "a host:port socket address", "Use an IP such as 127.0.0.1")
        })?;

        let (bound, server) = warp::serve(routes(Arc::clone(&self.state)))
            .try_bind_with_graceful_shutdown(addr, async {
                tokio::signal::ctrl_c().await.ok();
                log::info!("🛑 Shutting down analysis server...");
            })
            .map_err(|e| PhishGuardError::network_error("bind server", Some(&addr.to_string()), &e.to_string()))?;

        let page = format!("http://{bound}");
        log::info!("🚀 {SERVICE_NAME} listening on {page}");
        log::info!("📡 API health check: {page}/api/health");
        log::info!("🛑 Press Ctrl+C to stop");

        if open_browser {
            if let Err(e) = webbrowser::open(&page) {
                log::warn!("⚠️ Could not open browser: {e}");
            }
        }

        server.await;
        log::info!("✅ Analysis server shutdown complete");
        Ok(())
    }
}

pub fn routes(
    state: Arc<AnalyzerState>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(include_str!("static/index.html")));

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({ "status": "healthy", "service": SERVICE_NAME })));

    let analyze_url = warp::path!("analyze")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(state_filter.clone())
        .and_then(analyze_url_handler);

    let analyze_email = warp::path!("analyze" / "email")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(state_filter)
        .and_then(analyze_email_handler);

    index
        .or(health)
        .or(analyze_url)
        .or(analyze_email)
        .recover(handle_rejection)
}

fn error_reply(message: &str, status: StatusCode) -> WithStatus<Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

async fn analyze_url_handler(
    body: UrlRequest,
    state: Arc<AnalyzerState>,
) -> Result<WithStatus<Json>, Infallible> {
    if body.url.trim().is_empty() {
        return Ok(error_reply("No URL provided", StatusCode::BAD_REQUEST));
    }

    let url = body.url;
    let task = tokio::spawn(async move { state.url_analyzer.analyze(&url).await });

    match task.await {
        Ok(analysis) => Ok(warp::reply::with_status(warp::reply::json(&analysis), StatusCode::OK)),
        Err(e) => {
            log::error!("❌ URL analysis task failed: {e}");
            Ok(error_reply(&format!("Analysis failed: {e}"), StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

async fn analyze_email_handler(
    body: EmailRequest,
    state: Arc<AnalyzerState>,
) -> Result<WithStatus<Json>, Infallible> {
    if body.email.trim().is_empty() {
        return Ok(error_reply("No email provided", StatusCode::BAD_REQUEST));
    }

    let email = body.email;
    let task = tokio::task::spawn_blocking(move || state.email_analyzer.analyze(&email));

    match task.await {
        Ok(analysis) => Ok(warp::reply::with_status(warp::reply::json(&analysis), StatusCode::OK)),
        Err(e) => {
            log::error!("❌ Email analysis task failed: {e}");
            Ok(error_reply(&format!("Analysis failed: {e}"), StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

async fn handle_rejection(err: Rejection) -> Result<WithStatus<Json>, Infallible> {
    if err.is_not_found() {
        return Ok(error_reply("Not found", StatusCode::NOT_FOUND));
    }
    if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        return Ok(error_reply(&format!("Invalid JSON body: {e}"), StatusCode::BAD_REQUEST));
    }
    if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        return Ok(error_reply("Request body too large", StatusCode::PAYLOAD_TOO_LARGE));
    }
    if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        return Ok(error_reply("Expected a JSON body", StatusCode::UNSUPPORTED_MEDIA_TYPE));
    }
    if err.find::<warp::reject::LengthRequired>().is_some() {
        return Ok(error_reply("Content-Length required", StatusCode::LENGTH_REQUIRED));
    }
    if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        return Ok(error_reply("Method not allowed", StatusCode::METHOD_NOT_ALLOWED));
    }

    log::error!("❌ Unhandled rejection: {err:?}");
    Ok(error_reply("Internal server error", StatusCode::INTERNAL_SERVER_ERROR))
}
