//! HTTP server mode for REST API access to the paginator

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::PagerConfig;
use crate::dataset::{CsvFileProvider, DatasetProvider};
use crate::error::{Error, Result};
use crate::pagination::Paginator;

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Paginator configuration (dataset file, page sizes)
    pub pager: PagerConfig,
}

/// App state shared across handlers
struct AppState<P> {
    config: PagerConfig,
    paginator: Paginator<P>,
}

/// Query parameters for range pages
#[derive(Debug, Deserialize)]
struct PageParams {
    /// 1-indexed page number (default: 1)
    #[serde(default)]
    page: Option<i64>,
    /// Records per page (default: configured page size)
    #[serde(default)]
    page_size: Option<i64>,
}

/// Query parameters for stable-index pages
#[derive(Debug, Deserialize)]
struct IndexParams {
    /// Starting position (default: 0)
    #[serde(default)]
    index: Option<i64>,
    /// Records per page (default: configured page size)
    #[serde(default)]
    page_size: Option<i64>,
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Build the router over an existing paginator
pub fn router<P: DatasetProvider + 'static>(
    paginator: Paginator<P>,
    config: PagerConfig,
) -> Router {
    let state = AppState { config, paginator };

    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/page", get(get_page::<P>))
        .route("/hyper", get(get_hyper::<P>))
        .route("/hyper_index", get(get_hyper_index::<P>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig, port: u16) -> Result<()> {
    let pager = config.pager;
    let paginator = preload(&pager).await?;

    let app = router(paginator, pager);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to port {port}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Load the configured dataset up front so a bad data file fails at
/// startup, not on the first request
pub async fn preload(config: &PagerConfig) -> Result<Paginator<CsvFileProvider>> {
    let paginator = Paginator::new(CsvFileProvider::from_config(config));

    let (paginator, records) = run_blocking(move || {
        let records = paginator.dataset()?.len();
        Ok((paginator, records))
    })
    .await?;
    tracing::info!("Loaded {} records from {}", records, config.data_file.display());

    Ok(paginator)
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Range page endpoint
async fn get_page<P: DatasetProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    params: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejection_response(&rejection),
    };

    respond(
        run_blocking(move || {
            let page_size = page_size_or_default(params.page_size, &state.config)?;
            state
                .paginator
                .get_page(params.page.unwrap_or(1), page_size)
        })
        .await,
    )
}

/// Range page with navigation endpoint
async fn get_hyper<P: DatasetProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    params: std::result::Result<Query<PageParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejection_response(&rejection),
    };

    respond(
        run_blocking(move || {
            let page_size = page_size_or_default(params.page_size, &state.config)?;
            state
                .paginator
                .get_hyper(params.page.unwrap_or(1), page_size)
        })
        .await,
    )
}

/// Stable-index page endpoint
async fn get_hyper_index<P: DatasetProvider + 'static>(
    State(state): State<Arc<AppState<P>>>,
    params: std::result::Result<Query<IndexParams>, QueryRejection>,
) -> Response {
    let Query(params) = match params {
        Ok(params) => params,
        Err(rejection) => return rejection_response(&rejection),
    };

    respond(
        run_blocking(move || {
            let page_size = page_size_or_default(params.page_size, &state.config)?;
            state.paginator.get_hyper_index(params.index, page_size)
        })
        .await,
    )
}

/// Resolve the page size for a request and enforce the configured ceiling
fn page_size_or_default(page_size: Option<i64>, config: &PagerConfig) -> Result<i64> {
    let page_size =
        page_size.unwrap_or_else(|| i64::try_from(config.default_page_size).unwrap_or(i64::MAX));
    config.check_page_size(page_size)?;
    Ok(page_size)
}

/// Run paginator work off the async runtime; the first call may read the dataset file
async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Other(format!("Pagination task failed: {e}")))?
}

fn respond<T: Serialize>(result: Result<T>) -> Response {
    match result {
        Ok(data) => (StatusCode::OK, Json(ApiResponse::success(data))).into_response(),
        Err(e) if e.is_client_error() => {
            tracing::warn!("Rejected request: {}", e);
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}

fn rejection_response(rejection: &QueryRejection) -> Response {
    tracing::warn!("Rejected query string: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(rejection.body_text())),
    )
        .into_response()
}
