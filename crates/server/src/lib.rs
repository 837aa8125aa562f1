//! HTTP surface of the asset viewer.
//!
//! | route               | response                                   |
//! |---------------------|--------------------------------------------|
//! | `/`, `/index.html`  | viewer page                                |
//! | `/api/assets`       | `[AssetRecord]` JSON, freshly scanned      |
//! | `/asset-list`       | every file path plus the base directory    |
//! | `/assets/{*path}`   | asset bytes                                |

pub mod browser;
mod cors;
pub mod error;
pub mod files;
pub mod page;

use asset_viewer_api::{AssetRecord, RendererRegistry};
use asset_viewer_core::{AssetCatalog, Result, ViewerConfig, ViewerError};
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, middleware};
use error::HandlerError;
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    catalog: Arc<AssetCatalog>,
    page: Arc<str>,
}

impl AppState {
    /// `assets_dir` should be canonical; it is canonicalized here when it
    /// exists so that served paths and symlink checks agree.
    pub fn new(assets_dir: &std::path::Path, renderers: &RendererRegistry) -> Self {
        let base = assets_dir
            .canonicalize()
            .unwrap_or_else(|_| assets_dir.to_path_buf());
        Self {
            catalog: Arc::new(AssetCatalog::new(base)),
            page: page::render_page(renderers).into(),
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }
}

/// Legacy listing: every file, relative, plus the directory it came from.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AssetListing {
    assets: Vec<String>,
    base_path: String,
}

pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Router {
    let router = Router::new()
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/api/assets", get(list_assets))
        .route("/asset-list", get(list_asset_paths))
        .route("/assets/{*path}", get(serve_asset))
        .fallback(fallback)
        .with_state(state);

    match cors_origin {
        Some(origin) => router.layer(middleware::from_fn_with_state(
            Arc::<str>::from(origin),
            cors::cors,
        )),
        None => router,
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.page.to_string())
}

async fn list_assets(
    State(state): State<AppState>,
) -> std::result::Result<Response, HandlerError> {
    let catalog = state.catalog.clone();
    let records: Vec<AssetRecord> = tokio::task::spawn_blocking(move || catalog.list()).await??;

    Ok(([(header::CACHE_CONTROL, "no-store")], Json(records)).into_response())
}

async fn list_asset_paths(
    State(state): State<AppState>,
) -> std::result::Result<Response, HandlerError> {
    let catalog = state.catalog.clone();
    let assets = tokio::task::spawn_blocking(move || catalog.list_relative_paths()).await??;

    let listing = AssetListing {
        assets,
        base_path: state.catalog.base_dir().to_string_lossy().into_owned(),
    };
    Ok(([(header::CACHE_CONTROL, "no-store")], Json(listing)).into_response())
}

async fn serve_asset(State(state): State<AppState>, Path(path): Path<String>) -> Response {
    debug!("Static asset request => {}", path);
    files::serve_file(state.catalog.base_dir(), &path).await
}

async fn fallback() -> Response {
    files::not_found()
}

/// Serve on an already bound listener until `cancel_token` fires.
pub async fn serve(
    listener: TcpListener,
    config: &ViewerConfig,
    renderers: &RendererRegistry,
    cancel_token: CancellationToken,
) -> Result<()> {
    let state = AppState::new(config.assets_dir(), renderers);
    info!("Serving assets from: {}", state.catalog.base_dir().display());

    let app = build_router(state, config.cors_origin());

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .map_err(|e| ViewerError::Server(e.to_string()))
}

/// Bind the configured address, optionally open a browser, and serve.
pub async fn run_server(
    config: &ViewerConfig,
    renderers: &RendererRegistry,
    cancel_token: CancellationToken,
) -> Result<()> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ViewerError::Server(format!("failed to bind {}: {}", addr, e)))?;
    info!("Asset viewer running: {}", config.url());

    if config.open() {
        let url = config.url();
        tokio::task::spawn_blocking(move || browser::open_browser(&url));
    }

    serve(listener, config, renderers, cancel_token).await
}
