//! Site server implementation.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use tower::ServiceExt;
use tower_http::{services::ServeDir, trace::TraceLayer};

use trevarn_catalog::{discover_pages, Catalog, Language, PageEntry, ScanError};
use trevarn_render::render_index;

use crate::cache::ScanCache;
use crate::routes::Route;
use crate::watcher::FileWatcher;

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Directory holding the brand documents and assets
    pub root: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Cache scan results until the directory changes
    pub cache: bool,

    /// Open browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            port: 8080,
            host: "0.0.0.0".to_string(),
            cache: false,
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(String, String),

    #[error("Server error: {0}")]
    ServeError(String),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("Scan task failed: {0}")]
    Task(String),
}

/// State shared by every request.
pub struct SiteState {
    root: PathBuf,
    catalog: Arc<Catalog>,
    cache: Option<ScanCache>,
    static_files: ServeDir,
}

impl SiteState {
    /// State that rescans the directory on every index request.
    pub fn new(root: PathBuf, catalog: Arc<Catalog>) -> Self {
        let static_files = ServeDir::new(&root).append_index_html_on_directories(false);

        Self {
            root,
            catalog,
            cache: None,
            static_files,
        }
    }

    /// Keep scan results until [`ScanCache::invalidate`] is called.
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(ScanCache::new());
        self
    }

    pub fn cache(&self) -> Option<&ScanCache> {
        self.cache.as_ref()
    }

    /// Ordered pages for `lang`, from the cache or a fresh scan.
    pub async fn pages(&self, lang: Language) -> Result<Arc<Vec<PageEntry>>, ServerError> {
        let generation = match &self.cache {
            Some(cache) => {
                if let Some(pages) = cache.get(lang).await {
                    return Ok(pages);
                }
                Some(cache.generation().await)
            }
            None => None,
        };

        let root = self.root.clone();
        let catalog = Arc::clone(&self.catalog);
        let pages = tokio::task::spawn_blocking(move || discover_pages(&root, lang, &catalog))
            .await
            .map_err(|e| ServerError::Task(e.to_string()))??;
        let pages = Arc::new(pages);

        if let (Some(cache), Some(generation)) = (&self.cache, generation) {
            cache.insert(lang, generation, Arc::clone(&pages)).await;
        }

        Ok(pages)
    }

    /// Render the index page for `lang`.
    pub async fn index_html(&self, lang: Language) -> Result<String, ServerError> {
        let pages = self.pages(lang).await?;
        Ok(render_index(lang, &pages, &self.catalog))
    }
}

/// Build the request router over shared state.
pub fn router(state: Arc<SiteState>) -> Router {
    Router::new()
        .fallback(dispatch)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Site server.
pub struct SiteServer {
    config: SiteServerConfig,
    catalog: Arc<Catalog>,
}

impl SiteServer {
    /// Create a new site server.
    pub fn new(config: SiteServerConfig, catalog: Catalog) -> Self {
        Self {
            config,
            catalog: Arc::new(catalog),
        }
    }

    /// Bind the configured host and port. The host may be a name.
    pub async fn bind(&self) -> Result<tokio::net::TcpListener, ServerError> {
        let host = self.config.host.as_str();
        tokio::net::TcpListener::bind((host, self.config.port))
            .await
            .map_err(|e| {
                ServerError::BindError(format!("{}:{}", host, self.config.port), e.to_string())
            })
    }

    /// Start the server and run until Ctrl+C.
    pub async fn start(self) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        let addr = listener
            .local_addr()
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        let mut state = SiteState::new(self.config.root.clone(), Arc::clone(&self.catalog));

        let mut watch = None;
        if self.config.cache {
            match FileWatcher::new(&self.config.root) {
                Ok(pair) => {
                    state = state.with_cache();
                    watch = Some(pair);
                }
                Err(e) => {
                    tracing::warn!("File watch error: {}; serving without scan cache", e);
                }
            }
        }

        let state = Arc::new(state);

        // Spawn cache invalidation handler
        if let Some((watcher, mut rx)) = watch {
            let state = Arc::clone(&state);
            tokio::spawn(async move {
                while let Some(event) = rx.recv().await {
                    tracing::debug!(
                        "{} changed, invalidating scan cache",
                        event.path().display()
                    );
                    if let Some(cache) = state.cache() {
                        cache.invalidate().await;
                    }
                }
                // Keep watcher alive
                drop(watcher);
            });
        }

        let app = router(Arc::clone(&state));

        tracing::info!(
            "Serving {} at http://{}",
            self.config.root.display(),
            addr
        );

        // Open browser if configured
        if self.config.open {
            let url = format!("http://localhost:{}/", addr.port());
            let _ = open::that(&url);
        }

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ServerError::ServeError(e.to_string()))?;

        tracing::info!("Server stopped");

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

/// Single entry point for every request.
async fn dispatch(State(state): State<Arc<SiteState>>, req: Request) -> Response {
    match Route::classify(req.uri().path()) {
        Route::Index(lang) => {
            if !matches!(*req.method(), Method::GET | Method::HEAD) {
                return StatusCode::METHOD_NOT_ALLOWED.into_response();
            }
            index_response(&state, lang).await
        }
        Route::Static(path) => static_response(&state, req, &path).await,
    }
}

async fn index_response(state: &SiteState, lang: Language) -> Response {
    match state.index_html(lang).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Failed to render {} index: {}", lang, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Point `uri` at `path`, keeping its query string.
fn rewrite_uri(uri: &Uri, path: &str) -> Result<Uri, axum::http::uri::InvalidUri> {
    match uri.query() {
        Some(query) => format!("{}?{}", path, query).parse(),
        None => path.parse(),
    }
}

async fn static_response(state: &SiteState, mut req: Request, path: &str) -> Response {
    if req.uri().path() != path {
        match rewrite_uri(req.uri(), path) {
            Ok(uri) => {
                tracing::debug!("Rewriting {} to {}", req.uri(), uri);
                *req.uri_mut() = uri;
            }
            Err(_) => return StatusCode::BAD_REQUEST.into_response(),
        }
    }

    match state.static_files.clone().oneshot(req).await {
        Ok(res) => res.into_response(),
        Err(never) => match never {},
    }
}
