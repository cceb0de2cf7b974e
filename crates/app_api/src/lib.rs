//! WebFiler HTTP API
//!
//! Request routing and the handlers behind the remote file-manager
//! client. Paths are taken from the caller as-is; there is no sandboxing
//! layer in front of the filesystem.

mod config;
mod error;
mod handlers;

pub use config::{AppConfig, LogConfig, ServerConfig};
pub use error::ApiError;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn router() -> Router {
    Router::new()
        .route(
            "/files",
            get(handlers::list_files).post(handlers::create_item),
        )
        .route(
            "/file",
            get(handlers::read_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
        .layer(TraceLayer::new_for_http())
}
