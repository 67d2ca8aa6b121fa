use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod handlers;
pub mod state;
pub mod trace;

pub use state::AppState;

/// Builds the API router. All routes are reads over the immutable store;
/// CORS is permissive because the frontend is served from another origin.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/articles", get(handlers::list_articles))
        .route("/api/articles/:id", get(handlers::get_article))
        .route("/api/articles/:id/seo", get(handlers::get_article_seo))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/tags", get(handlers::list_tags))
        .layer(middleware::from_fn(trace::log_request))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Binds and serves until the process is stopped. Peer addresses are
/// attached via ConnectInfo so the logging middleware can classify them.
pub async fn serve(addr: SocketAddr, state: AppState) -> zine_core::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("🚀 Serving article feed on http://{}", addr);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use zine_core::{Article, Error, Result};
}
