use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use zine_core::Article;
use zine_render::{ArticleStructuredData, FullView};

use crate::AppState;

pub async fn list_articles(State(state): State<Arc<AppState>>) -> Json<Vec<Article>> {
    Json(state.store.articles().to_vec())
}

pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.categories())
}

pub async fn list_tags(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.tags())
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<FullView>, StatusCode> {
    state
        .store
        .get(id)
        .map(|article| Json(FullView::project(article)))
        .ok_or(StatusCode::NOT_FOUND)
}

pub async fn get_article_seo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> Result<Json<ArticleStructuredData>, StatusCode> {
    state
        .store
        .get(id)
        .map(|article| Json(ArticleStructuredData::project(article)))
        .ok_or(StatusCode::NOT_FOUND)
}
