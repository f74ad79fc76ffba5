use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{AppState, catalog, templates};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

pub async fn index(
    State(state): State<Arc<AppState>>,
    Query(search): Query<SearchQuery>,
) -> Html<String> {
    let snap = state.catalog.snapshot();
    let filtered = catalog::filter_by_title(&snap.movies, &search.q);
    Html(templates::index_page(&filtered, &search.q, &snap.status))
}

pub async fn movie_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Query(search): Query<SearchQuery>,
) -> Response {
    let snap = state.catalog.snapshot();
    match snap.movies.iter().find(|movie| movie.id == id) {
        Some(movie) => Html(templates::detail_page(movie, &search.q)).into_response(),
        None => {
            (StatusCode::NOT_FOUND, Html(templates::not_found_page(id))).into_response()
        },
    }
}

pub async fn refresh(State(state): State<Arc<AppState>>) -> Redirect {
    state.catalog.refresh().await;
    Redirect::to("/")
}
