use std::sync::Arc;

use axum::{
    extract::{Form, Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::AppResult,
    models::{AddForm, EditForm},
    store::NewMovie,
    templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_all().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?;
    Ok(Html(templates::edit_page(&movie, None)))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let rating = match form.parse_rating() {
        Ok(rating) => rating,
        Err(msg) => {
            let movie = state.store.get(id).await?;
            return Ok(Html(templates::edit_page(&movie, Some(&msg))).into_response());
        }
    };

    state.store.update_review(id, rating, form.review).await?;
    Ok(redirect_found("/"))
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub id: i32,
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<DeleteQuery>,
) -> AppResult<Response> {
    state.store.delete(q.id).await?;
    Ok(redirect_found("/"))
}

pub async fn add_page() -> Html<String> {
    Html(templates::add_page(None))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = match form.title() {
        Ok(title) => title,
        Err(msg) => return Ok(Html(templates::add_page(Some(&msg)))),
    };

    let candidates = state.tmdb.search(title).await?;
    Ok(Html(templates::select_page(title, &candidates)))
}

/// Persists the picked search candidate with placeholder rating/review and
/// sends the user straight to the edit form to rate it.
pub async fn pick_movie(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Response> {
    let details = state.tmdb.fetch_details(id).await?;
    let movie = state
        .store
        .create(NewMovie {
            id: details.id,
            title: details.title,
            year: details.release_date,
            description: details.overview,
            img_url: details.img_url,
        })
        .await?;

    Ok(redirect_found(&format!("/edit/{}", movie.id)))
}

fn redirect_found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
