pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
pub mod templates;
pub mod tmdb;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{config::Config, store::MovieStore, tmdb::TmdbClient};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: MovieStore,
    pub tmdb: Arc<TmdbClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/edit/{id}", get(routes::edit_page).post(routes::edit_submit))
        .route("/delete", get(routes::delete))
        .route("/add", get(routes::add_page).post(routes::add_submit))
        .route("/movie/{id}", get(routes::pick_movie))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
