use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{Candidate, MovieDetails},
};

const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    search_url: String,
    details_url: String,
}

impl TmdbClient {
    pub fn new(
        client: reqwest::Client,
        api_key: String,
        search_url: String,
        details_url: String,
    ) -> Self {
        Self { client, api_key, search_url, details_url }
    }

    /// Free-text title search. One blocking round-trip, no retry.
    pub async fn search(&self, title: &str) -> AppResult<Vec<Candidate>> {
        let body = self
            .client
            .get(self.search_url.trim_end_matches('/'))
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await
            .map_err(AppError::Upstream)?
            .error_for_status()
            .map_err(AppError::Upstream)?
            .text()
            .await
            .map_err(AppError::Upstream)?;

        parse_search(&body)
    }

    pub async fn fetch_details(&self, id: i32) -> AppResult<MovieDetails> {
        let url = format!("{}/{}", self.details_url.trim_end_matches('/'), id);
        let body = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(AppError::Upstream)?
            .error_for_status()
            .map_err(AppError::Upstream)?
            .text()
            .await
            .map_err(AppError::Upstream)?;

        parse_details(&body)
    }
}

// The search endpoint usually wraps hits in `{"results": [...]}` but has
// been observed returning a bare array; both shapes normalize to one
// candidate list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Results { results: Vec<SearchEntry> },
    RawList(Vec<SearchEntry>),
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    id: i32,
    original_title: Option<String>,
    title: Option<String>,
    release_date: Option<String>,
    overview: Option<String>,
}

fn parse_search(body: &str) -> AppResult<Vec<Candidate>> {
    let resp: SearchResponse = serde_json::from_str(body)
        .map_err(|e| AppError::BadResponse(format!("search payload: {e}")))?;

    let entries = match resp {
        SearchResponse::Results { results } => results,
        SearchResponse::RawList(list) => list,
    };

    Ok(entries
        .into_iter()
        .map(|e| Candidate {
            id: e.id,
            title: e.original_title.or(e.title).unwrap_or_default(),
            release_date: e.release_date,
            overview: e.overview,
        })
        .collect())
}

#[derive(Debug, Deserialize)]
struct DetailsEntry {
    id: i32,
    original_title: String,
    release_date: String,
    overview: String,
    backdrop_path: String,
}

fn parse_details(body: &str) -> AppResult<MovieDetails> {
    let entry: DetailsEntry = serde_json::from_str(body)
        .map_err(|e| AppError::BadResponse(format!("details payload: {e}")))?;

    Ok(MovieDetails {
        id: entry.id,
        title: entry.original_title,
        release_date: entry.release_date,
        overview: entry.overview,
        img_url: format!("{IMAGE_BASE}{}", entry.backdrop_path),
    })
}
