use std::net::SocketAddr;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub api_key: String,
    pub details_url: String,
    pub search_url: String,
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().context("PORT")?;

        let api_key = std::env::var("MOVIE_API_KEY").context("MOVIE_API_KEY")?;
        let details_url = std::env::var("MOVIE_API")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3/movie".to_string());
        let search_url = std::env::var("API_SEARCH_ENDPOINT")
            .unwrap_or_else(|_| "https://api.themoviedb.org/3/search/movie".to_string());

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            api_key,
            details_url,
            search_url,
            database_url,
        })
    }
}
