use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::header::ACCEPT;

use crate::{error::FetchError, models::{Movie, MoviePage}};

pub struct TmdbClient {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, access_token: String, base_url: String, rps: u32) -> Self {
        // Warn once on app load if using sample data
        if access_token.trim().is_empty() {
            tracing::warn!("Using sample TMDB data - no TMDB_ACCESS_TOKEN provided");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, access_token, base_url, limiter }
    }

    /// One page of `GET /movie/top_rated`. No retry: transport errors,
    /// non-2xx statuses, empty bodies and undecodable JSON all surface as
    /// a `FetchError` for the caller to publish.
    pub async fn top_rated(&self, language: &str, page: i32) -> Result<MoviePage, FetchError> {
        // Use sample data if access token is not provided
        if self.access_token.trim().is_empty() {
            return Ok(sample_page());
        }

        self.limiter.until_ready().await;

        let url = format!("{}/movie/top_rated", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json")
            .query(&[("language", language)])
            .query(&[("page", &page.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body = resp.bytes().await?;
        if body.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

/// A small built-in page so the UI is demonstrable without credentials.
fn sample_page() -> MoviePage {
    let results = vec![
        Movie {
            id: 278,
            title: "Cadena perpetua".to_string(),
            original_title: "The Shawshank Redemption".to_string(),
            original_language: "en".to_string(),
            overview: "Acusado del asesinato de su mujer, el banquero Andy Dufresne es \
                       condenado a cadena perpetua en la prisión de Shawshank."
                .to_string(),
            popularity: 26.35,
            poster_path: "/kYTrNp3bFCOE64lNqkzKJPbM81R.jpg".to_string(),
            backdrop_path: "/kXfqcdQKsToO0OUXHcrrNCHDBzO.jpg".to_string(),
            release_date: "1994-09-23".to_string(),
            vote_average: 8.7,
            vote_count: 28329,
            adult: false,
            video: false,
            genre_ids: vec![18, 80],
        },
        Movie {
            id: 238,
            title: "El padrino".to_string(),
            original_title: "The Godfather".to_string(),
            original_language: "en".to_string(),
            overview: "Don Vito Corleone es el respetado y temido jefe de una de las \
                       cinco familias de la mafia de Nueva York."
                .to_string(),
            popularity: 21.87,
            poster_path: "/kPtDeLvc7V6SnPS3VWMp8OGALbK.jpg".to_string(),
            backdrop_path: "/tmU7GeKVybMWFButWEGl2M4GeiP.jpg".to_string(),
            release_date: "1972-03-14".to_string(),
            vote_average: 8.7,
            vote_count: 21522,
            adult: false,
            video: false,
            genre_ids: vec![18, 80],
        },
        Movie {
            id: 424,
            title: "La lista de Schindler".to_string(),
            original_title: "Schindler's List".to_string(),
            original_language: "en".to_string(),
            overview: "Oskar Schindler, un hombre de enorme astucia y talento para las \
                       relaciones públicas, organiza un ambicioso plan para ganarse la \
                       simpatía de los nazis."
                .to_string(),
            popularity: 13.28,
            poster_path: "/kP6eZ1rqEOPkLoXaJJuOyUAluXO.jpg".to_string(),
            backdrop_path: "/zb6fM1CX41D9rF9hdgclu0peUmy.jpg".to_string(),
            release_date: "1993-12-15".to_string(),
            vote_average: 8.6,
            vote_count: 16434,
            adult: false,
            video: false,
            genre_ids: vec![18, 36, 10752],
        },
    ];

    MoviePage { page: 1, total_pages: 1, total_results: results.len() as i32, results }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_token_serves_sample_data_without_network() {
        let client = TmdbClient::new(
            reqwest::Client::new(),
            "".to_string(),
            "http://127.0.0.1:0".to_string(),
            4,
        );
        let page = client.top_rated("es-ES", 1).await.unwrap();
        assert_eq!(page.page, 1);
        assert!(!page.results.is_empty());
        assert!(page.results.iter().all(|m| !m.title.is_empty()));
    }

    #[test]
    fn sample_genre_ids_all_resolve() {
        for movie in sample_page().results {
            for id in movie.genre_ids {
                assert!(crate::genres::resolve(id).is_some(), "unknown genre id {id}");
            }
        }
    }
}
