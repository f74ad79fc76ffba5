use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One page of the top-rated listing as returned by TMDB.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MoviePage {
    pub page: i32,
    pub results: Vec<Movie>,
    pub total_pages: i32,
    pub total_results: i32,
}

/// One movie as returned by TMDB. Every field is required: a response
/// missing any of them fails decoding as a whole.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub original_title: String,
    pub original_language: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: String,
    pub backdrop_path: String,
    pub release_date: String,
    pub vote_average: f64,
    pub vote_count: i32,
    pub adult: bool,
    pub video: bool,
    pub genre_ids: Vec<i32>,
}

impl Movie {
    /// Vote average rounded to one decimal for the card badge.
    pub fn rating_badge(&self) -> String {
        format!("{:.1}", self.vote_average)
    }

    /// Release date formatted for display. TMDB sends `YYYY-MM-DD`; anything
    /// that does not parse is shown as-is.
    pub fn release_date_display(&self) -> String {
        match self.release_date.parse::<Date>() {
            Ok(date) => date.strftime("%d/%m/%Y").to_string(),
            Err(_) => self.release_date.clone(),
        }
    }
}

/// Fetch status published alongside the movie list, so pages can show a
/// spinner, a failure reason with a retry control, or the last update time.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Loaded { fetched_at: jiff::Timestamp },
    Failed { reason: String },
}
