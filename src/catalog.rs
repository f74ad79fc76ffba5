use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    error::FetchError,
    models::{CatalogStatus, Movie, MoviePage},
    tmdb::TmdbClient,
};

/// What subscribers observe: the current list plus the fetch status. The
/// list is behind an `Arc` so handlers can hold it without copying movies.
#[derive(Clone, Debug)]
pub struct CatalogSnapshot {
    pub movies: Arc<Vec<Movie>>,
    pub status: CatalogStatus,
}

/// In-process catalog of top-rated movies, published through a watch
/// channel. Fetches run off the serving path and replace the list
/// wholesale, so a reader sees either the old page or the new one, never a
/// partially-decoded mix. On failure the previous list stays up and only
/// the status changes.
#[derive(Clone)]
pub struct Catalog {
    tx: watch::Sender<CatalogSnapshot>,
    tmdb: Arc<TmdbClient>,
    language: String,
}

impl Catalog {
    pub fn new(tmdb: Arc<TmdbClient>, language: String) -> Self {
        let (tx, _) = watch::channel(CatalogSnapshot {
            movies: Arc::new(Vec::new()),
            status: CatalogStatus::Loading,
        });
        Self { tx, tmdb, language }
    }

    /// Current list and status without waiting for a change.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver for consumers that want to be woken on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.tx.subscribe()
    }

    /// The one fetch issued at startup.
    pub fn spawn_initial_fetch(&self) {
        let catalog = self.clone();
        tokio::spawn(async move { catalog.refresh().await });
    }

    /// Re-read page 1 of the top-rated listing and publish the outcome.
    pub async fn refresh(&self) {
        self.tx.send_modify(|snap| snap.status = CatalogStatus::Loading);
        let result = self.tmdb.top_rated(&self.language, 1).await;
        self.apply(result);
    }

    fn apply(&self, result: Result<MoviePage, FetchError>) {
        match result {
            Ok(page) => {
                info!(
                    page = page.page,
                    total_pages = page.total_pages,
                    movies = page.results.len(),
                    "catalog updated"
                );
                self.tx.send_replace(CatalogSnapshot {
                    movies: Arc::new(page.results),
                    status: CatalogStatus::Loaded { fetched_at: jiff::Timestamp::now() },
                });
            },
            Err(err) => {
                warn!(error = %err, "fetch failed, keeping previous catalog");
                self.tx.send_modify(|snap| {
                    snap.status = CatalogStatus::Failed { reason: err.to_string() };
                });
            },
        }
    }
}

/// Case-insensitive substring filter over titles. An empty query is the
/// whole list, order untouched.
pub fn filter_by_title<'a>(movies: &'a [Movie], query: &str) -> Vec<&'a Movie> {
    if query.is_empty() {
        return movies.iter().collect();
    }
    let needle = query.to_lowercase();
    movies.iter().filter(|movie| movie.title.to_lowercase().contains(&needle)).collect()
}
