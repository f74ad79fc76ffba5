use maud::{DOCTYPE, Markup, html};

use crate::{
    genres,
    models::{CatalogStatus, Movie},
};

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";
const IMAGE_BASE: &str = "https://image.tmdb.org/t/p/original";

// Poster placeholder swapped in when the TMDB image fails to load.
const FALLBACK_POSTER: &str = "data:image/svg+xml,%3Csvg%20xmlns=%27http://www.w3.org/2000/svg%27%20viewBox=%270%200%202%203%27%3E%3Crect%20width=%272%27%20height=%273%27%20fill=%27%23e5e7eb%27/%3E%3C/svg%3E";

pub fn index_page(movies: &[&Movie], query: &str, status: &CatalogStatus) -> String {
    page(
        "Cartelera",
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-4xl mx-auto px-6 py-10" {
                    div class="flex items-start justify-between gap-6" {
                        div {
                            h1 class="text-3xl font-bold text-gray-900" { "🎬 Cartelera" }
                            p class="mt-2 text-gray-600" { "Películas mejor valoradas" }
                        }
                        form method="post" action="/refresh" {
                            button class="rounded-md bg-blue-600 px-4 py-2 text-sm font-semibold text-white hover:bg-blue-700" type="submit" { "Actualizar" }
                        }
                    }

                    form class="mt-6" method="get" action="/" {
                        input class="w-full rounded-md border border-gray-300 px-3 py-2 focus:border-blue-500 focus:outline-none focus:ring-1 focus:ring-blue-500" type="search" name="q" value=(query) placeholder="Buscar película";
                    }

                    (status_banner(status))

                    @if movies.is_empty() {
                        div class="mt-8 bg-white shadow rounded-lg p-8" {
                            @if query.is_empty() {
                                p class="text-gray-600" { "No hay películas que mostrar." }
                            } @else {
                                p class="text-gray-600" { "Sin resultados para «" (query) "»." }
                            }
                        }
                    } @else {
                        div class="mt-8 grid grid-cols-2 gap-5" {
                            @for movie in movies {
                                (movie_card(movie, query))
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail_page(movie: &Movie, back_query: &str) -> String {
    let back_href = if back_query.is_empty() {
        "/".to_string()
    } else {
        format!("/?q={}", urlencoding::encode(back_query))
    };

    page(
        &movie.title,
        html! {
            div class="min-h-screen bg-gray-50" {
                div class="max-w-2xl mx-auto px-6 py-10" {
                    a class="text-sm text-blue-600 hover:text-blue-800" href=(back_href) { "← Volver" }

                    div class="mt-4 bg-white shadow rounded-lg overflow-hidden" {
                        img class="w-full max-h-[28rem] object-cover" src=(poster_url(&movie.poster_path)) alt=(movie.title) onerror=(onerror_fallback());

                        div class="p-6" {
                            div class="flex items-center gap-2" {
                                h1 class="text-2xl font-medium text-gray-900" { (movie.title) }
                                span class="text-yellow-500" { "★ " (movie.rating_badge()) }
                            }
                            @if movie.original_title != movie.title {
                                p class="mt-1 text-sm text-gray-500" { "Título original: " (movie.original_title) }
                            }
                            p class="mt-2 text-sm font-medium text-red-700" { (movie.release_date_display()) }

                            h2 class="mt-6 text-sm font-semibold text-gray-500" { "Sinopsis" }
                            p class="mt-2 text-sm text-gray-700" { (movie.overview) }

                            h2 class="mt-6 text-sm font-semibold text-gray-500" { "Categorías" }
                            div class="mt-2 flex flex-wrap gap-2" {
                                @for genre in genres::badges(&movie.genre_ids) {
                                    span class="rounded-lg bg-gray-200 px-2 py-1 text-xs text-gray-700" { (genre.name) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn not_found_page(id: i32) -> String {
    page(
        "Película no encontrada",
        html! {
            div class="min-h-screen bg-gray-50 flex items-center justify-center" {
                div class="max-w-xl w-full px-6" {
                    div class="bg-white shadow rounded-lg p-8" {
                        h1 class="text-2xl font-bold text-gray-900" { "Película no encontrada" }
                        p class="mt-4 text-gray-700" { "Ninguna película de la cartelera tiene el identificador " (id) "." }
                        a class="mt-6 inline-block text-blue-600 hover:text-blue-800" href="/" { "Volver" }
                    }
                }
            }
        },
    )
}

fn page(title: &str, body: Markup) -> String {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src=(TAILWIND_CDN) {}
            }
            body { (body) }
        }
    }
    .into_string()
}

fn movie_card(movie: &Movie, query: &str) -> Markup {
    let href = if query.is_empty() {
        format!("/movie/{}", movie.id)
    } else {
        format!("/movie/{}?q={}", movie.id, urlencoding::encode(query))
    };

    html! {
        a class="relative block bg-white shadow rounded-lg p-4 hover:shadow-md" href=(href) {
            img class="w-full rounded-md object-cover" src=(poster_url(&movie.poster_path)) alt=(movie.title) loading="lazy" onerror=(onerror_fallback());

            span class="absolute top-2 right-2 flex h-8 w-8 items-center justify-center rounded-full bg-red-700 text-xs font-medium text-white" {
                (movie.rating_badge())
            }

            p class="mt-3 text-sm text-gray-900" { (movie.title) }

            @if let Some(genre) = genres::first_badge(&movie.genre_ids) {
                span class="mt-1 inline-block rounded-lg bg-gray-200 px-2 py-1 text-xs text-gray-700" { (genre.name) }
            }
        }
    }
}

fn status_banner(status: &CatalogStatus) -> Markup {
    match status {
        CatalogStatus::Loading => html! {
            div class="mt-6 flex items-center gap-3 rounded-lg bg-white shadow p-4" {
                div class="h-5 w-5 rounded-full border-2 border-blue-200 border-t-blue-600 animate-spin" {}
                p class="text-sm text-gray-600" { "Cargando películas..." }
            }
        },
        CatalogStatus::Failed { reason } => html! {
            div class="mt-6 rounded-lg border-l-4 border-red-600 bg-white shadow p-4" {
                p class="text-sm font-semibold text-gray-900" { "No se pudo actualizar la cartelera" }
                p class="mt-1 text-sm text-gray-600" { (reason) }
                form class="mt-3" method="post" action="/refresh" {
                    button class="rounded-md bg-red-600 px-3 py-1.5 text-sm font-semibold text-white hover:bg-red-700" type="submit" { "Reintentar" }
                }
            }
        },
        CatalogStatus::Loaded { fetched_at } => html! {
            p class="mt-4 text-xs text-gray-400" {
                "Actualizado a las " (fetched_at.strftime("%H:%M")) " UTC"
            }
        },
    }
}

fn poster_url(path: &str) -> String {
    format!("{}/{}", IMAGE_BASE, path.trim_start_matches('/'))
}

fn onerror_fallback() -> String {
    format!("this.onerror=null;this.src='{FALLBACK_POSTER}'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn movie(title: &str, genre_ids: Vec<i32>) -> Movie {
        Movie {
            id: 27205,
            title: title.to_string(),
            original_title: "Inception".to_string(),
            original_language: "en".to_string(),
            overview: "Dom Cobb es un ladrón especializado en el arte de la extracción.".to_string(),
            popularity: 20.0,
            poster_path: "/xymM5aW6MDcH5AR9I3CamSegJd8.jpg".to_string(),
            backdrop_path: "/8ZTVqvKDQ8emSGUEMjsS4yHAwrp.jpg".to_string(),
            release_date: "2010-07-16".to_string(),
            vote_average: 8.369,
            vote_count: 37000,
            adult: false,
            video: false,
            genre_ids,
        }
    }

    #[test]
    fn poster_url_joins_with_and_without_leading_slash() {
        assert_eq!(
            poster_url("/abc.jpg"),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
        assert_eq!(
            poster_url("abc.jpg"),
            "https://image.tmdb.org/t/p/original/abc.jpg"
        );
    }

    #[test]
    fn index_shows_cards_with_rating_and_first_genre_only() {
        let inception = movie("Origen", vec![28, 878]);
        let status = CatalogStatus::Loaded { fetched_at: Timestamp::UNIX_EPOCH };
        let html = index_page(&[&inception], "", &status);

        assert!(html.contains("Origen"));
        assert!(html.contains("8.4"));
        assert!(html.contains("Acción"));
        assert!(!html.contains("Ciencia ficción"));
        assert!(html.contains("/movie/27205"));
    }

    #[test]
    fn index_preserves_query_in_card_links() {
        let inception = movie("Origen", vec![28]);
        let status = CatalogStatus::Loaded { fetched_at: Timestamp::UNIX_EPOCH };
        let html = index_page(&[&inception], "ori gen", &status);
        assert!(html.contains("/movie/27205?q=ori%20gen"));
    }

    #[test]
    fn failed_status_renders_reason_and_retry() {
        let status = CatalogStatus::Failed { reason: "empty response body".to_string() };
        let html = index_page(&[], "", &status);
        assert!(html.contains("empty response body"));
        assert!(html.contains("Reintentar"));
        assert!(html.contains("/refresh"));
    }

    #[test]
    fn detail_renders_every_resolvable_genre() {
        let inception = movie("Origen", vec![28, 878, 424242]);
        let html = detail_page(&inception, "");

        assert!(html.contains("Acción"));
        assert!(html.contains("Ciencia ficción"));
        assert!(html.contains("Sinopsis"));
        assert!(html.contains("16/07/2010"));
        assert!(html.contains("Título original: Inception"));
    }

    #[test]
    fn not_found_names_the_id() {
        let html = not_found_page(999);
        assert!(html.contains("999"));
        assert!(html.contains("Película no encontrada"));
    }
}
