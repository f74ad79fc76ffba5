//! Static TMDB genre table with Spanish display names.
//!
//! Loaded once into the binary, never mutated, shared freely across
//! handlers. Saves a second API round-trip per movie just to label badges.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: &'static str,
}

pub const GENRES: [Genre; 19] = [
    Genre { id: 28, name: "Acción" },
    Genre { id: 12, name: "Aventura" },
    Genre { id: 16, name: "Animación" },
    Genre { id: 35, name: "Comedia" },
    Genre { id: 80, name: "Crimen" },
    Genre { id: 99, name: "Documental" },
    Genre { id: 18, name: "Drama" },
    Genre { id: 10751, name: "Familia" },
    Genre { id: 14, name: "Fantasía" },
    Genre { id: 36, name: "Historia" },
    Genre { id: 27, name: "Terror" },
    Genre { id: 10402, name: "Música" },
    Genre { id: 9648, name: "Misterio" },
    Genre { id: 10749, name: "Romance" },
    Genre { id: 878, name: "Ciencia ficción" },
    Genre { id: 10770, name: "Película de TV" },
    Genre { id: 53, name: "Suspense" },
    Genre { id: 10752, name: "Bélica" },
    Genre { id: 37, name: "Western" },
];

/// First entry in table order matching `id`. TMDB occasionally introduces
/// ids the table does not carry; callers omit the badge on `None` instead
/// of failing the page.
pub fn resolve(id: i32) -> Option<&'static Genre> {
    GENRES.iter().find(|genre| genre.id == id)
}

/// The single badge shown on a grid card: the movie's first genre id,
/// if it resolves.
pub fn first_badge(genre_ids: &[i32]) -> Option<&'static Genre> {
    genre_ids.first().and_then(|id| resolve(*id))
}

/// All resolvable badges for the detail page, unknown ids skipped.
pub fn badges(genre_ids: &[i32]) -> Vec<&'static Genre> {
    genre_ids.iter().filter_map(|id| resolve(*id)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_ids() {
        assert_eq!(resolve(28).unwrap().name, "Acción");
        assert_eq!(resolve(878).unwrap().name, "Ciencia ficción");
        assert_eq!(resolve(37).unwrap().name, "Western");
    }

    #[test]
    fn unknown_id_is_none_not_a_panic() {
        assert!(resolve(0).is_none());
        assert!(resolve(-1).is_none());
        assert!(resolve(424242).is_none());
    }

    #[test]
    fn table_ids_are_unique() {
        for (i, a) in GENRES.iter().enumerate() {
            for b in &GENRES[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate genre id {}", a.id);
            }
        }
    }

    #[test]
    fn first_badge_uses_only_the_first_id() {
        // 18 = Drama, 80 = Crimen: the card shows Drama only
        assert_eq!(first_badge(&[18, 80]).unwrap().name, "Drama");
        // an unknown first id means no badge, even if later ids resolve
        assert!(first_badge(&[424242, 18]).is_none());
        assert!(first_badge(&[]).is_none());
    }

    #[test]
    fn badges_skip_unknown_ids() {
        let names: Vec<&str> =
            badges(&[18, 424242, 10752]).iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Drama", "Bélica"]);
    }
}
