#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    FilmCountByReleaseYear,
    FilmCountByGenre,
    FilmCountByMonth,
    TopDirectors,
    TopActors,
    MostRewatchedMovies,
    TotalWatched,
    TotalRated,
    TotalHours,
    Rewatches,
}

impl Endpoint {
    pub const ALL: [Self; 10] = [
        Self::FilmCountByReleaseYear,
        Self::FilmCountByGenre,
        Self::FilmCountByMonth,
        Self::TopDirectors,
        Self::TopActors,
        Self::MostRewatchedMovies,
        Self::TotalWatched,
        Self::TotalRated,
        Self::TotalHours,
        Self::Rewatches,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::FilmCountByReleaseYear => "/api/film-count-by-release-year",
            Self::FilmCountByGenre => "/api/film-count-by-genre",
            Self::FilmCountByMonth => "/api/film-count-by-month",
            Self::TopDirectors => "/api/top-directors",
            Self::TopActors => "/api/top-actors",
            Self::MostRewatchedMovies => "/api/most-rewatched-movies",
            Self::TotalWatched => "/api/stats/total-watched",
            Self::TotalRated => "/api/stats/total-rated",
            Self::TotalHours => "/api/stats/total-hours",
            Self::Rewatches => "/api/stats/rewatches",
        }
    }

    /// Only the ranked endpoints understand `?limit=`.
    pub const fn accepts_limit(self) -> bool {
        matches!(
            self,
            Self::TopDirectors | Self::TopActors | Self::MostRewatchedMovies
        )
    }

    pub fn url(self, base_url: &str, limit: Option<u32>) -> String {
        let base = base_url.trim_end_matches('/');
        match limit {
            Some(limit) if self.accepts_limit() => format!("{base}{}?limit={limit}", self.path()),
            _ => format!("{base}{}", self.path()),
        }
    }
}
