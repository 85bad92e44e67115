pub mod artist;
pub mod show;
pub mod venue;

pub use artist::{Artist, ArtistDetail, ArtistSummary};
pub use show::{Show, ShowListing};
pub use venue::{Venue, VenueArea, VenueDetail, VenueSummary};

use serde::Serialize;
use sqlx::FromRow;

/// Separator used to store a genre set in a single text column.
pub const GENRE_SEPARATOR: char = ',';

pub fn join_genres(genres: &[String]) -> String {
    genres.join(&GENRE_SEPARATOR.to_string())
}

pub fn split_genres(stored: &str) -> Vec<String> {
    stored
        .split(GENRE_SEPARATOR)
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// One row of a name search, for either venues or artists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct SearchHit {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

impl SearchResults {
    /// Keeps the hits whose name contains `term`, ignoring case in any script.
    pub fn matching(hits: Vec<SearchHit>, term: &str) -> Self {
        let needle = term.to_lowercase();
        hits.into_iter()
            .filter(|hit| hit.name.to_lowercase().contains(&needle))
            .collect::<Vec<_>>()
            .into()
    }
}

impl From<Vec<SearchHit>> for SearchResults {
    fn from(data: Vec<SearchHit>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
