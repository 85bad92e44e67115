use chrono::NaiveDateTime;
use sqlx::SqlitePool;

use crate::forms::ArtistInput;
use crate::models::artist::VenueShow;
use crate::models::{join_genres, Artist, ArtistDetail, ArtistSummary, SearchHit, SearchResults};
use crate::utils::error::AppError;

pub async fn list(pool: &SqlitePool) -> Result<Vec<ArtistSummary>, AppError> {
    Ok(
        sqlx::query_as::<_, ArtistSummary>("SELECT id, name FROM artists ORDER BY id")
            .fetch_all(pool)
            .await?,
    )
}

/// Names containing `term`, compared after Unicode lowercasing on both sides.
pub async fn search(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults, AppError> {
    let hits = sqlx::query_as::<_, SearchHit>(
        "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
         FROM artists a
         ORDER BY a.id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(SearchResults::matching(hits, term))
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Artist, AppError> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {id} was not found")))
}

pub async fn detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<ArtistDetail, AppError> {
    let artist = find(pool, id).await?;
    let shows = sqlx::query_as::<_, VenueShow>(
        "SELECT v.id AS venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(ArtistDetail::new(artist, shows, now))
}

pub async fn create(pool: &SqlitePool, input: &ArtistInput) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;
    let id = sqlx::query(
        "INSERT INTO artists
             (name, city, state, phone, genres, image_link, facebook_link, website,
              seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(join_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();
    tx.commit().await?;

    tracing::info!(artist_id = id, name = %input.name, "Artist created");
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE artists
         SET name = ?, city = ?, state = ?, phone = ?, genres = ?, image_link = ?,
             facebook_link = ?, website = ?, seeking_venue = ?, seeking_description = ?
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(join_genres(&input.genres))
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Artist {id} was not found")));
    }
    tx.commit().await?;

    tracing::info!(artist_id = id, "Artist updated");
    Ok(())
}
