use sqlx::SqlitePool;

use crate::forms::ShowInput;
use crate::models::{Show, ShowListing};
use crate::utils::error::AppError;

pub async fn list(pool: &SqlitePool) -> Result<Vec<ShowListing>, AppError> {
    Ok(sqlx::query_as::<_, ShowListing>(
        "SELECT v.id AS venue_id, v.name AS venue_name,
                a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await?)
}

/// Inserts a show; a venue or artist id with no matching row fails on the foreign key.
pub async fn create(pool: &SqlitePool, input: &ShowInput) -> Result<Show, AppError> {
    let mut tx = pool.begin().await?;
    let show = sqlx::query_as::<_, Show>(
        "INSERT INTO shows (venue_id, artist_id, start_time)
         VALUES (?, ?, ?)
         RETURNING id, venue_id, artist_id, start_time",
    )
    .bind(input.venue_id)
    .bind(input.artist_id)
    .bind(input.start_time)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;

    tracing::info!(show_id = show.id, venue_id = show.venue_id, artist_id = show.artist_id, "Show created");
    Ok(show)
}
