use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

use crate::forms::VenueInput;
use crate::models::venue::ArtistShow;
use crate::models::{join_genres, SearchHit, SearchResults, Venue, VenueArea, VenueDetail, VenueSummary};
use crate::utils::error::AppError;

#[derive(Debug, FromRow)]
struct AreaRow {
    id: i64,
    name: String,
    city: String,
    state: String,
    num_upcoming_shows: i64,
}

/// Folds rows sorted by (state, city) into one area per distinct pair.
fn group_by_area(rows: Vec<AreaRow>) -> Vec<VenueArea> {
    let mut areas: Vec<VenueArea> = Vec::new();
    for row in rows {
        let summary = VenueSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas.last_mut() {
            Some(area) if area.state == row.state && area.city == row.city => {
                area.venues.push(summary)
            }
            _ => areas.push(VenueArea {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }
    areas
}

pub async fn list_grouped(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<VenueArea>, AppError> {
    let rows = sqlx::query_as::<_, AreaRow>(
        "SELECT v.id, v.name, v.city, v.state,
                (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         ORDER BY v.state, v.city, v.id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(group_by_area(rows))
}

/// Names containing `term`, compared after Unicode lowercasing on both sides.
pub async fn search(pool: &SqlitePool, term: &str, now: NaiveDateTime) -> Result<SearchResults, AppError> {
    let hits = sqlx::query_as::<_, SearchHit>(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         ORDER BY v.id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok(SearchResults::matching(hits, term))
}

pub async fn find(pool: &SqlitePool, id: i64) -> Result<Venue, AppError> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {id} was not found")))
}

pub async fn detail(pool: &SqlitePool, id: i64, now: NaiveDateTime) -> Result<VenueDetail, AppError> {
    let venue = find(pool, id).await?;
    let shows = sqlx::query_as::<_, ArtistShow>(
        "SELECT a.id AS artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?
         ORDER BY s.start_time, s.id",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(VenueDetail::new(venue, shows, now))
}

pub async fn create(pool: &SqlitePool, input: &VenueInput) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;
    let id = sqlx::query(
        "INSERT INTO venues
             (name, city, state, address, phone, image_link, facebook_link, genres, website,
              seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(join_genres(&input.genres))
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?
    .last_insert_rowid();
    tx.commit().await?;

    tracing::info!(venue_id = id, name = %input.name, "Venue created");
    Ok(id)
}

pub async fn update(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query(
        "UPDATE venues
         SET name = ?, city = ?, state = ?, address = ?, phone = ?, image_link = ?,
             facebook_link = ?, genres = ?, website = ?, seeking_talent = ?, seeking_description = ?
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(join_genres(&input.genres))
    .bind(&input.website)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Venue {id} was not found")));
    }
    tx.commit().await?;

    tracing::info!(venue_id = id, "Venue updated");
    Ok(())
}

/// Deletes the venue and, through the foreign key, its shows. `false` when no such venue.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;
    let deleted = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    tx.commit().await?;

    tracing::info!(venue_id = id, deleted, "Venue delete");
    Ok(deleted > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, city: &str, state: &str) -> AreaRow {
        AreaRow {
            id,
            name: format!("Venue {id}"),
            city: city.into(),
            state: state.into(),
            num_upcoming_shows: id % 2,
        }
    }

    #[test]
    fn test_group_by_area() {
        let areas = group_by_area(vec![
            row(1, "San Francisco", "CA"),
            row(3, "San Francisco", "CA"),
            row(2, "New York", "NY"),
        ]);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(
            areas[0].venues.iter().map(|v| v.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(areas[1].state, "NY");
        assert_eq!(areas[1].venues[0].num_upcoming_shows, 0);
    }

    #[test]
    fn test_same_city_name_in_different_states_stays_apart() {
        let areas = group_by_area(vec![row(1, "Portland", "ME"), row(2, "Portland", "OR")]);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_group_by_area_empty() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
