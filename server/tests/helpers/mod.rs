//! Shared fixtures for the router integration tests.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use chrono::NaiveDateTime;
use gigboard_server::routes::create_routes;
use gigboard_server::utils::flash::CLIENT_COOKIE;
use gigboard_server::{db, AppState, Clock};
use sqlx::SqlitePool;

/// Evaluation time for every test: shows before it are past, after it upcoming.
pub const NOW: &str = "2026-10-17 12:00:00";

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("test timestamp")
}

pub fn now() -> NaiveDateTime {
    at(NOW)
}

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// In-memory store with the schema applied, no rows.
pub async fn empty_app() -> TestApp {
    let pool = db::connect("sqlite::memory:", 1)
        .await
        .expect("Should open in-memory database");
    db::migrate(&pool).await.expect("Should run migrations");

    let router = create_routes(AppState::new(pool.clone(), Clock::fixed(now())));
    TestApp { router, pool }
}

/// Three venues, three artists and five shows (two past, three upcoming).
pub async fn seeded_app() -> TestApp {
    let app = empty_app().await;
    let pool = &app.pool;

    for (id, name, city, state) in [
        (1, "The Musical Hop", "San Francisco", "CA"),
        (2, "The Dueling Pianos Bar", "New York", "NY"),
        (3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
    ] {
        sqlx::query(
            "INSERT INTO venues (id, name, city, state, address, phone, genres, seeking_talent)
             VALUES (?, ?, ?, ?, '1015 Folsom Street', '123-123-1234', 'Jazz,Reggae', TRUE)",
        )
        .bind(id)
        .bind(name)
        .bind(city)
        .bind(state)
        .execute(pool)
        .await
        .expect("Should insert venue");
    }

    for (id, name, phone) in [
        (1, "Guns N Petals", "326-123-5000"),
        (2, "Matt Quevedo", "300-400-5000"),
        (3, "The Wild Sax Band", "432-325-5432"),
    ] {
        sqlx::query(
            "INSERT INTO artists (id, name, city, state, phone, genres, facebook_link, seeking_venue)
             VALUES (?, ?, 'San Francisco', 'CA', ?, 'Rock n Roll', 'https://www.facebook.com/artist', FALSE)",
        )
        .bind(id)
        .bind(name)
        .bind(phone)
        .execute(pool)
        .await
        .expect("Should insert artist");
    }

    insert_show(pool, 1, 1, "2019-05-21 21:30:00").await;
    insert_show(pool, 3, 2, "2019-06-15 23:00:00").await;
    insert_show(pool, 3, 3, "2035-04-01 20:00:00").await;
    insert_show(pool, 3, 3, "2035-04-08 20:00:00").await;
    insert_show(pool, 3, 3, "2035-04-15 20:00:00").await;

    app
}

pub async fn insert_show(pool: &SqlitePool, venue_id: i64, artist_id: i64, start_time: &str) {
    sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(venue_id)
        .bind(artist_id)
        .bind(at(start_time))
        .execute(pool)
        .await
        .expect("Should insert show");
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Should count rows")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Marks `request` as coming from the browser holding client cookie `client`.
pub fn as_client(mut request: Request<Body>, client: &str) -> Request<Body> {
    let cookie = format!("{CLIENT_COOKIE}={client}").parse().unwrap();
    request.headers_mut().insert(header::COOKIE, cookie);
    request
}

/// Makes every UPDATE on `table` fail inside the store.
pub async fn reject_updates(pool: &SqlitePool, table: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER reject_{table}_updates BEFORE UPDATE ON {table}
         BEGIN SELECT RAISE(ABORT, 'updates disabled'); END"
    ))
    .execute(pool)
    .await
    .expect("Should create trigger");
}

/// urlencoded POST; repeated keys become multi-valued fields.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}

pub fn venue_fields<'a>(name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("city", "San Francisco"),
        ("state", "CA"),
        ("address", "34 Whiskey Moore Ave"),
        ("phone", "415-000-1234"),
        ("genres", "Rock n Roll"),
        ("genres", "Jazz"),
        ("image_link", "https://images.example.com/venue.jpg"),
        ("facebook_link", "https://www.facebook.com/venue"),
        ("website_link", "https://www.venue.example.com"),
        ("seeking_talent", "y"),
        ("seeking_description", "Looking for a house band"),
    ]
}
