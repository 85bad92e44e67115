use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::{self, TraceLayer};
use tracing::Level;

use crate::config::create_security_headers_layer;
use crate::handlers::{self, artists, shows, venues};
use crate::state::AppState;
use crate::utils::flash;

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/static/app.js", get(handlers::app_script))
        // Venues
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:venue_id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )
        // Artists
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:artist_id", get(artists::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )
        // Shows
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(flash::client_session))
        .layer(create_security_headers_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
