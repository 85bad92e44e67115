use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};

pub fn html(status: StatusCode, body: String) -> Response {
    (status, Html(body)).into_response()
}

pub fn page(body: String) -> Response {
    html(StatusCode::OK, body)
}

/// 303 to a page that should be fetched with GET after a form post.
pub fn see_other(location: &str) -> Response {
    Redirect::to(location).into_response()
}
