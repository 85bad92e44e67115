pub mod artists;
pub mod shows;
pub mod venues;

use axum::async_trait;
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::utils::error::AppError;
use crate::utils::flash::Flash;
use crate::utils::response::{html, page};
use crate::views;

/// `search_term` posted by the venue and artist search boxes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Numeric record id from the path. Anything that isn't one is a missing page.
pub struct RecordId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let extracted = Path::<i64>::from_request_parts(parts, state).await;
        match extracted {
            Ok(Path(id)) => Ok(Self(id)),
            Err(rejection) => Err(AppError::NotFound(format!(
                "No page at {} ({})",
                parts.uri.path(),
                rejection.body_text()
            ))),
        }
    }
}

pub async fn index(flash: Flash) -> Response {
    page(views::pages::home(&flash.take()))
}

pub async fn health_check() -> &'static str {
    "ok"
}

/// Same-origin script behind the delete buttons.
pub async fn app_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        views::APP_SCRIPT,
    )
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No page at {}", uri.path()))
}

/// Re-rendered form page for a submission that failed validation.
fn rejected(body: String) -> Response {
    html(StatusCode::BAD_REQUEST, body)
}
