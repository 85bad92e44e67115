use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use axum::{
    async_trait,
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::state::AppState;
use crate::utils::error::AppError;

/// Cookie naming the browser a notice belongs to.
pub const CLIENT_COOKIE: &str = "gigboard_client";

/// Opaque per-browser key, set by [`client_session`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(pub String);

/// One-shot notices, queued per client and shown by that client's next page.
#[derive(Clone, Default)]
pub struct Notices {
    queues: Arc<Mutex<HashMap<ClientId, Vec<String>>>>,
}

impl Notices {
    fn lock(&self) -> MutexGuard<'_, HashMap<ClientId, Vec<String>>> {
        // A panic while holding the lock can't leave a queue half-written.
        self.queues.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, client: &ClientId, message: impl Into<String>) {
        self.lock()
            .entry(client.clone())
            .or_default()
            .push(message.into());
    }

    /// Removes and returns every notice queued for `client`.
    pub fn take(&self, client: &ClientId) -> Vec<String> {
        self.lock().remove(client).unwrap_or_default()
    }
}

/// Middleware: tags the request with the caller's [`ClientId`], issuing a
/// fresh cookie to browsers that don't carry one yet.
pub async fn client_session(mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let existing = jar
        .get(CLIENT_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|value| !value.is_empty());

    let (client, issued) = match existing {
        Some(value) => (ClientId(value), false),
        None => (ClientId(Uuid::new_v4().to_string()), true),
    };
    request.extensions_mut().insert(client.clone());

    let response = next.run(request).await;
    if !issued {
        return response;
    }

    let cookie = Cookie::build((CLIENT_COOKIE, client.0))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (CookieJar::new().add(cookie), response).into_response()
}

/// Handler view of the caller's notice queue.
pub struct Flash {
    client: ClientId,
    notices: Notices,
}

impl Flash {
    pub fn push(&self, message: impl Into<String>) {
        self.notices.push(&self.client, message);
    }

    pub fn take(&self) -> Vec<String> {
        self.notices.take(&self.client)
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Flash {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let client = parts.extensions.get::<ClientId>().cloned().ok_or_else(|| {
            AppError::InternalServerError("Request did not pass through client_session".into())
        })?;

        Ok(Self {
            client,
            notices: state.notices.clone(),
        })
    }
}
