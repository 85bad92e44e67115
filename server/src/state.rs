use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use sqlx::SqlitePool;

use crate::utils::flash::Notices;

/// Source of "now" for splitting shows into past and upcoming.
#[derive(Clone)]
pub struct Clock(Arc<dyn Fn() -> NaiveDateTime + Send + Sync>);

impl Clock {
    /// Server-local wall clock, without timezone.
    pub fn system() -> Self {
        Self(Arc::new(|| Local::now().naive_local()))
    }

    pub fn fixed(at: NaiveDateTime) -> Self {
        Self(Arc::new(move || at))
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.0)()
    }
}

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub notices: Notices,
    pub clock: Clock,
}

impl AppState {
    pub fn new(db: SqlitePool, clock: Clock) -> Self {
        Self {
            db,
            notices: Notices::default(),
            clock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let at = NaiveDateTime::parse_from_str("2026-10-17 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let clock = Clock::fixed(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.clone().now(), at);
    }
}
