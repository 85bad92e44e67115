use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{required, validators, FieldErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowInput {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    /// Empty form with the start time defaulted to `now`.
    pub fn starting_at(now: NaiveDateTime) -> Self {
        Self {
            start_time: now.format(validators::DATETIME_FORMAT).to_string(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<ShowInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let venue_id = required_id(&mut errors, "venue_id", &self.venue_id);
        let artist_id = required_id(&mut errors, "artist_id", &self.artist_id);
        let start_time = required(&mut errors, "start_time", &self.start_time);
        let start_time = if start_time.is_empty() {
            None
        } else {
            let parsed = validators::parse_datetime(&start_time);
            if parsed.is_none() {
                errors.add("start_time", "Not a valid datetime value.");
            }
            parsed
        };

        match (venue_id, artist_id, start_time) {
            (Some(venue_id), Some(artist_id), Some(start_time)) if errors.is_empty() => Ok(ShowInput {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

fn required_id(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<i64> {
    let value = required(errors, field, value);
    if value.is_empty() {
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Must be a positive whole number.");
            None
        }
    }
}
