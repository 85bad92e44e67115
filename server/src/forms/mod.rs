//! Form payloads posted by the create/edit pages and their validation.
//!
//! Each form deserializes leniently (every field defaults to empty) and
//! `validate` turns it into a typed input or a set of per-field errors.

pub mod artist;
pub mod choices;
pub mod show;
pub mod validators;
pub mod venue;

pub use artist::{ArtistForm, ArtistInput};
pub use show::{ShowForm, ShowInput};
pub use venue::{VenueForm, VenueInput};

use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

fn required(errors: &mut FieldErrors, field: &'static str, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.add(field, "This field is required.");
    }
    trimmed.to_string()
}

fn required_state(errors: &mut FieldErrors, value: &str) -> String {
    let state = required(errors, "state", value);
    if !state.is_empty() && !choices::is_state(&state) {
        errors.add("state", "Not a valid choice.");
    }
    state
}

fn required_phone(errors: &mut FieldErrors, value: &str) -> String {
    let phone = required(errors, "phone", value);
    if !phone.is_empty() && !validators::is_phone(&phone) {
        errors.add("phone", "Invalid phone number, expected a format like 123-456-7890.");
    }
    phone
}

fn required_genres(errors: &mut FieldErrors, values: &[String]) -> Vec<String> {
    let genres: Vec<String> = values
        .iter()
        .filter_map(|g| validators::non_blank(g))
        .collect();
    if genres.is_empty() {
        errors.add("genres", "Select at least one genre.");
    }
    for genre in genres.iter().filter(|g| !choices::is_genre(g)) {
        errors.add("genres", format!("'{genre}' is not a valid choice."));
    }
    genres
}

fn optional_url(errors: &mut FieldErrors, field: &'static str, value: &str) -> Option<String> {
    let url = validators::non_blank(value)?;
    if !validators::is_url(&url) {
        errors.add(field, "Invalid URL.");
    }
    Some(url)
}

/// Checkbox semantics: any submitted value other than an explicit "off" marks it checked.
fn checked(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "" | "false" | "n" | "no" | "off" | "0"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_collects_per_field() {
        let mut errors = FieldErrors::default();
        errors.add("name", "This field is required.");
        errors.add("genres", "Select at least one genre.");
        errors.add("name", "Too short.");

        assert_eq!(errors.get("name").len(), 2);
        assert!(errors.get("city").is_empty());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["genres", "name"]);
        assert_eq!(
            errors.to_string(),
            "genres: Select at least one genre.; name: This field is required.; name: Too short."
        );
    }

    #[test]
    fn test_checked() {
        assert!(checked(Some("y")));
        assert!(checked(Some("on")));
        assert!(!checked(None));
        assert!(!checked(Some("false")));
    }

    #[test]
    fn test_required_genres_rejects_unknown_values() {
        let mut errors = FieldErrors::default();
        let genres = required_genres(&mut errors, &["Jazz".into(), "Polka".into()]);
        assert_eq!(genres, vec!["Jazz", "Polka"]);
        assert_eq!(errors.get("genres"), &["'Polka' is not a valid choice.".to_string()]);
    }
}
