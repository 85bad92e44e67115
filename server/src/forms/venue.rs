use serde::Deserialize;

use super::{
    checked, optional_url, required, required_genres, required_phone, required_state, validators,
    FieldErrors,
};
use crate::models::Venue;

/// Raw `/venues/create` and `/venues/{id}/edit` submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

/// Validated venue fields, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Pre-fills the edit form from a stored venue.
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website_link: venue.website.clone().unwrap_or_default(),
            genres: venue.genre_list(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn is_seeking_talent(&self) -> bool {
        checked(self.seeking_talent.as_deref())
    }

    pub fn validate(&self) -> Result<VenueInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let input = VenueInput {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: required_state(&mut errors, &self.state),
            address: required(&mut errors, "address", &self.address),
            phone: required_phone(&mut errors, &self.phone),
            image_link: optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website: optional_url(&mut errors, "website_link", &self.website_link),
            genres: required_genres(&mut errors, &self.genres),
            seeking_talent: self.is_seeking_talent(),
            seeking_description: validators::non_blank(&self.seeking_description),
        };

        errors.into_result(input)
    }
}
