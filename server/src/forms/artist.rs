use serde::Deserialize;

use super::{
    checked, optional_url, required, required_genres, required_phone, required_state, validators,
    FieldErrors,
};
use crate::models::Artist;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub genres: Vec<String>,
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistInput {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website_link: artist.website.clone().unwrap_or_default(),
            genres: artist.genre_list(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn is_seeking_venue(&self) -> bool {
        checked(self.seeking_venue.as_deref())
    }

    pub fn validate(&self) -> Result<ArtistInput, FieldErrors> {
        let mut errors = FieldErrors::default();

        let input = ArtistInput {
            name: required(&mut errors, "name", &self.name),
            city: required(&mut errors, "city", &self.city),
            state: required_state(&mut errors, &self.state),
            phone: required_phone(&mut errors, &self.phone),
            image_link: optional_url(&mut errors, "image_link", &self.image_link),
            facebook_link: optional_url(&mut errors, "facebook_link", &self.facebook_link),
            website: optional_url(&mut errors, "website_link", &self.website_link),
            genres: required_genres(&mut errors, &self.genres),
            seeking_venue: self.is_seeking_venue(),
            seeking_description: validators::non_blank(&self.seeking_description),
        };

        errors.into_result(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_without_address_is_valid() {
        let form = ArtistForm {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            phone: "326-123-5000".into(),
            genres: vec!["Rock n Roll".into()],
            ..Default::default()
        };
        let input = form.validate().unwrap();
        assert_eq!(input.name, "Guns N Petals");
        assert!(!input.seeking_venue);
    }

    #[test]
    fn test_edit_form_prefill_round_trips() {
        let artist = Artist {
            id: 4,
            name: "Matt Quevedo".into(),
            city: "New York".into(),
            state: "NY".into(),
            phone: Some("300-400-5000".into()),
            genres: "Jazz".into(),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/mattquevedo923251523".into()),
            website: None,
            seeking_venue: true,
            seeking_description: Some("Looking for shows in NYC".into()),
        };
        let input = ArtistForm::from_artist(&artist).validate().unwrap();
        assert_eq!(input.genres, vec!["Jazz"]);
        assert!(input.seeking_venue);
        assert_eq!(input.facebook_link, artist.facebook_link);
        assert_eq!(input.seeking_description, artist.seeking_description);
    }
}
