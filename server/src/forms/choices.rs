//! Fixed choice lists offered by the venue and artist forms.

/// Two-letter region codes accepted in the `state` field.
pub const STATES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MT", "NE", "NV", "NH", "NJ", "NM", "NY", "NC", "ND", "OH",
    "OK", "OR", "MD", "MA", "MI", "MN", "MS", "MO", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY",
];

pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

pub fn is_state(value: &str) -> bool {
    STATES.contains(&value)
}

pub fn is_genre(value: &str) -> bool {
    GENRES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_unique_two_letter_codes() {
        let mut seen = std::collections::HashSet::new();
        for state in STATES {
            assert_eq!(state.len(), 2, "{state} is not a two-letter code");
            assert!(seen.insert(state), "{state} listed twice");
        }
        assert_eq!(STATES.len(), 51);
    }

    #[test]
    fn test_choice_lookup_is_exact() {
        assert!(is_state("NY"));
        assert!(!is_state("ny"));
        assert!(is_genre("R&B"));
        assert!(!is_genre("Polka"));
    }
}
