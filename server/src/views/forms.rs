//! Form widgets and the create/edit pages built from them.

use std::fmt::Write;

use super::{escape, render, Page};
use crate::forms::choices::{GENRES, STATES};
use crate::forms::{ArtistForm, FieldErrors, ShowForm, VenueForm};

/// Where a venue or artist form posts to.
pub enum FormTarget<'a> {
    Create,
    Edit { id: i64, name: &'a str },
}

fn field_errors(errors: &FieldErrors, field: &str) -> String {
    let mut out = String::new();
    for message in errors.get(field) {
        let _ = write!(out, r#"<span class="error">{}</span>"#, escape(message));
    }
    out
}

fn text_input(errors: &FieldErrors, field: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><label for="{field}">{label}</label><input type="text" id="{field}" name="{field}" value="{value}">{errors}</div>
"#,
        field = field,
        label = escape(label),
        value = escape(value),
        errors = field_errors(errors, field),
    )
}

fn textarea(errors: &FieldErrors, field: &str, label: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><label for="{field}">{label}</label><textarea id="{field}" name="{field}">{value}</textarea>{errors}</div>
"#,
        field = field,
        label = escape(label),
        value = escape(value),
        errors = field_errors(errors, field),
    )
}

fn select(
    errors: &FieldErrors,
    field: &str,
    label: &str,
    choices: &[&str],
    selected: &[&str],
    multiple: bool,
) -> String {
    let mut options = String::new();
    for choice in choices {
        let flag = if selected.contains(choice) { " selected" } else { "" };
        let _ = write!(
            options,
            r#"<option value="{value}"{flag}>{value}</option>"#,
            value = escape(choice),
        );
    }
    format!(
        r#"<div class="field"><label for="{field}">{label}</label><select id="{field}" name="{field}"{multiple}>{options}</select>{errors}</div>
"#,
        field = field,
        label = escape(label),
        multiple = if multiple { " multiple" } else { "" },
        options = options,
        errors = field_errors(errors, field),
    )
}

fn checkbox(field: &str, label: &str, checked: bool) -> String {
    format!(
        r#"<div class="field"><input type="checkbox" id="{field}" name="{field}" value="y"{checked}><label for="{field}">{label}</label></div>
"#,
        field = field,
        label = escape(label),
        checked = if checked { " checked" } else { "" },
    )
}

fn heading(kind: &str, target: &FormTarget<'_>) -> (String, String) {
    match target {
        FormTarget::Create => (
            format!("List a new {kind}"),
            format!("/{kind}s/create"),
        ),
        FormTarget::Edit { id, name } => (
            format!("Edit {kind} {}", name),
            format!("/{kind}s/{id}/edit"),
        ),
    }
}

pub fn venue_form(
    notices: &[String],
    target: FormTarget<'_>,
    form: &VenueForm,
    errors: &FieldErrors,
) -> String {
    let (title, action) = heading("venue", &target);
    let genres: Vec<&str> = form.genres.iter().map(String::as_str).collect();

    let mut body = format!(
        r#"<h1>{}</h1>
<form method="post" action="{}">
"#,
        escape(&title),
        escape(&action)
    );
    body.push_str(&text_input(errors, "name", "Name", &form.name));
    body.push_str(&text_input(errors, "city", "City", &form.city));
    body.push_str(&select(errors, "state", "State", STATES, &[form.state.as_str()], false));
    body.push_str(&text_input(errors, "address", "Address", &form.address));
    body.push_str(&text_input(errors, "phone", "Phone", &form.phone));
    body.push_str(&select(errors, "genres", "Genres", GENRES, &genres, true));
    body.push_str(&text_input(errors, "image_link", "Image link", &form.image_link));
    body.push_str(&text_input(errors, "facebook_link", "Facebook link", &form.facebook_link));
    body.push_str(&text_input(errors, "website_link", "Website", &form.website_link));
    body.push_str(&checkbox("seeking_talent", "Looking for talent", form.is_seeking_talent()));
    body.push_str(&textarea(
        errors,
        "seeking_description",
        "Seeking description",
        &form.seeking_description,
    ));
    body.push_str(r#"<button type="submit">Save venue</button>
</form>"#);

    render(Page {
        title: &title,
        notices,
        body,
    })
}

pub fn artist_form(
    notices: &[String],
    target: FormTarget<'_>,
    form: &ArtistForm,
    errors: &FieldErrors,
) -> String {
    let (title, action) = heading("artist", &target);
    let genres: Vec<&str> = form.genres.iter().map(String::as_str).collect();

    let mut body = format!(
        r#"<h1>{}</h1>
<form method="post" action="{}">
"#,
        escape(&title),
        escape(&action)
    );
    body.push_str(&text_input(errors, "name", "Name", &form.name));
    body.push_str(&text_input(errors, "city", "City", &form.city));
    body.push_str(&select(errors, "state", "State", STATES, &[form.state.as_str()], false));
    body.push_str(&text_input(errors, "phone", "Phone", &form.phone));
    body.push_str(&select(errors, "genres", "Genres", GENRES, &genres, true));
    body.push_str(&text_input(errors, "image_link", "Image link", &form.image_link));
    body.push_str(&text_input(errors, "facebook_link", "Facebook link", &form.facebook_link));
    body.push_str(&text_input(errors, "website_link", "Website", &form.website_link));
    body.push_str(&checkbox("seeking_venue", "Looking for venues", form.is_seeking_venue()));
    body.push_str(&textarea(
        errors,
        "seeking_description",
        "Seeking description",
        &form.seeking_description,
    ));
    body.push_str(r#"<button type="submit">Save artist</button>
</form>"#);

    render(Page {
        title: &title,
        notices,
        body,
    })
}

pub fn show_form(notices: &[String], form: &ShowForm, errors: &FieldErrors) -> String {
    let mut body = String::from(
        r#"<h1>List a new show</h1>
<form method="post" action="/shows/create">
"#,
    );
    body.push_str(&text_input(errors, "artist_id", "Artist ID", &form.artist_id));
    body.push_str(&text_input(errors, "venue_id", "Venue ID", &form.venue_id));
    body.push_str(&text_input(errors, "start_time", "Start time", &form.start_time));
    body.push_str(r#"<button type="submit">Create show</button>
</form>"#);

    render(Page {
        title: "New show",
        notices,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_venue_form_marks_selected_choices_and_errors() {
        let form = VenueForm {
            state: "NY".into(),
            genres: vec!["Jazz".into(), "R&B".into()],
            seeking_talent: Some("y".into()),
            ..Default::default()
        };
        let mut errors = FieldErrors::default();
        errors.add("name", "This field is required.");

        let html = venue_form(&[], FormTarget::Create, &form, &errors);
        assert!(html.contains(r#"action="/venues/create""#));
        assert!(html.contains(r#"<option value="NY" selected>NY</option>"#));
        assert!(html.contains(r#"<option value="R&amp;B" selected>R&amp;B</option>"#));
        assert!(html.contains(r#"<option value="Blues">Blues</option>"#));
        assert!(html.contains(r#"name="seeking_talent" value="y" checked"#));
        assert!(html.contains("This field is required."));
    }

    #[test]
    fn test_edit_target_posts_to_record() {
        let html = artist_form(
            &[],
            FormTarget::Edit { id: 5, name: "Matt Quevedo" },
            &ArtistForm::default(),
            &FieldErrors::default(),
        );
        assert!(html.contains(r#"action="/artists/5/edit""#));
        assert!(html.contains("Edit artist Matt Quevedo"));
    }
}
