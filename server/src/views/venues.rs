use std::fmt::Write;

use super::{escape, format_start_time, image, link, render, Page};
use crate::models::venue::ArtistShow;
use crate::models::{SearchResults, VenueArea, VenueDetail};

pub fn listing(notices: &[String], areas: &[VenueArea]) -> String {
    let mut body = String::from("<h1>Venues</h1>\n");
    if areas.is_empty() {
        body.push_str("<p>No venues listed yet.</p>\n");
    }
    for area in areas {
        let _ = writeln!(
            body,
            "<h2>{}, {}</h2>\n<ul>",
            escape(&area.city),
            escape(&area.state)
        );
        for venue in &area.venues {
            let _ = writeln!(
                body,
                r#"<li><a href="/venues/{}">{}</a> <span class="upcoming">{} upcoming shows</span></li>"#,
                venue.id,
                escape(&venue.name),
                venue.num_upcoming_shows
            );
        }
        body.push_str("</ul>\n");
    }

    render(Page {
        title: "Venues",
        notices,
        body,
    })
}

pub fn search(notices: &[String], search_term: &str, results: &SearchResults) -> String {
    search_page(notices, "venues", search_term, results)
}

/// Shared by the venue and artist search pages; `kind` is the URL segment.
pub(crate) fn search_page(
    notices: &[String],
    kind: &str,
    search_term: &str,
    results: &SearchResults,
) -> String {
    let mut body = format!(
        "<h1>Number of search results for \"{}\": {}</h1>\n<ul>\n",
        escape(search_term),
        results.count
    );
    for hit in &results.data {
        let _ = writeln!(
            body,
            r#"<li><a href="/{kind}/{}">{}</a> <span class="upcoming">{} upcoming shows</span></li>"#,
            hit.id,
            escape(&hit.name),
            hit.num_upcoming_shows
        );
    }
    body.push_str("</ul>");

    render(Page {
        title: "Search",
        notices,
        body,
    })
}

fn show_list(heading: &str, count: usize, shows: &[ArtistShow]) -> String {
    let mut out = format!("<h2>{count} {heading}</h2>\n<ul class=\"shows\">\n");
    for show in shows {
        let _ = writeln!(
            out,
            r#"<li>{}<a href="/artists/{}">{}</a> <time>{}</time></li>"#,
            image(show.artist_image_link.as_deref(), &show.artist_name),
            show.artist_id,
            escape(&show.artist_name),
            format_start_time(&show.start_time)
        );
    }
    out.push_str("</ul>\n");
    out
}

pub fn detail(notices: &[String], venue: &VenueDetail) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>\n",
        escape(&venue.name),
        venue.id
    );
    body.push_str("<ul class=\"genres\">");
    for genre in &venue.genres {
        let _ = write!(body, "<li>{}</li>", escape(genre));
    }
    body.push_str("</ul>\n");
    let _ = writeln!(
        body,
        "<p>{}, {}</p>\n<p>{}</p>\n<p>{}</p>",
        escape(&venue.city),
        escape(&venue.state),
        escape(&venue.address),
        escape(venue.phone.as_deref().unwrap_or("No Phone"))
    );
    let _ = writeln!(
        body,
        "<p>{}</p>\n<p>{}</p>",
        match venue.website.as_deref() {
            Some(site) => link(site, site),
            None => "No Website".to_string(),
        },
        match venue.facebook_link.as_deref() {
            Some(fb) => link(fb, fb),
            None => "No Facebook Link".to_string(),
        }
    );
    if venue.seeking_talent {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking talent</p><p>{}</p></div>",
            escape(venue.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking talent</p>\n");
    }
    body.push_str(&image(venue.image_link.as_deref(), &venue.name));
    body.push_str(&show_list("Upcoming Shows", venue.upcoming_shows_count, &venue.upcoming_shows));
    body.push_str(&show_list("Past Shows", venue.past_shows_count, &venue.past_shows));
    let _ = write!(
        body,
        r#"<p><a href="/venues/{id}/edit">Edit venue</a></p>
<p><button type="button" data-delete-url="/venues/{id}" data-confirm="Delete {name}?">Delete venue</button></p>"#,
        id = venue.id,
        name = escape(&venue.name)
    );

    render(Page {
        title: &venue.name,
        notices,
        body,
    })
}
