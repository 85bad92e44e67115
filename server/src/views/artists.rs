use std::fmt::Write;

use super::venues::search_page;
use super::{escape, format_start_time, image, link, render, Page};
use crate::models::artist::VenueShow;
use crate::models::{ArtistDetail, ArtistSummary, SearchResults};

pub fn listing(notices: &[String], artists: &[ArtistSummary]) -> String {
    let mut body = String::from("<h1>Artists</h1>\n<ul>\n");
    for artist in artists {
        let _ = writeln!(
            body,
            r#"<li><a href="/artists/{}">{}</a></li>"#,
            artist.id,
            escape(&artist.name)
        );
    }
    body.push_str("</ul>");

    render(Page {
        title: "Artists",
        notices,
        body,
    })
}

pub fn search(notices: &[String], search_term: &str, results: &SearchResults) -> String {
    search_page(notices, "artists", search_term, results)
}

fn show_list(heading: &str, count: usize, shows: &[VenueShow]) -> String {
    let mut out = format!("<h2>{count} {heading}</h2>\n<ul class=\"shows\">\n");
    for show in shows {
        let _ = writeln!(
            out,
            r#"<li>{}<a href="/venues/{}">{}</a> <time>{}</time></li>"#,
            image(show.venue_image_link.as_deref(), &show.venue_name),
            show.venue_id,
            escape(&show.venue_name),
            format_start_time(&show.start_time)
        );
    }
    out.push_str("</ul>\n");
    out
}

pub fn detail(notices: &[String], artist: &ArtistDetail) -> String {
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"subtitle\">ID: {}</p>\n<ul class=\"genres\">",
        escape(&artist.name),
        artist.id
    );
    for genre in &artist.genres {
        let _ = write!(body, "<li>{}</li>", escape(genre));
    }
    body.push_str("</ul>\n");
    let _ = writeln!(
        body,
        "<p>{}, {}</p>\n<p>{}</p>",
        escape(&artist.city),
        escape(&artist.state),
        escape(artist.phone.as_deref().unwrap_or("No Phone"))
    );
    if let Some(site) = artist.website.as_deref() {
        let _ = writeln!(body, "<p>{}</p>", link(site, site));
    }
    if let Some(fb) = artist.facebook_link.as_deref() {
        let _ = writeln!(body, "<p>{}</p>", link(fb, fb));
    }
    if artist.seeking_venue {
        let _ = writeln!(
            body,
            "<div class=\"seeking\"><p>Currently seeking performance venues</p><p>{}</p></div>",
            escape(artist.seeking_description.as_deref().unwrap_or_default())
        );
    } else {
        body.push_str("<p class=\"not-seeking\">Not currently seeking performance venues</p>\n");
    }
    body.push_str(&image(artist.image_link.as_deref(), &artist.name));
    body.push_str(&show_list("Upcoming Shows", artist.upcoming_shows_count, &artist.upcoming_shows));
    body.push_str(&show_list("Past Shows", artist.past_shows_count, &artist.past_shows));
    let _ = write!(
        body,
        r#"<p><a href="/artists/{}/edit">Edit artist</a></p>"#,
        artist.id
    );

    render(Page {
        title: &artist.name,
        notices,
        body,
    })
}
