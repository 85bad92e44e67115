use std::fmt::Write;

use super::{escape, format_start_time, image, render, Page};
use crate::models::ShowListing;

pub fn listing(notices: &[String], shows: &[ShowListing]) -> String {
    let mut body = String::from("<h1>Shows</h1>\n<ul class=\"shows\">\n");
    for show in shows {
        let _ = writeln!(
            body,
            r#"<li>{image}<time>{time}</time> <a href="/artists/{artist_id}">{artist}</a> playing at <a href="/venues/{venue_id}">{venue}</a></li>"#,
            image = image(show.artist_image_link.as_deref(), &show.artist_name),
            time = format_start_time(&show.start_time),
            artist_id = show.artist_id,
            artist = escape(&show.artist_name),
            venue_id = show.venue_id,
            venue = escape(&show.venue_name),
        );
    }
    body.push_str("</ul>");

    render(Page {
        title: "Shows",
        notices,
        body,
    })
}
