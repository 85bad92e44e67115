//! Server-rendered HTML pages.
//!
//! Views only format data they are handed; every value that reaches the
//! markup goes through [`escape`].

pub mod artists;
pub mod forms;
pub mod pages;
pub mod shows;
pub mod venues;

use std::fmt::Write;

use chrono::NaiveDateTime;

/// Served at `/static/app.js`; wires up the delete buttons.
pub const APP_SCRIPT: &str = include_str!("app.js");

/// Notices and the body of one rendered page.
pub struct Page<'a> {
    pub title: &'a str,
    pub notices: &'a [String],
    pub body: String,
}

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn format_start_time(start_time: &NaiveDateTime) -> String {
    start_time.format("%a %m, %d, %Y %-I:%M%p").to_string()
}

pub fn render(page: Page<'_>) -> String {
    let mut notices = String::new();
    for notice in page.notices {
        let _ = write!(notices, r#"<div class="alert">{}</div>"#, escape(notice));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Gigboard</title>
<script src="/static/app.js" defer></script>
</head>
<body>
<nav>
<a href="/">Gigboard</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search" class="search"><input type="search" name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search" class="search"><input type="search" name="search_term" placeholder="Find an artist"></form>
</nav>
<main>
{notices}
{body}
</main>
</body>
</html>
"#,
        title = escape(page.title),
        notices = notices,
        body = page.body,
    )
}

fn link(href: &str, label: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape(href), escape(label))
}

fn image(src: Option<&str>, alt: &str) -> String {
    match src {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(alt)),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<script>alert("Park Square Live Music & Coffee's")</script>"#),
            "&lt;script&gt;alert(&quot;Park Square Live Music &amp; Coffee&#39;s&quot;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_format_start_time() {
        let t = NaiveDateTime::parse_from_str("2019-05-21 21:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(format_start_time(&t), "Tue 05, 21, 2019 9:30PM");
    }

    #[test]
    fn test_layout_renders_notices_escaped() {
        let notices = vec!["Venue <b>Hop</b> was successfully listed!".to_string()];
        let html = render(Page {
            title: "Home",
            notices: &notices,
            body: "<h1>Welcome</h1>".into(),
        });
        assert!(html.contains("<title>Home | Gigboard</title>"));
        assert!(html.contains("Venue &lt;b&gt;Hop&lt;/b&gt; was successfully listed!"));
        assert!(html.contains("<h1>Welcome</h1>"));
    }
}
