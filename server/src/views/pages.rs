use super::{escape, render, Page};

pub fn home(notices: &[String]) -> String {
    render(Page {
        title: "Home",
        notices,
        body: r#"<h1>Gigboard</h1>
<p>Book shows between local artists and venues.</p>
<ul>
<li><a href="/venues/create">List a new venue</a></li>
<li><a href="/artists/create">List a new artist</a></li>
<li><a href="/shows/create">List a new show</a></li>
</ul>"#
            .to_string(),
    })
}

pub fn not_found(message: &str) -> String {
    render(Page {
        title: "404",
        notices: &[],
        body: format!(
            r#"<h1>404 Not Found</h1>
<p>{}</p>
<p><a href="/">Back home</a></p>"#,
            escape(message)
        ),
    })
}

pub fn server_error() -> String {
    render(Page {
        title: "500",
        notices: &[],
        body: r#"<h1>500 Internal Server Error</h1>
<p>Something went wrong on our end. Please try again.</p>
<p><a href="/">Back home</a></p>"#
            .to_string(),
    })
}
