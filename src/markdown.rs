//! Reddit Markdown Rendering
//!
//! Renders subreddit descriptions with pulldown-cmark:
//! - Raw HTML blocks are escaped, never passed through
//! - Site-relative links (`/r/rust`) are pointed at the reddit host
//! - Link and image targets outside http(s)/mailto collapse to `#`

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render markdown to HTML, resolving relative links against `link_base`
pub fn parse_markdown(text: &str, link_base: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser, link_base);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

fn transform_events<'a>(parser: Parser<'a>, link_base: &str) -> Vec<Event<'a>> {
    parser
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
                Event::Start(Tag::Link {
                    link_type,
                    dest_url: resolve_url(dest_url, link_base),
                    title,
                    id,
                })
            }
            Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
                Event::Start(Tag::Image {
                    link_type,
                    dest_url: resolve_url(dest_url, link_base),
                    title,
                    id,
                })
            }
            other => other,
        })
        .collect()
}

/// Schemes a description link may point at
const ALLOWED_SCHEMES: &[&str] = &["http:", "https:", "mailto:"];

fn resolve_url<'a>(url: CowStr<'a>, link_base: &str) -> CowStr<'a> {
    if url.starts_with('/') && !url.starts_with("//") {
        return CowStr::from(format!("{}{}", link_base, url));
    }
    let lower = url.trim_start().to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|scheme| lower.starts_with(scheme)) {
        url
    } else {
        CowStr::from("#")
    }
}

/// Escape text for interpolation into markup
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
