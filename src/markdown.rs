//! Post Body Markdown
//!
//! pulldown-cmark with two adjustments for post bodies:
//! - Images render lazy-loaded and width-constrained
//! - Image links to mp4/webm/mov files render as `<video>`
//!
//! Raw HTML in the feed is escaped, never passed through.

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag};

/// Render a post body to HTML
pub fn parse_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

enum State {
    Normal,
    /// Skipping the alt-text events of an image already emitted as HTML
    InMedia { dropped_depth: usize },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Start(Tag::Image { dest_url, .. }) => {
                    let url = escape_html(&dest_url);
                    let html = if is_video_url(&dest_url) {
                        format!(r#"<video controls src="{}" class="post-media"></video>"#, url)
                    } else {
                        format!(r#"<img src="{}" loading="lazy" class="post-media" />"#, url)
                    };
                    events.push(Event::Html(CowStr::from(html)));
                    state = State::InMedia { dropped_depth: 0 };
                }
                Event::Html(raw) | Event::InlineHtml(raw) => {
                    events.push(Event::Text(raw));
                }
                other => events.push(other),
            },

            State::InMedia { ref mut dropped_depth } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = State::Normal;
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

fn is_video_url(url: &str) -> bool {
    let lower = url.to_lowercase();
    lower.ends_with(".mp4") || lower.ends_with(".webm") || lower.ends_with(".mov")
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
