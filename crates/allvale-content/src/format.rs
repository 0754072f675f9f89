//! Display helpers shared by list and detail pages

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;

/// Characters escaped in query values (unreserved ones pass through)
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

const MONTHS_PT_BR: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho",
    "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
];

static SLUG_STRIP: OnceLock<Regex> = OnceLock::new();
static SLUG_SPACES: OnceLock<Regex> = OnceLock::new();
static SLUG_DASHES: OnceLock<Regex> = OnceLock::new();

/// Long Brazilian date, e.g. "1 de junho de 2024"
pub fn format_date_pt_br(date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => format!(
            "{} de {} de {}",
            date.day(),
            MONTHS_PT_BR[date.month0() as usize],
            date.year()
        ),
        None => String::new(),
    }
}

/// Cut to `max_chars` characters and append "..." when shortened
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

/// URL slug from a title: lowercase ASCII letters, digits and dashes
pub fn slugify(title: &str) -> String {
    let strip = SLUG_STRIP.get_or_init(|| Regex::new(r"[^a-z0-9 -]").expect("valid slug pattern"));
    let spaces = SLUG_SPACES.get_or_init(|| Regex::new(r"\s+").expect("valid slug pattern"));
    let dashes = SLUG_DASHES.get_or_init(|| Regex::new(r"-+").expect("valid slug pattern"));

    let lower = title.to_lowercase();
    let stripped = strip.replace_all(&lower, "");
    let dashed = spaces.replace_all(stripped.trim(), "-");
    dashes.replace_all(&dashed, "-").trim_matches('-').to_string()
}

/// Blog post detail link
pub fn post_link(slug: &str) -> String {
    format!("post.html?slug={}", utf8_percent_encode(slug, QUERY_VALUE))
}

/// Product detail link
pub fn product_link(id: &str) -> String {
    format!("product.html?id={}", utf8_percent_encode(id, QUERY_VALUE))
}
