//! Text formatting for search results.
//!
//! [`format_distance`] turns a distance in meters into the label shown under
//! each place, and [`strip_markup`] removes the highlight tags and entity
//! references the place-search service embeds in titles.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"&[^;]+;").unwrap());

/// Formats a distance for display.
///
/// Kilometer values use integer division, so the remainder is dropped
/// (`1500` reads `"1 kilometer"`, `2999` reads `"2 kilometers"`). The whole
/// 1000..2000 band is singular.
pub fn format_distance(meters: u64) -> String {
    match meters {
        1 => "1 meter".to_string(),
        1000..=1999 => format!("{} kilometer", meters / 1000),
        m if m >= 2000 => format!("{} kilometers", m / 1000),
        m => format!("{} meters", m),
    }
}

/// Removes `<...>` tags, then `&...;` entity references.
pub fn strip_markup(title: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(title, "");
    ENTITY_PATTERN.replace_all(&without_tags, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meters_band() {
        assert_eq!(format_distance(0), "0 meters");
        assert_eq!(format_distance(1), "1 meter");
        assert_eq!(format_distance(2), "2 meters");
        assert_eq!(format_distance(500), "500 meters");
        assert_eq!(format_distance(999), "999 meters");
    }

    #[test]
    fn kilometer_bands_truncate() {
        assert_eq!(format_distance(1000), "1 kilometer");
        assert_eq!(format_distance(1500), "1 kilometer");
        assert_eq!(format_distance(1999), "1 kilometer");
        assert_eq!(format_distance(2000), "2 kilometers");
        assert_eq!(format_distance(2500), "2 kilometers");
        assert_eq!(format_distance(12_345), "12 kilometers");
    }

    #[test]
    fn strips_tags_and_entities() {
        assert_eq!(strip_markup("<b>Jollibee</b> Pasig"), "Jollibee Pasig");
        assert_eq!(strip_markup("Tea &amp; Coffee"), "Tea  Coffee");
        assert_eq!(strip_markup("<span class=\"hl\">Cafe</span>&nbsp;Uno"), "CafeUno");
        assert_eq!(strip_markup("plain"), "plain");
    }

    #[test]
    fn tags_are_removed_before_entities() {
        // Removing the tag first joins "&am" and "p;" into an entity.
        assert_eq!(strip_markup("A&am<i>p;B"), "AB");
    }

    #[test]
    fn stripping_is_idempotent() {
        for input in [
            "<b>Cafe</b> &amp; Bar",
            "<<b>>x</b>>",
            "&&amp;;",
            "a < b > c",
            "<em>Ramen</em>&#39;s",
        ] {
            let once = strip_markup(input);
            assert_eq!(strip_markup(&once), once, "input: {input}");
        }
    }
}
