//! Rendered HTML to plain text, for titles and attributes.

use scraper::Html;

/// Text content of an HTML fragment with whitespace collapsed.
pub fn plain_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<String>();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_space() {
        assert_eq!(plain_text("<p>Hello <em>big</em>\n world</p>"), "Hello big world");
    }

    #[test]
    fn test_decodes_numeric_references() {
        assert_eq!(plain_text("Tom &amp; Jerry&#8217;s &#x41;"), "Tom & Jerry\u{2019}s A");
    }

    #[test]
    fn test_decodes_named_entities() {
        assert_eq!(plain_text("Caf&eacute; &copy; 2024"), "Caf\u{e9} \u{a9} 2024");
        assert_eq!(plain_text("&laquo;Quoted&raquo;&nbsp;text"), "\u{ab}Quoted\u{bb} text");
    }

    #[test]
    fn test_angle_bracket_inside_attribute() {
        assert_eq!(plain_text(r#"<a title="x>y">Hello</a>"#), "Hello");
    }

    #[test]
    fn test_plain_string_passes_through() {
        assert_eq!(plain_text("  Hello  "), "Hello");
        assert_eq!(plain_text(""), "");
    }
}
