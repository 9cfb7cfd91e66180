use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::Category;

static NUMBERED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-5]\.jpg$").expect("valid numbered filename regex"));

/// Derives the catalog category from an uploaded filename. First match wins:
/// the numbered pattern, then the casual/formal/traditional substrings, then
/// `Numbered` as the default for anything unrecognized.
pub fn classify(filename: &str) -> Category {
    let lowered = filename.to_lowercase();

    if NUMBERED_RE.is_match(&lowered) {
        return Category::Numbered;
    }

    if lowered.contains("casual") {
        Category::Casual
    } else if lowered.contains("formal") {
        Category::Formal
    } else if lowered.contains("traditional") {
        Category::Traditional
    } else {
        Category::Numbered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit_jpg_names_are_numbered() {
        for name in ["1.jpg", "3.jpg", "5.jpg", "2.JPG", "4.Jpg"] {
            assert_eq!(classify(name), Category::Numbered, "filename {name}");
        }
    }

    #[test]
    fn digits_outside_the_numbered_pattern_fall_through_to_the_default() {
        assert_eq!(classify("6.jpg"), Category::Numbered);
        assert_eq!(classify("12.jpg"), Category::Numbered);
        assert_eq!(classify("1.png"), Category::Numbered);
    }

    #[test]
    fn keyword_substrings_pick_their_category() {
        assert_eq!(classify("shirt_casual.jpg"), Category::Casual);
        assert_eq!(classify("MY-FORMAL-SUIT.png"), Category::Formal);
        assert_eq!(classify("traditional_kurta.jpeg"), Category::Traditional);
    }

    #[test]
    fn casual_wins_over_later_keywords() {
        assert_eq!(classify("casual_formal.jpg"), Category::Casual);
        assert_eq!(classify("formal_traditional.jpg"), Category::Formal);
    }

    #[test]
    fn numbered_pattern_beats_keywords() {
        // A bare digit name is numbered even though nothing else matches,
        // and a keyword name with a digit prefix is still keyword-classified.
        assert_eq!(classify("2.jpg"), Category::Numbered);
        assert_eq!(classify("2_formal.jpg"), Category::Formal);
    }

    #[test]
    fn unrecognized_names_default_to_numbered() {
        assert_eq!(classify("holiday-photo.png"), Category::Numbered);
        assert_eq!(classify(""), Category::Numbered);
    }
}
