//! Word-boundary case conversion shared by name derivation and key synthesis.

use once_cell::sync::Lazy;
use regex::Regex;

/// A run of capitals (or digits) followed by a capitalized word: `HTMLParser`.
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static regex"));

/// A lowercase letter (or digit) followed by a capital: `fooThing`.
static WORD_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex"));

/// Convert a single word in any of snake_case, camelCase, PascalCase or
/// kebab-case to lowercase dash-case.
///
/// ```rust
/// use stimulizer_core::dash_case;
/// assert_eq!(dash_case("FooThing"), "foo-thing");
/// assert_eq!(dash_case("this_thing"), "this-thing");
/// assert_eq!(dash_case("HTMLParser"), "html-parser");
/// ```
pub fn dash_case(word: &str) -> String {
    let split = ACRONYM_BOUNDARY.replace_all(word, "${1}_${2}");
    let split = WORD_BOUNDARY.replace_all(&split, "${1}_${2}");
    split.replace('-', "_").to_lowercase().replace('_', "-")
}
