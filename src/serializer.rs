use itertools::Itertools;

use crate::types::DirectiveMap;

/// Flatten a directive map into a single `key="value"` attribute string.
///
/// Keys and values are trimmed, pairs are joined in map order, and every
/// whitespace run is collapsed to one space. Values are not escaped.
///
/// Example:
/// ```rust
/// use stimulizer_core::{DirectiveMap, serialize};
/// let mut map = DirectiveMap::new();
/// map.insert("data-controller", "foo");
/// map.insert("data-foo-target", "button");
/// assert_eq!(serialize(&map), r#"data-controller="foo" data-foo-target="button""#);
/// ```
pub fn serialize(map: &DirectiveMap) -> String {
    let joined = map
        .iter()
        .map(|(key, value)| format!(r#"{}="{}""#, key.trim(), value.trim()))
        .join(" ");
    joined.split_whitespace().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn map(pairs: &[(&str, &str)]) -> DirectiveMap {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_serialize_controller_and_target() {
        let map = map(&[("data-controller", "foo"), ("data-foo-target", "button")]);
        assert_eq!(
            serialize(&map),
            r#"data-controller="foo" data-foo-target="button""#
        );
    }

    #[test]
    fn test_serialize_empty_map() {
        assert_eq!(serialize(&DirectiveMap::new()), "");
    }

    #[test]
    fn test_serialize_trims_and_squishes() {
        let map = map(&[
            (" data-controller ", "  foo   bar "),
            ("data-foo-busy-class", "opacity-50 \n  animate-spin"),
        ]);
        assert_snapshot!(
            serialize(&map),
            @r#"data-controller="foo bar" data-foo-busy-class="opacity-50 animate-spin""#
        );
    }

    #[test]
    fn test_serialize_is_idempotent_and_ordered() {
        let map = map(&[
            ("data-foo-target", "button"),
            ("data-controller", "foo"),
            ("data-action", "click->foo#go"),
        ]);
        let first = serialize(&map);
        let second = serialize(&map);
        assert_eq!(first, second);
        assert_eq!(
            first,
            r#"data-foo-target="button" data-controller="foo" data-action="click->foo#go""#
        );
    }

    #[test]
    fn test_serialize_passes_quotes_through() {
        let map = map(&[("data-foo-label-value", r#"say "hi""#)]);
        assert_eq!(serialize(&map), r#"data-foo-label-value="say "hi"""#);
    }
}
