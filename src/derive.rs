use itertools::Itertools;
use tracing::debug;

use crate::casing::dash_case;
use crate::config::IgnorePrefix;
use crate::types::TypeIdentifier;

/// Separator that replaces `::` in a derived controller name.
pub const SEGMENT_SEPARATOR: &str = "--";

/// Derive the local controller name from a fully-qualified type identifier.
///
/// The ignore prefix, if any, is removed first; each namespace segment is then
/// dash-cased and the segments are joined with `--`.
///
/// Example:
/// ```rust
/// use stimulizer_core::derive_local_name;
/// assert_eq!(derive_local_name("My::Fancy::FooThing", None), "my--fancy--foo-thing");
/// ```
pub fn derive_local_name(type_identifier: &str, ignore_prefix: Option<&IgnorePrefix>) -> String {
    let stripped = match ignore_prefix {
        Some(prefix) => prefix.strip(type_identifier),
        None => type_identifier.into(),
    };

    let local_name = TypeIdentifier::parse(&stripped)
        .segments()
        .map(dash_case)
        .join(SEGMENT_SEPARATOR);

    debug!(
        event = "Derive",
        type_identifier = type_identifier,
        local_name = local_name.as_str()
    );

    local_name
}
