//! Action descriptor parsing and expansion.
//!
//! A descriptor token has the shape `[event->]function`. A function that
//! already names its controller (`controller#function`) is left as is;
//! a bare function is qualified with the effective controller name.

use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;

/// Separates the event from the function in a descriptor token.
pub const EVENT_SEPARATOR: &str = "->";

/// Separates the controller from the method in a qualified function.
pub const METHOD_SEPARATOR: char = '#';

/// One whitespace-delimited action token, split on its first `->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionDescriptor<'a> {
    event: Option<&'a str>,
    function: &'a str,
}

impl<'a> ActionDescriptor<'a> {
    pub fn parse(token: &'a str) -> Self {
        match token.split_once(EVENT_SEPARATOR) {
            Some((event, function)) => ActionDescriptor {
                event: Some(event),
                function,
            },
            None => ActionDescriptor {
                event: None,
                function: token,
            },
        }
    }

    pub fn event(&self) -> Option<&'a str> {
        self.event
    }

    pub fn function(&self) -> &'a str {
        self.function
    }

    /// Whether the function already carries an explicit `controller#` reference.
    pub fn is_qualified(&self) -> bool {
        self.function.contains(METHOD_SEPARATOR)
    }

    /// Render the descriptor, qualifying a bare function with `controller`.
    pub fn qualify(&self, controller: &str) -> String {
        let event = self
            .event
            .map(|e| format!("{e}{EVENT_SEPARATOR}"))
            .unwrap_or_default();
        if self.is_qualified() {
            format!("{event}{}", self.function)
        } else {
            format!("{event}{controller}{METHOD_SEPARATOR}{}", self.function)
        }
    }
}

impl Display for ActionDescriptor<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if let Some(event) = self.event {
            write!(f, "{event}{EVENT_SEPARATOR}")?;
        }
        write!(f, "{}", self.function)
    }
}

/// Expand a whitespace-separated action spec into a `data-action` value.
///
/// ```rust
/// use stimulizer_core::expand_actions;
/// assert_eq!(
///     expand_actions("click->doThing mouseup->other#go", "foo"),
///     "click->foo#doThing mouseup->other#go"
/// );
/// ```
pub fn expand_actions(spec: &str, controller: &str) -> String {
    spec.split_whitespace()
        .map(ActionDescriptor::parse)
        .map(|descriptor| descriptor.qualify(controller))
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        with_event = { "click->doThing", Some("click"), "doThing" },
        without_event = { "doThing", None, "doThing" },
        qualified = { "click->other#doThing", Some("click"), "other#doThing" },
        keyboard_filter = { "keydown.enter->submit", Some("keydown.enter"), "submit" },
        second_arrow_stays_in_function = { "a->b->c", Some("a"), "b->c" },
        empty_event = { "->go", Some(""), "go" },
    )]
    fn test_parse(token: &str, event: Option<&str>, function: &str) {
        let descriptor = ActionDescriptor::parse(token);
        assert_eq!(descriptor.event(), event);
        assert_eq!(descriptor.function(), function);
        assert_eq!(descriptor.to_string(), token);
    }

    #[parameterized(
        event_and_bare = { "click->doThing", "click->foo#doThing" },
        bare = { "doThing", "foo#doThing" },
        qualified = { "other#doThing", "other#doThing" },
        event_and_qualified = { "click->other#doThing", "click->other#doThing" },
        window_event = { "resize@window->layout", "resize@window->foo#layout" },
    )]
    fn test_qualify(token: &str, expected: &str) {
        assert_eq!(ActionDescriptor::parse(token).qualify("foo"), expected);
    }

    #[test]
    fn test_expand_multiple_tokens() {
        assert_eq!(
            expand_actions("click->doThing mouseup->otherThing", "foo"),
            "click->foo#doThing mouseup->foo#otherThing"
        );
    }

    #[test]
    fn test_expand_collapses_whitespace() {
        assert_eq!(
            expand_actions("  click->a \n\t  b  ", "my--fancy--foo-thing"),
            "click->my--fancy--foo-thing#a my--fancy--foo-thing#b"
        );
    }

    #[test]
    fn test_expand_blank_spec_is_empty() {
        assert_eq!(expand_actions("   ", "foo"), "");
    }
}
