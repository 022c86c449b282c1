//! Directive request type.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Field, StimulusError};

/// An insertion-ordered key/value group: params, values or classes.
pub type Bundle = IndexMap<String, String>;

/// The sentinel literal that selects the type's own controller.
pub const DEFAULT_CONTROLLER_FLAG: &str = "controller";

/// Whether the element attaches the controller derived from the host type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultController {
    #[default]
    Unset,
    Controller,
}

impl DefaultController {
    /// Interpret a flag. Only a case-insensitive match for `controller` selects
    /// the default controller; anything else, `true` included, leaves it unset.
    pub fn from_flag(flag: &str) -> Self {
        if flag.eq_ignore_ascii_case(DEFAULT_CONTROLLER_FLAG) {
            DefaultController::Controller
        } else {
            DefaultController::Unset
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, DefaultController::Controller)
    }
}

/// Accepts a boolean (always unset) or a flag string read by [`DefaultController::from_flag`].
impl<'de> Deserialize<'de> for DefaultController {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Flag {
            Bool(bool),
            Text(String),
        }

        Ok(match Flag::deserialize(deserializer)? {
            Flag::Bool(_) => DefaultController::Unset,
            Flag::Text(flag) => DefaultController::from_flag(&flag),
        })
    }
}

/// The compiler's input. Every present field must be non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectiveRequest {
    pub default_controller: DefaultController,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Bundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Bundle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classes: Option<Bundle>,
}

impl DirectiveRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the controller derived from the host type.
    pub fn with_default_controller(mut self) -> Self {
        self.default_controller = DefaultController::Controller;
        self
    }

    /// Attach a named controller and namespace every other key under it.
    pub fn with_controller_name(mut self, name: impl Into<String>) -> Self {
        self.controller_name = Some(name.into());
        self
    }

    /// Attach additional controllers, space-separated.
    pub fn with_controller(mut self, controller: impl Into<String>) -> Self {
        self.controller = Some(controller.into());
        self
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params
            .get_or_insert_with(Bundle::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values
            .get_or_insert_with(Bundle::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_class(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.classes
            .get_or_insert_with(Bundle::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the params bundle wholesale. An empty iterator yields a present
    /// but blank bundle, which fails validation.
    pub fn with_params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.params = Some(collect_bundle(params));
        self
    }

    pub fn with_values<K, V>(mut self, values: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.values = Some(collect_bundle(values));
        self
    }

    pub fn with_classes<K, V>(mut self, classes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.classes = Some(collect_bundle(classes));
        self
    }

    /// Reject the first present-but-blank field, checked in declaration order.
    pub fn validate(&self) -> Result<(), StimulusError> {
        let strings = [
            (Field::ControllerName, &self.controller_name),
            (Field::Controller, &self.controller),
            (Field::Target, &self.target),
            (Field::Action, &self.action),
        ];
        for (field, value) in strings {
            if value.as_deref().is_some_and(is_blank) {
                return Err(StimulusError::blank(field));
            }
        }

        let bundles = [
            (Field::Params, &self.params),
            (Field::Values, &self.values),
            (Field::Classes, &self.classes),
        ];
        for (field, bundle) in bundles {
            if bundle.as_ref().is_some_and(IndexMap::is_empty) {
                return Err(StimulusError::blank(field));
            }
        }

        Ok(())
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

fn collect_bundle<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Bundle
where
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use yare::parameterized;

    #[parameterized(
        lowercase = { "controller", DefaultController::Controller },
        uppercase = { "CONTROLLER", DefaultController::Controller },
        mixed = { "Controller", DefaultController::Controller },
        truthy = { "true", DefaultController::Unset },
        falsy = { "false", DefaultController::Unset },
        other = { "controllers", DefaultController::Unset },
        empty = { "", DefaultController::Unset },
    )]
    fn test_default_controller_from_flag(flag: &str, expected: DefaultController) {
        assert_eq!(DefaultController::from_flag(flag), expected);
    }

    #[parameterized(
        bool_false = { r#"false"#, DefaultController::Unset },
        bool_true = { r#"true"#, DefaultController::Unset },
        capitalized = { r#""Controller""#, DefaultController::Controller },
        uppercase = { r#""CONTROLLER""#, DefaultController::Controller },
        lowercase = { r#""controller""#, DefaultController::Controller },
        unset = { r#""unset""#, DefaultController::Unset },
        other_text = { r#""yes""#, DefaultController::Unset },
    )]
    fn test_default_controller_deserialization(flag: &str, expected: DefaultController) {
        let json = format!(r#"{{"defaultController": {flag}, "target": "button"}}"#);
        let request: DirectiveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.default_controller, expected);
        assert_eq!(request.target.as_deref(), Some("button"));
    }

    #[test]
    fn test_default_controller_rejects_non_flag_types() {
        let result = serde_json::from_str::<DirectiveRequest>(r#"{"defaultController": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_request_is_valid() {
        assert!(DirectiveRequest::new().validate().is_ok());
    }

    #[parameterized(
        controller_name = { DirectiveRequest::new().with_controller_name(""), Field::ControllerName },
        controller = { DirectiveRequest::new().with_controller("  "), Field::Controller },
        target = { DirectiveRequest::new().with_target(""), Field::Target },
        action = { DirectiveRequest::new().with_action("\t\n"), Field::Action },
        params = { DirectiveRequest::new().with_params(Vec::<(String, String)>::new()), Field::Params },
        values = { DirectiveRequest::new().with_values(Vec::<(String, String)>::new()), Field::Values },
        classes = { DirectiveRequest::new().with_classes(Vec::<(String, String)>::new()), Field::Classes },
    )]
    fn test_validate_rejects_blank(request: DirectiveRequest, field: Field) {
        assert_eq!(request.validate(), Err(StimulusError::blank(field)));
    }

    #[test]
    fn test_validate_reports_first_blank_field() {
        let request = DirectiveRequest::new()
            .with_target("")
            .with_controller_name(" ")
            .with_classes(Vec::<(String, String)>::new());
        assert_eq!(
            request.validate(),
            Err(StimulusError::blank(Field::ControllerName))
        );
    }

    #[test]
    fn test_builder_keeps_bundle_order() {
        let request = DirectiveRequest::new()
            .with_param("zeta", "1")
            .with_param("alpha", "2")
            .with_param("mid", "3");
        let keys: Vec<&str> = request
            .params
            .as_ref()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_request_serialization() {
        let request = DirectiveRequest::new()
            .with_default_controller()
            .with_target("button")
            .with_action("click->doThing")
            .with_value("url", "https://example.com");
        let serialized = serde_json::to_value(&request).unwrap();

        insta::with_settings!({sort_maps => true}, {
            assert_json_snapshot!(serialized, @r#"
            {
              "action": "click->doThing",
              "defaultController": "controller",
              "target": "button",
              "values": {
                "url": "https://example.com"
              }
            }
            "#);
        });

        let deserialized: DirectiveRequest = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, request);
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: DirectiveRequest =
            serde_json::from_str(r#"{"controllerName": "tabs", "params": {"this_thing": "x"}}"#)
                .unwrap();
        assert_eq!(request.default_controller, DefaultController::Unset);
        assert_eq!(request.controller_name.as_deref(), Some("tabs"));
        assert_eq!(
            request.params.unwrap().get("this_thing").map(String::as_str),
            Some("x")
        );
    }
}
