use strum_macros::Display;
use tracing::debug;

use crate::action::expand_actions;
use crate::casing::dash_case;
use crate::error::StimulusError;
use crate::types::{Bundle, DirectiveMap, DirectiveRequest, is_blank};

pub const CONTROLLER_KEY: &str = "data-controller";
pub const ACTION_KEY: &str = "data-action";

/// The suffix each bundle contributes to its keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum BundleKind {
    Param,
    Value,
    Class,
}

/// Build the key for one bundle entry: `data-{controller}-{key}-{kind}`.
pub fn bundle_key(controller: &str, key: &str, kind: BundleKind) -> String {
    format!("data-{controller}-{}-{kind}", dash_case(key))
}

/// Build the target key: `data-{controller}-target`.
pub fn target_key(controller: &str) -> String {
    format!("data-{controller}-target")
}

/// Compile a directive request into its attribute map.
///
/// `local_name` is the controller name derived from the host type. An
/// explicit `controller_name` replaces it for every key after
/// `data-controller`. The request is validated before anything is built, so
/// a blank field never yields a partial map.
///
/// Example:
/// ```rust
/// use stimulizer_core::{DirectiveRequest, compile};
/// let request = DirectiveRequest::new()
///     .with_default_controller()
///     .with_action("click->doThing")
///     .with_target("button");
/// let map = compile(&request, "foo").unwrap();
/// assert_eq!(map.get("data-controller"), Some("foo"));
/// assert_eq!(map.get("data-action"), Some("click->foo#doThing"));
/// assert_eq!(map.get("data-foo-target"), Some("button"));
/// ```
pub fn compile(
    request: &DirectiveRequest,
    local_name: &str,
) -> Result<DirectiveMap, StimulusError> {
    request.validate()?;
    debug!(event = "Compile", phase = "Validated", local_name = local_name);

    let mut map = DirectiveMap::new();

    // 1. Controllers. An explicit controller name is appended as given and
    //    takes over the namespace of every later key.
    let mut controllers: Vec<&str> = Vec::new();
    let mut effective = local_name;
    if request.default_controller.is_set() {
        controllers.push(local_name);
    } else if let Some(name) = request.controller_name.as_deref() {
        controllers.push(name);
        effective = name;
    }
    if let Some(extra) = request.controller.as_deref() {
        controllers.push(extra);
    }
    let controller_value = controllers.join(" ");
    if !is_blank(&controller_value) {
        map.insert(CONTROLLER_KEY, controller_value);
    }
    debug!(
        event = "Compile",
        phase = "Controller",
        effective = effective,
        controller = map.get(CONTROLLER_KEY)
    );

    // 2. Actions
    if let Some(action) = request.action.as_deref() {
        let expanded = expand_actions(action, effective);
        debug!(event = "Compile", phase = "Actions", action = expanded.as_str());
        map.insert(ACTION_KEY, expanded);
    }

    // 3. Params, values, classes
    let bundles = [
        (BundleKind::Param, &request.params),
        (BundleKind::Value, &request.values),
        (BundleKind::Class, &request.classes),
    ];
    for (kind, bundle) in bundles {
        if let Some(bundle) = bundle {
            insert_bundle(&mut map, effective, bundle, kind);
        }
    }

    // 4. Target
    if let Some(target) = request.target.as_deref() {
        map.insert(target_key(effective), target);
    }

    debug!(event = "Compile", phase = "Done", keys = map.len());
    Ok(map)
}

fn insert_bundle(map: &mut DirectiveMap, controller: &str, bundle: &Bundle, kind: BundleKind) {
    for (key, value) in bundle {
        map.insert(bundle_key(controller, key, kind), value.as_str());
    }
    debug!(
        event = "Compile",
        phase = "Bundle",
        kind = %kind,
        entries = bundle.len()
    );
}
