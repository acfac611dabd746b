//! Declarative interaction scenarios.
//!
//! A manifest lists scenarios, each naming a widget, how to set up its host,
//! a sequence of steps and the expected end state. Steps are short strings
//! such as `click`, `keydown:Enter` or `advance:1`; see [`parse_step`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const SCENARIOS_FORMAT_V1: &str = "control-scenarios-v1";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub format: String,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    Button,
    TextInput,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    #[default]
    Active,
    Skip,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Scenario {
    pub id: String,
    pub widget: WidgetKind,
    #[serde(default)]
    pub status: ScenarioStatus,
    pub reason: Option<String>,
    #[serde(default)]
    pub setup: Setup,
    /// Properties applied in order of name before the first step.
    #[serde(default)]
    pub props: BTreeMap<String, PropValue>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub expect: Expect,
}

/// How the in-memory host is built.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Setup {
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Type of the editable field; text inputs get a `text` field by default.
    pub field_type: Option<String>,
    #[serde(default)]
    pub message_element: bool,
    #[serde(default)]
    pub form_internals: bool,
    /// Text of an element slotted into `label`.
    pub label: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Expect {
    #[serde(default)]
    pub props: BTreeMap<String, PropValue>,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub absent_attributes: Vec<String>,
    /// Formatted events, compared in order when present.
    pub events: Option<Vec<String>>,
    /// Restrict `events` to these names.
    #[serde(default)]
    pub event_names: Vec<String>,
    pub synthetic_clicks: Option<usize>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Text(String),
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Int(value) => write!(f, "{value}"),
            PropValue::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Focus,
    Blur,
    MouseOver,
    MouseLeave,
    MouseDown,
    MouseUp,
    Click,
    /// Key name as in `KeyboardEvent.key`, optionally with `shift+`.
    KeyDown { key: String, shift: bool },
    KeyUp { key: String, shift: bool },
    /// Key press: keydown, then keyup.
    Press { key: String, shift: bool },
    /// Typed characters: keydown each, edit the field and fire `input`
    /// unless the keydown was prevented.
    Type(String),
    /// Paste into the field, then fire `input`.
    Paste(String),
    /// Native `change` from the field.
    Change,
    /// Move the clock by this many milliseconds.
    Advance(u64),
    Validate,
    FirstRender,
    Connect,
    Disconnect,
    Set { prop: String, value: String },
}

/// Parse one step string.
///
/// `name` or `name:argument`; `set:prop=value` assigns a property.
pub fn parse_step(raw: &str) -> Result<Step, String> {
    let (name, arg) = match raw.split_once(':') {
        Some((name, arg)) => (name.trim(), Some(arg)),
        None => (raw.trim(), None),
    };
    let need_arg = || arg.ok_or_else(|| format!("step '{raw}' needs an argument"));
    let step = match name {
        "focus" => Step::Focus,
        "blur" => Step::Blur,
        "mouseover" => Step::MouseOver,
        "mouseleave" => Step::MouseLeave,
        "mousedown" => Step::MouseDown,
        "mouseup" => Step::MouseUp,
        "click" => Step::Click,
        "change" => Step::Change,
        "validate" => Step::Validate,
        "first-render" => Step::FirstRender,
        "connect" => Step::Connect,
        "disconnect" => Step::Disconnect,
        "keydown" | "keyup" | "press" => {
            let (key, shift) = parse_key(need_arg()?)?;
            match name {
                "keydown" => Step::KeyDown { key, shift },
                "keyup" => Step::KeyUp { key, shift },
                _ => Step::Press { key, shift },
            }
        }
        "type" => Step::Type(need_arg()?.to_string()),
        "paste" => Step::Paste(need_arg()?.to_string()),
        "advance" => {
            let ms = need_arg()?;
            Step::Advance(
                ms.trim()
                    .parse()
                    .map_err(|err| format!("bad duration in step '{raw}': {err}"))?,
            )
        }
        "set" => {
            let (prop, value) = need_arg()?
                .split_once('=')
                .ok_or_else(|| format!("step '{raw}' must be set:prop=value"))?;
            Step::Set {
                prop: prop.trim().to_string(),
                value: value.to_string(),
            }
        }
        other => return Err(format!("unknown step '{other}'")),
    };
    if arg.is_some()
        && !matches!(
            step,
            Step::KeyDown { .. }
                | Step::KeyUp { .. }
                | Step::Press { .. }
                | Step::Type(_)
                | Step::Paste(_)
                | Step::Advance(_)
                | Step::Set { .. }
        )
    {
        return Err(format!("step '{name}' takes no argument"));
    }
    Ok(step)
}

fn parse_key(arg: &str) -> Result<(String, bool), String> {
    let (key, shift) = match arg.strip_prefix("shift+") {
        Some(rest) => (rest, true),
        None => (arg, false),
    };
    if key.is_empty() {
        return Err(format!("missing key in '{arg}'"));
    }
    // Manifests spell the space bar out.
    let key = if key == "Space" { " " } else { key };
    Ok((key.to_string(), shift))
}

/// Load and check a scenario manifest. Panics with the offending path on any
/// problem, since a broken manifest is a broken test.
pub fn load_scenarios(path: &Path) -> Vec<Scenario> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read scenario manifest {path:?}: {err}"));
    let manifest: Manifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse scenario manifest {path:?}: {err}"));
    assert_eq!(
        manifest.format, SCENARIOS_FORMAT_V1,
        "unsupported scenario manifest format in {path:?}"
    );

    let mut seen = BTreeSet::new();
    for scenario in &manifest.scenarios {
        let id = &scenario.id;
        if !seen.insert(id.clone()) {
            panic!("duplicate scenario id '{id}' in {path:?}");
        }
        match scenario.status {
            ScenarioStatus::Active => {
                if scenario.reason.is_some() {
                    panic!("scenario '{id}' has reason but is not skipped in {path:?}");
                }
            }
            ScenarioStatus::Skip => {
                if scenario.reason.as_deref().unwrap_or("").is_empty() {
                    panic!("skipped scenario '{id}' missing reason in {path:?}");
                }
            }
        }
        if scenario.steps.is_empty() {
            panic!("scenario '{id}' has no steps in {path:?}");
        }
        for raw in &scenario.steps {
            if let Err(err) = parse_step(raw) {
                panic!("scenario '{id}' in {path:?}: {err}");
            }
        }
    }
    manifest.scenarios
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_argument_steps() {
        assert_eq!(parse_step("click"), Ok(Step::Click));
        assert_eq!(
            parse_step("keydown:Enter"),
            Ok(Step::KeyDown {
                key: "Enter".to_string(),
                shift: false
            })
        );
        assert_eq!(
            parse_step("press:shift+Tab"),
            Ok(Step::Press {
                key: "Tab".to_string(),
                shift: true
            })
        );
        assert_eq!(
            parse_step("keyup:Space"),
            Ok(Step::KeyUp {
                key: " ".to_string(),
                shift: false
            })
        );
        assert_eq!(parse_step("advance:1000"), Ok(Step::Advance(1000)));
        assert_eq!(parse_step("type:a:b"), Ok(Step::Type("a:b".to_string())));
        assert_eq!(
            parse_step("set:disabled=true"),
            Ok(Step::Set {
                prop: "disabled".to_string(),
                value: "true".to_string()
            })
        );
    }

    #[test]
    fn rejects_malformed_steps() {
        assert!(parse_step("hover").is_err());
        assert!(parse_step("keydown").is_err());
        assert!(parse_step("keydown:shift+").is_err());
        assert!(parse_step("advance:soon").is_err());
        assert!(parse_step("set:disabled").is_err());
        assert!(parse_step("click:twice").is_err());
    }

    #[test]
    fn manifest_deserializes_with_defaults() {
        let manifest: Manifest = toml::from_str(
            r#"
format = "control-scenarios-v1"

[[scenarios]]
id = "toggle"
widget = "button"
steps = ["click"]

[scenarios.props]
toggles = true

[scenarios.expect.props]
active = true
"#,
        )
        .unwrap();
        let scenario = &manifest.scenarios[0];
        assert_eq!(scenario.widget, WidgetKind::Button);
        assert_eq!(scenario.status, ScenarioStatus::Active);
        assert_eq!(scenario.setup, Setup::default());
        assert_eq!(scenario.props.get("toggles"), Some(&PropValue::Bool(true)));
        assert_eq!(scenario.expect.props["active"].to_string(), "true");
        assert!(scenario.expect.events.is_none());
    }
}
