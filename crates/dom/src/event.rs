use core_types::NodeId;

/// Native event types a control listens for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventType {
    Focus,
    Blur,
    MouseOver,
    MouseLeave,
    MouseDown,
    MouseUp,
    Click,
    KeyDown,
    KeyUp,
    /// `input` fired by the editable field after its value changed.
    Input,
    /// `change` fired by the editable field when an edit is committed.
    Change,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::MouseOver => "mouseover",
            EventType::MouseLeave => "mouseleave",
            EventType::MouseDown => "mousedown",
            EventType::MouseUp => "mouseup",
            EventType::Click => "click",
            EventType::KeyDown => "keydown",
            EventType::KeyUp => "keyup",
            EventType::Input => "input",
            EventType::Change => "change",
        }
    }
}

/// Keyboard fields of a key event, mirroring `KeyboardEventInit`.
///
/// `key_code` and `char_code` carry the legacy numeric codes because the
/// printable-key heuristics are defined in terms of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardInit {
    pub key: String,
    pub code: String,
    pub key_code: u32,
    pub char_code: u32,
    pub shift_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub alt_key: bool,
    pub is_composing: bool,
}

impl KeyboardInit {
    /// A key producing the character `ch`, with US-layout legacy codes.
    pub fn character(ch: char) -> Self {
        let code = if ch.is_ascii_alphabetic() {
            format!("Key{}", ch.to_ascii_uppercase())
        } else if ch.is_ascii_digit() {
            format!("Digit{ch}")
        } else {
            String::new()
        };
        Self {
            key: ch.to_string(),
            code,
            key_code: legacy_key_code(ch),
            ..Self::default()
        }
    }

    /// A named key such as `"Enter"`, `"Tab"` or `"ArrowLeft"`.
    ///
    /// `" "` and `"Space"` both produce the space bar.
    pub fn named(key: &str) -> Self {
        let (key, code, key_code) = match key {
            "Enter" => ("Enter", "Enter", 13),
            "NumpadEnter" => ("Enter", "NumpadEnter", 13),
            " " | "Space" => (" ", "Space", 32),
            "Tab" => ("Tab", "Tab", 9),
            "Backspace" => ("Backspace", "Backspace", 8),
            "Escape" => ("Escape", "Escape", 27),
            "Delete" => ("Delete", "Delete", 46),
            "Insert" => ("Insert", "Insert", 45),
            "Home" => ("Home", "Home", 36),
            "End" => ("End", "End", 35),
            "ArrowLeft" => ("ArrowLeft", "ArrowLeft", 37),
            "ArrowUp" => ("ArrowUp", "ArrowUp", 38),
            "ArrowRight" => ("ArrowRight", "ArrowRight", 39),
            "ArrowDown" => ("ArrowDown", "ArrowDown", 40),
            "Shift" => ("Shift", "ShiftLeft", 16),
            "Control" => ("Control", "ControlLeft", 17),
            "F5" => ("F5", "F5", 116),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    return Self::character(ch);
                }
                (other, other, 0)
            }
        };
        Self {
            key: key.to_string(),
            code: code.to_string(),
            key_code,
            ..Self::default()
        }
    }

    pub fn enter() -> Self {
        Self::named("Enter")
    }

    pub fn space() -> Self {
        Self::named("Space")
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn composing(mut self) -> Self {
        self.is_composing = true;
        self
    }
}

fn legacy_key_code(ch: char) -> u32 {
    match ch {
        'a'..='z' => ch.to_ascii_uppercase() as u32,
        'A'..='Z' | '0'..='9' => ch as u32,
        ' ' => 32,
        ';' | ':' => 186,
        '=' | '+' => 187,
        ',' | '<' => 188,
        '-' | '_' => 189,
        '.' | '>' => 190,
        '/' | '?' => 191,
        '`' | '~' => 192,
        '[' | '{' => 219,
        '\\' | '|' => 220,
        ']' | '}' => 221,
        '\'' | '"' => 222,
        _ => 0,
    }
}

/// A native event delivered to a control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomEvent {
    pub event_type: EventType,
    /// The node the event was dispatched at; `None` when unknown.
    pub target: Option<NodeId>,
    /// Keyboard fields; default for non-keyboard events.
    pub keyboard: KeyboardInit,
    pub bubbles: bool,
    pub cancelable: bool,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn new(event_type: EventType) -> Self {
        let (bubbles, cancelable) = match event_type {
            EventType::Focus | EventType::Blur | EventType::MouseLeave => (false, false),
            EventType::Input | EventType::Change => (true, false),
            _ => (true, true),
        };
        Self {
            event_type,
            target: None,
            keyboard: KeyboardInit::default(),
            bubbles,
            cancelable,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn focus() -> Self {
        Self::new(EventType::Focus)
    }

    pub fn blur() -> Self {
        Self::new(EventType::Blur)
    }

    pub fn mouse_over() -> Self {
        Self::new(EventType::MouseOver)
    }

    pub fn mouse_leave() -> Self {
        Self::new(EventType::MouseLeave)
    }

    pub fn mouse_down() -> Self {
        Self::new(EventType::MouseDown)
    }

    pub fn mouse_up() -> Self {
        Self::new(EventType::MouseUp)
    }

    pub fn click() -> Self {
        Self::new(EventType::Click)
    }

    pub fn input() -> Self {
        Self::new(EventType::Input)
    }

    pub fn change() -> Self {
        Self::new(EventType::Change)
    }

    pub fn key_down(keyboard: KeyboardInit) -> Self {
        Self {
            keyboard,
            ..Self::new(EventType::KeyDown)
        }
    }

    pub fn key_up(keyboard: KeyboardInit) -> Self {
        Self {
            keyboard,
            ..Self::new(EventType::KeyUp)
        }
    }

    pub fn with_target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    /// Has an effect only on cancelable events, as in the DOM.
    pub fn prevent_default(&mut self) {
        if self.cancelable {
            self.default_prevented = true;
        }
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_immediate_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Scalar carried in a `{ value }` event detail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailValue {
    Bool(bool),
    String(String),
}

impl From<bool> for DetailValue {
    fn from(value: bool) -> Self {
        DetailValue::Bool(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::String(value.to_string())
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::String(value)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventDetail {
    None,
    /// `{ value }`
    Value(DetailValue),
    /// `{ text }`, used by `announce`.
    Text(String),
    /// `{ sourceEvent }`, used when re-dispatching a native event.
    SourceEvent(EventType),
}

/// A notification dispatched by a control to the host application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomEvent {
    pub name: String,
    pub detail: EventDetail,
    pub bubbles: bool,
    pub composed: bool,
    pub cancelable: bool,
}

impl CustomEvent {
    pub fn new(name: &str, detail: EventDetail) -> Self {
        Self {
            name: name.to_string(),
            detail,
            bubbles: false,
            composed: false,
            cancelable: false,
        }
    }

    /// `name` with a `{ value }` detail, non-bubbling.
    pub fn value(name: &str, value: impl Into<DetailValue>) -> Self {
        Self::new(name, EventDetail::Value(value.into()))
    }

    /// Builder: make the event bubble and cross shadow boundaries.
    pub fn bubbling_composed(mut self) -> Self {
        self.bubbles = true;
        self.composed = true;
        self
    }

    pub fn value_bool(&self) -> Option<bool> {
        match &self.detail {
            EventDetail::Value(DetailValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn value_str(&self) -> Option<&str> {
        match &self.detail {
            EventDetail::Value(DetailValue::String(v)) => Some(v),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.detail {
            EventDetail::Text(t) => Some(t),
            _ => None,
        }
    }
}
