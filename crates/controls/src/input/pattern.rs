//! Character restriction patterns.

use std::fmt;

use regex::Regex;

/// A pattern source that failed to compile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternError {
    pub pattern: String,
    pub error: String,
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.error)
    }
}

impl std::error::Error for PatternError {}

/// A pattern every single character of the value must match in full.
///
/// ```
/// use controls::CharPattern;
///
/// let digits = CharPattern::new("[0-9]").unwrap();
/// assert!(digits.matches_str("123"));
/// assert!(!digits.matches_str("12a3"));
/// ```
#[derive(Clone, Debug)]
pub struct CharPattern {
    source: String,
    regex: Regex,
}

impl CharPattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let wrapped = format!("^(?:{source})$");
        match Regex::new(&wrapped) {
            Ok(regex) => Ok(Self {
                source: source.to_string(),
                regex,
            }),
            Err(e) => Err(PatternError {
                pattern: source.to_string(),
                error: e.to_string(),
            }),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn matches_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.regex.is_match(ch.encode_utf8(&mut buf))
    }

    /// `true` when every character matches; the empty string always does.
    pub fn matches_str(&self, value: &str) -> bool {
        value.chars().all(|ch| self.matches_char(ch))
    }

    /// The whole value against the anchored pattern, as the native
    /// `pattern` constraint checks it.
    pub fn matches_value(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// `true` when some single character satisfies the pattern on its own.
    ///
    /// Tried on printable ASCII and a handful of non-ASCII letters and
    /// digits; a pattern that needs more than one character never passes.
    pub fn accepts_single_char(&self) -> bool {
        (' '..='~')
            .chain(NON_ASCII_PROBES.chars())
            .any(|ch| self.matches_char(ch))
    }
}

const NON_ASCII_PROBES: &str = "éÉßñжЖλΩ中あ한٣";

impl PartialEq for CharPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

/// Characters a field type accepts when no pattern is configured.
pub(crate) fn default_for_type(input_type: &str) -> Option<&'static str> {
    match input_type {
        "number" => Some("[0-9.,e-]"),
        _ => None,
    }
}
