/// A boolean as it arrives at a property boundary: either a real boolean or
/// the string form used by attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoolAttr {
    Bool(bool),
    Text(String),
    /// Property set to nothing (an absent attribute).
    Missing,
}

impl BoolAttr {
    /// `true`, `"true"` and `""` (attribute present without value) mean true.
    /// Everything else, `"false"` included, means false.
    pub fn is_true(&self) -> bool {
        match self {
            BoolAttr::Bool(v) => *v,
            BoolAttr::Text(t) => t.is_empty() || t == "true",
            BoolAttr::Missing => false,
        }
    }
}

impl From<bool> for BoolAttr {
    fn from(value: bool) -> Self {
        BoolAttr::Bool(value)
    }
}

impl From<&str> for BoolAttr {
    fn from(value: &str) -> Self {
        BoolAttr::Text(value.to_string())
    }
}

impl From<String> for BoolAttr {
    fn from(value: String) -> Self {
        BoolAttr::Text(value)
    }
}

impl From<Option<&str>> for BoolAttr {
    fn from(value: Option<&str>) -> Self {
        value.map_or(BoolAttr::Missing, BoolAttr::from)
    }
}

impl From<BoolAttr> for bool {
    fn from(value: BoolAttr) -> Self {
        value.is_true()
    }
}

/// Coerce a property value to a boolean.
///
/// ```
/// use controls::boolean_property;
///
/// assert!(boolean_property(true));
/// assert!(boolean_property(""));
/// assert!(boolean_property("true"));
/// assert!(!boolean_property("false"));
/// assert!(!boolean_property(None::<&str>));
/// ```
pub fn boolean_property(value: impl Into<BoolAttr>) -> bool {
    value.into().is_true()
}
