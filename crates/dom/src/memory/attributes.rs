use crate::host::AttributeTarget;

/// Ordered attribute list with case-insensitive names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct AttributeMap {
    entries: Vec<(String, String)>,
    mutations: usize,
}

impl AttributeMap {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn set(&mut self, name: &str, value: &str) {
        self.mutations += 1;
        match self
            .entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }

    pub(crate) fn remove(&mut self, name: &str) {
        self.mutations += 1;
        self.entries.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
    }

    /// Number of set/remove calls, including ones that changed nothing.
    pub(crate) fn mutations(&self) -> usize {
        self.mutations
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// The element that renders the validation message (`p.invalid`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageElement {
    attributes: AttributeMap,
}

impl MessageElement {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AttributeTarget for MessageElement {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }
}
