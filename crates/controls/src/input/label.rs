use dom::ElementHost;
use log::debug;

use super::{TARGET, ValidatableInputUnit};

impl ValidatableInputUnit {
    /// Point `aria-labelledby` of the field at the first element slotted
    /// into `label`, giving it an id when it has none.
    pub(super) fn update_aria_labelled_by<H: ElementHost + ?Sized>(&mut self, host: &mut H) {
        let resolved = {
            let Some(nodes) = host.assigned_nodes("label") else {
                debug!(target: TARGET, "no label slot rendered");
                return;
            };
            if nodes.is_empty() {
                return;
            }
            match nodes.into_iter().find(|node| node.is_element()) {
                None => None,
                Some(label) => {
                    let existing = label.attr("id").filter(|id| !id.is_empty()).map(str::to_string);
                    Some(match existing {
                        Some(id) => id,
                        None => {
                            let id = self.label_ids.next_id();
                            label.set_attr("id", &id);
                            id
                        }
                    })
                }
            }
        };
        self.aria_labelled_by = resolved;
        if let Some(field) = host.editable_field() {
            match &self.aria_labelled_by {
                Some(id) => field.set_attribute("aria-labelledby", id),
                None => field.remove_attribute("aria-labelledby"),
            }
        }
    }
}
