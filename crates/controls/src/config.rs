use std::time::Duration;

/// Timings and names shared by the units of one control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlConfig {
    /// Delay of the synthetic click after Enter or Space activation.
    pub click_delay: Duration,
    /// How long `role="alert"` stays on the validation message.
    pub alert_role_duration: Duration,
    /// Delay before `tabindex` is restored after Shift+Tab (one frame).
    pub tab_restore_delay: Duration,
    /// Prefix of generated label ids.
    pub label_id_prefix: String,
    /// ARIA attribute reflecting the active state of a toggle.
    pub aria_active_attribute: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            click_delay: Duration::from_millis(1),
            alert_role_duration: Duration::from_millis(1000),
            tab_restore_delay: Duration::from_millis(1),
            label_id_prefix: "anypoint-input-label-".to_string(),
            aria_active_attribute: "aria-pressed".to_string(),
        }
    }
}

impl ControlConfig {
    pub fn with_click_delay(mut self, delay: Duration) -> Self {
        self.click_delay = delay;
        self
    }

    pub fn with_alert_role_duration(mut self, duration: Duration) -> Self {
        self.alert_role_duration = duration;
        self
    }

    pub fn with_tab_restore_delay(mut self, delay: Duration) -> Self {
        self.tab_restore_delay = delay;
        self
    }

    pub fn with_label_id_prefix(mut self, prefix: &str) -> Self {
        self.label_id_prefix = prefix.to_string();
        self
    }

    /// e.g. `"aria-checked"` for a switch-like control.
    pub fn with_aria_active_attribute(mut self, name: &str) -> Self {
        self.aria_active_attribute = name.to_string();
        self
    }
}
