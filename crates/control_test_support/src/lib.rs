//! Shared helpers for control tests: text diffing, event formatting and the
//! scenario manifest.

pub mod scenario;

use dom::{CustomEvent, DetailValue, EventDetail};

pub use scenario::{
    Expect, Manifest, PropValue, SCENARIOS_FORMAT_V1, Scenario, ScenarioStatus, Setup, Step,
    WidgetKind, load_scenarios, parse_step,
};

pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ch if ch < ' ' => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// One line per event: name, detail, then the propagation flags that are set.
///
/// `pressedchange value=true bubbles composed`
pub fn format_event(event: &CustomEvent) -> String {
    let mut out = event.name.clone();
    match &event.detail {
        EventDetail::None => {}
        EventDetail::Value(DetailValue::Bool(value)) => {
            out.push_str(&format!(" value={value}"));
        }
        EventDetail::Value(DetailValue::String(value)) => {
            out.push_str(&format!(" value=\"{}\"", escape_text(value)));
        }
        EventDetail::Text(text) => {
            out.push_str(&format!(" text=\"{}\"", escape_text(text)));
        }
        EventDetail::SourceEvent(source) => {
            out.push_str(&format!(" source={}", source.as_str()));
        }
    }
    if event.bubbles {
        out.push_str(" bubbles");
    }
    if event.composed {
        out.push_str(" composed");
    }
    if event.cancelable {
        out.push_str(" cancelable");
    }
    out
}

/// Format the events whose name is in `names`; every event when `names` is
/// empty.
pub fn event_lines(events: &[CustomEvent], names: &[String]) -> Vec<String> {
    events
        .iter()
        .filter(|event| names.is_empty() || names.iter().any(|n| *n == event.name))
        .map(format_event)
        .collect()
}

pub fn diff_lines(expected: &[String], actual: &[String]) -> String {
    let max = expected.len().max(actual.len());
    let mut out = String::new();
    use std::fmt::Write;
    let missing = "<missing>";
    let mismatch = (0..max).find(|&i| {
        let left = expected.get(i).map(String::as_str).unwrap_or(missing);
        let right = actual.get(i).map(String::as_str).unwrap_or(missing);
        left != right
    });
    if let Some(i) = mismatch {
        let start = i.saturating_sub(2);
        let end = (i + 3).min(max);
        let _ = writeln!(
            &mut out,
            "first mismatch at line {} (showing {}..={}):",
            i + 1,
            start + 1,
            end
        );
        for line_idx in start..end {
            let left = expected
                .get(line_idx)
                .map(String::as_str)
                .unwrap_or(missing);
            let right = actual.get(line_idx).map(String::as_str).unwrap_or(missing);
            let marker = if line_idx == i { ">" } else { " " };
            let _ = writeln!(&mut out, "{marker} {:>4}  expected: {left}", line_idx + 1);
            let _ = writeln!(&mut out, "{marker} {:>4}    actual: {right}", line_idx + 1);
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dom::EventType;

    #[test]
    fn escapes_quotes_and_controls() {
        assert_eq!(escape_text("a\"b\n\u{1}"), "a\\\"b\\n\\u{01}");
    }

    #[test]
    fn formats_value_and_flags() {
        let event = CustomEvent::value("pressedchange", true).bubbling_composed();
        assert_eq!(format_event(&event), "pressedchange value=true bubbles composed");

        let event = CustomEvent::value("changed", "a\"b");
        assert_eq!(format_event(&event), "changed value=\"a\\\"b\"");
    }

    #[test]
    fn formats_retargeted_change() {
        let event = CustomEvent {
            name: "change".to_string(),
            detail: EventDetail::SourceEvent(EventType::Change),
            bubbles: true,
            cancelable: false,
            composed: false,
        };
        assert_eq!(format_event(&event), "change source=change bubbles");
    }

    #[test]
    fn filters_event_lines_by_name() {
        let events = vec![
            CustomEvent::value("activechange", true),
            CustomEvent::value("pressedchange", false),
        ];
        let lines = event_lines(&events, &["pressedchange".to_string()]);
        assert_eq!(lines, vec!["pressedchange value=false"]);
        assert_eq!(event_lines(&events, &[]).len(), 2);
    }

    #[test]
    fn diff_points_at_first_mismatch() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let actual = vec!["a".to_string(), "c".to_string(), "d".to_string()];
        let diff = diff_lines(&expected, &actual);
        assert!(diff.starts_with("first mismatch at line 2"));
        assert!(diff.contains(">    2  expected: b"));
        assert!(diff.contains("expected 2 lines, actual 3 lines"));
    }
}
