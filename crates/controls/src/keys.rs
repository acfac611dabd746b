//! Key classification shared by the units.

use dom::KeyboardInit;

pub(crate) fn is_enter(key: &KeyboardInit) -> bool {
    key.code == "Enter" || key.code == "NumpadEnter" || key.key_code == 13
}

pub(crate) fn is_space(key: &KeyboardInit) -> bool {
    key.code == "Space" || key.key_code == 32
}

/// IME composition in progress; `229` is what engines report meanwhile.
pub(crate) fn is_composing(key: &KeyboardInit) -> bool {
    key.is_composing || key.key_code == 229
}

/// Whether a keystroke produces a character.
///
/// Engines disagree on codes for control keys, so two tables apply:
/// codes that always mean a control key, and codes that only do so when no
/// character code accompanies them. Named keys (`"Shift"`, `"F5"`) never
/// produce a character, whatever their codes say.
pub(crate) fn is_printable(key: &KeyboardInit) -> bool {
    if key.key.chars().nth(1).is_some() {
        return false;
    }
    let code = key.key_code;
    let any_non_printable = matches!(code, 8 | 9 | 13 | 27);
    let moz_non_printable =
        matches!(code, 19 | 20 | 45 | 46 | 144 | 145 | 33..=40 | 112..=123);
    !any_non_printable && !(key.char_code == 0 && moz_non_printable)
}
