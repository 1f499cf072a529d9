//! Classification of code points above the ASCII range.

use icu_properties::CodePointSetData;
use icu_properties::props::{IdContinue, IdStart};

/// Whether `ch` may start an identifier.
#[inline]
pub(crate) fn is_id_start(ch: char) -> bool {
    CodePointSetData::new::<IdStart>().contains(ch)
}

/// Whether `ch` may continue an identifier.
///
/// ZWNJ and ZWJ are valid identifier parts even though `ID_Continue` excludes
/// them.
#[inline]
pub(crate) fn is_id_continue(ch: char) -> bool {
    matches!(ch, '\u{200C}' | '\u{200D}') || CodePointSetData::new::<IdContinue>().contains(ch)
}

/// Whether `ch` is whitespace for the purposes of the scanner.
///
/// The language uses `Space_Separator` plus a handful of explicit entries, a
/// different set from `char::is_whitespace`:
///  * `\u{0009}`, `\u{000B}`, `\u{000C}`, `\u{FEFF}` are whitespace here,
///  * line terminators are not (they are classified separately).
///
/// Only code points at or above `0x80` reach this function; the ASCII entries
/// live in the static class table.
#[inline]
pub(crate) fn is_space_separator(ch: char) -> bool {
    matches!(
        ch,
        '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Whether `ch` is one of the non-ASCII line terminators (LS, PS).
#[inline]
pub(crate) fn is_line_separator(ch: char) -> bool {
    matches!(ch, '\u{2028}' | '\u{2029}')
}
