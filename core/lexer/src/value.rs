//! Values attached to literal tokens.

use num_bigint::BigInt;
use num_traits::Num;
use std::borrow::Cow;

/// The decoded value of the most recent token.
///
/// Populated by the literal rules; everything else leaves it unset. The
/// decoders are lenient: a malformed escape falls back to the literal text
/// instead of failing, since the scanner never errors at its interface.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum TokenValue {
    /// No value attached.
    #[default]
    None,
    /// A numeric literal value.
    Number(f64),
    /// A BigInt literal value (`123n`).
    BigInt(BigInt),
    /// A decoded string literal.
    Str(Box<str>),
    /// A regular expression literal, split into its parts.
    Regex {
        /// The text between the enclosing slashes.
        pattern: Box<str>,
        /// The flag letters after the closing slash.
        flags: Box<str>,
    },
}

/// Decodes a numeric literal: radix prefixes, `_` separators, BigInt suffix.
pub(crate) fn numeric(text: &str) -> TokenValue {
    let (body, is_bigint) = match text.strip_suffix('n') {
        Some(body) => (body, true),
        None => (text, false),
    };
    let (radix, digits) = split_radix(body);
    let digits = strip_separators(digits);

    if is_bigint {
        match BigInt::from_str_radix(&digits, radix) {
            Ok(value) => TokenValue::BigInt(value),
            Err(_) => TokenValue::None,
        }
    } else if radix == 10 {
        match fast_float2::parse::<f64, _>(digits.as_bytes()) {
            Ok(value) => TokenValue::Number(value),
            Err(_) => TokenValue::None,
        }
    } else {
        // Fold digit by digit so literals beyond integer range degrade the
        // same way the runtime would, losing precision rather than failing.
        let value = digits.chars().fold(0.0_f64, |acc, c| {
            acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
        });
        TokenValue::Number(value)
    }
}

fn split_radix(text: &str) -> (u32, &str) {
    let bytes = text.as_bytes();
    if bytes.len() > 2 && bytes[0] == b'0' {
        match bytes[1] {
            b'x' | b'X' => (16, &text[2..]),
            b'o' | b'O' => (8, &text[2..]),
            b'b' | b'B' => (2, &text[2..]),
            _ => (10, text),
        }
    } else {
        (10, text)
    }
}

fn strip_separators(text: &str) -> Cow<'_, str> {
    if text.contains('_') {
        Cow::Owned(text.chars().filter(|&c| c != '_').collect())
    } else {
        Cow::Borrowed(text)
    }
}

/// Decodes a string literal, processing escape sequences.
pub(crate) fn string(text: &str) -> TokenValue {
    let body = &text[1..text.len() - 1];
    if !body.contains('\\') {
        return TokenValue::Str(body.into());
    }

    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(body.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(&esc) = chars.get(i) else { break };
        i += 1;
        match esc {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{C}'),
            'v' => out.push('\u{B}'),
            '0' => out.push('\0'),
            'x' => match hex_digits(&chars, i, 2) {
                Some(code) => {
                    push_code_point(&mut out, code);
                    i += 2;
                }
                None => out.push(esc),
            },
            'u' => i = unicode_escape(&chars, i, &mut out),
            // Line continuation: an escaped terminator produces nothing.
            '\r' => {
                if chars.get(i) == Some(&'\n') {
                    i += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }
    TokenValue::Str(out.into())
}

/// Decodes `\u{…}` and `\uXXXX` (with surrogate-pair combining) starting at
/// `i`, the index just past the `u`. Returns the index after the escape.
fn unicode_escape(chars: &[char], i: usize, out: &mut String) -> usize {
    if chars.get(i) == Some(&'{') {
        let mut j = i + 1;
        let mut code: u32 = 0;
        while let Some(d) = chars.get(j).and_then(|c| c.to_digit(16)) {
            code = code.saturating_mul(16).saturating_add(d);
            j += 1;
        }
        if chars.get(j) == Some(&'}') && j > i + 1 {
            push_code_point(out, code);
            return j + 1;
        }
        out.push('u');
        return i;
    }

    let Some(first) = hex_digits(chars, i, 4) else {
        out.push('u');
        return i;
    };
    // A high surrogate may pair with an immediately following `\uXXXX`.
    if (0xD800..=0xDBFF).contains(&first)
        && chars.get(i + 4) == Some(&'\\')
        && chars.get(i + 5) == Some(&'u')
    {
        if let Some(second) = hex_digits(chars, i + 6, 4) {
            if (0xDC00..=0xDFFF).contains(&second) {
                let combined = 0x10000 + ((first - 0xD800) << 10) + (second - 0xDC00);
                push_code_point(out, combined);
                return i + 10;
            }
        }
    }
    push_code_point(out, first);
    i + 4
}

fn hex_digits(chars: &[char], start: usize, count: usize) -> Option<u32> {
    let mut value: u32 = 0;
    for offset in 0..count {
        value = value * 16 + chars.get(start + offset)?.to_digit(16)?;
    }
    Some(value)
}

fn push_code_point(out: &mut String, code: u32) {
    out.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
}

/// Decodes a JSX attribute string: quotes stripped, no escape processing.
pub(crate) fn jsx_string(text: &str) -> TokenValue {
    TokenValue::Str(text[1..text.len() - 1].into())
}

/// Splits a regular expression literal into pattern and flags.
pub(crate) fn regex(text: &str) -> TokenValue {
    let close = text.rfind('/').unwrap_or(0);
    TokenValue::Regex {
        pattern: text[1..close.max(1)].into(),
        flags: text[close + 1..].into(),
    }
}
