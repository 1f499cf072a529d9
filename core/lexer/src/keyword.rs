//! Keyword post-filter.
//!
//! The DFA accepts every identifier through one generic rule; reserved words
//! and contextual keywords are recognized afterwards without rescanning the
//! text. The scanner folds each consumed code point into a rolling hash
//! (`h = h * 31 + c`, wrapping), which dispatches into 128 buckets here. A
//! candidate replaces the identifier rule only when both the full hash and
//! the token text match, so false bucket collisions are harmless.

/// A bucket candidate: full hash, keyword literal, replacement rule.
type Entry = (u32, &'static str, u16);

/// Looks up a replacement rule for an identifier with the given rolling hash
/// and text. Returns `None` for plain identifiers.
pub(crate) fn lookup(hash: u32, text: &str) -> Option<u16> {
    bucket(hash)
        .iter()
        .find(|&&(h, kw, _)| h == hash && kw == text)
        .map(|&(_, _, rule)| rule)
}

fn bucket(hash: u32) -> &'static [Entry] {
    match hash & 127 {
        1 => &[(0x002f_9501, "enum", 40)],
        3 => &[(0xcd24_4983, "finally", 20), (0xed41_2583, "private", 55)],
        7 => &[(0x0033_c587, "null", 41)],
        11 => &[(0x0000_0c8b, "do", 16)],
        13 => &[(0x06da_5f8d, "yield", 39)],
        14 => &[(0x0036_758e, "true", 42)],
        17 => &[
            (0xcad5_6011, "string", 62),
            (0xcb7e_7191, "target", 52),
            (0xcccf_b691, "typeof", 34),
        ],
        20 => &[(0x0037_5194, "void", 36)],
        24 => &[(0xcb19_7598, "symbol", 63)],
        25 => &[(0xb22d_2499, "extends", 19)],
        27 => &[(0x0001_a21b, "let", 48)],
        29 => &[(0x0000_0d1d, "if", 23)],
        30 => &[(0x0036_4e9e, "this", 31)],
        32 => &[(0x0001_a9a0, "new", 27)],
        33 => &[(0x20a6_f421, "debugger", 13)],
        34 => &[(0x6749_f022, "abstract", 64)],
        35 => &[(0x05cb_1923, "false", 43)],
        37 => &[(0xb961_73a5, "import", 24), (0x0000_0d25, "in", 25)],
        39 => &[(0xde31_2ca7, "continue", 12), (0x0001_c727, "var", 35)],
        40 => &[(0x03db_6c28, "boolean", 60)],
        42 => &[(0x0030_17aa, "from", 46), (0x0000_0d2a, "is", 67)],
        43 => &[(0xb066_85ab, "delete", 15)],
        44 => &[(0x35c3_d12c, "instanceof", 26)],
        46 => &[(0xdbba_6bae, "protected", 56)],
        48 => &[
            (0x002e_7b30, "case", 8),
            (0xc970_57b0, "implements", 53),
            (0xc84e_3d30, "return", 28),
        ],
        49 => &[(0x06bd_cb31, "while", 37)],
        50 => &[(0x0000_0c32, "as", 44)],
        52 => &[(0xb329_13b4, "export", 18), (0xcafb_b734, "switch", 30)],
        57 => &[(0x002f_8d39, "else", 17), (0x1df5_6d39, "interface", 54)],
        58 => &[(0x0036_8f3a, "type", 71)],
        59 => &[(0x05a0_eebb, "catch", 9), (0x0001_c1bb, "try", 33)],
        65 => &[(0x5c13_d641, "default", 14)],
        66 => &[(0xcc56_be42, "readonly", 72)],
        70 => &[(0x0037_b0c6, "with", 38)],
        73 => &[(0x0001_8cc9, "for", 21), (0xc258_db49, "number", 61)],
        74 => &[(0xef05_ac4a, "unknown", 59)],
        78 => &[(0x05fb_304e, "infer", 75)],
        81 => &[(0xcde6_8bd1, "unique", 74)],
        86 => &[(0x058e_7956, "await", 6), (0x0001_8f56, "get", 47)],
        87 => &[(0x0000_0dd7, "of", 49)],
        88 => &[(0x524f_73d8, "function", 22)],
        91 => &[(0x4aa3_555b, "namespace", 69)],
        98 => &[(0x0001_bc62, "set", 50)],
        99 => &[(0x05a7_3763, "const", 11)],
        101 => &[(0x414f_0165, "require", 70)],
        102 => &[(0x0693_a6e6, "throw", 32)],
        105 => &[(0xc5bd_b269, "public", 57)],
        106 => &[(0x5bee_456a, "declare", 66)],
        108 => &[(0x0001_79ec, "any", 58), (0xc04b_a66c, "module", 68)],
        110 => &[(0xcacd_ce6e, "static", 51)],
        118 => &[(0x0613_9076, "keyof", 73)],
        120 => &[(0x05a5_a978, "class", 10)],
        122 => &[(0xa152_d7fa, "constructor", 65)],
        123 => &[(0x068b_6f7b, "super", 29)],
        124 => &[(0x058d_027c, "async", 45)],
        127 => &[(0x059a_58ff, "break", 7)],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::{bucket, lookup};

    fn rolling_hash(text: &str) -> u32 {
        text.chars()
            .fold(0u32, |h, c| h.wrapping_mul(31).wrapping_add(c as u32))
    }

    #[test]
    fn table_hashes_match_their_literals() {
        let mut seen = 0;
        for b in 0..128u32 {
            for &(hash, kw, rule) in bucket(b) {
                assert_eq!(rolling_hash(kw), hash, "stale hash for {kw:?}");
                assert_eq!(rolling_hash(kw) & 127, b, "{kw:?} is in the wrong bucket");
                assert!((6..=75).contains(&rule), "rule out of range for {kw:?}");
                seen += 1;
            }
        }
        assert_eq!(seen, 70);
    }

    #[test]
    fn replacement_rules_are_unique() {
        let mut rules: Vec<u16> = (0..128u32)
            .flat_map(|b| bucket(b).iter().map(|&(_, _, rule)| rule))
            .collect();
        rules.sort_unstable();
        rules.dedup();
        assert_eq!(rules.len(), 70);
    }

    #[test]
    fn lookup_requires_exact_text() {
        assert_eq!(lookup(rolling_hash("return"), "return"), Some(28));
        assert_eq!(lookup(rolling_hash("return"), "returnx"), None);
        assert_eq!(lookup(rolling_hash("notakeyword"), "notakeyword"), None);
    }
}
