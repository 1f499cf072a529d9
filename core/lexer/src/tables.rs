//! The tables driving the character scanner.
//!
//! The scanner itself only indexes these tables: a start-state map from the
//! lexer state register, a character-class table, and a flat action table of
//! `state × class` transitions. A transition at or above zero is a scanning
//! state and consumes the classified char; anything below [`FIRST_RULE`]
//! accepts, and the rule number is `FIRST_RULE - transition`. Column 0 is
//! reserved for end of input and accepts in every state, which is what bounds
//! the scan loop.
//!
//! The automaton is specified below as a transition listing and materialized
//! once into the flat array; after that it is immutable shared data.

use once_cell::sync::Lazy;

use crate::token::Token;
use crate::unicode;

// --- rules -----------------------------------------------------------------

/// Accepting transitions encode `FIRST_RULE - rule`.
pub(crate) const FIRST_RULE: i16 = -1;

pub(crate) const R_INVALID: usize = 0;
pub(crate) const R_EOI: usize = 1;
pub(crate) const R_WHITESPACE: usize = 2;
pub(crate) const R_MULTILINE_COMMENT: usize = 3;
pub(crate) const R_SINGLELINE_COMMENT: usize = 4;
/// Generic identifier; feeds the keyword post-filter. Keyword replacement
/// rules occupy 6..=75.
pub(crate) const R_IDENT: usize = 5;

pub(crate) const R_NUMERIC: usize = 76;
pub(crate) const R_STRING: usize = 77;
pub(crate) const R_REGEX: usize = 78;
pub(crate) const R_TEMPLATE_HEAD: usize = 79;
pub(crate) const R_TEMPLATE_MIDDLE: usize = 80;
pub(crate) const R_TEMPLATE_TAIL: usize = 81;
pub(crate) const R_NO_SUBSTITUTION_TEMPLATE: usize = 82;
pub(crate) const R_JSX_TEXT: usize = 83;
/// JSX-mode identifier: admits `-`, bypasses the keyword filter.
pub(crate) const R_JSX_IDENT: usize = 84;
/// JSX attribute string: no escape processing.
pub(crate) const R_JSX_STRING: usize = 85;

pub(crate) const R_LBRACE: usize = 86;
pub(crate) const R_RBRACE: usize = 87;
pub(crate) const R_LPAREN: usize = 88;
pub(crate) const R_RPAREN: usize = 89;
pub(crate) const R_LBRACK: usize = 90;
pub(crate) const R_RBRACK: usize = 91;
pub(crate) const R_SEMICOLON: usize = 92;
pub(crate) const R_COMMA: usize = 93;
pub(crate) const R_DOT: usize = 94;
pub(crate) const R_DOTDOTDOT: usize = 95;
pub(crate) const R_QUEST: usize = 96;
pub(crate) const R_QUESTDOT: usize = 97;
pub(crate) const R_QUESTQUEST: usize = 98;
pub(crate) const R_QUESTQUEST_ASSIGN: usize = 99;
pub(crate) const R_COLON: usize = 100;
pub(crate) const R_ASSIGN: usize = 101;
pub(crate) const R_EQEQ: usize = 102;
pub(crate) const R_EQEQEQ: usize = 103;
pub(crate) const R_ARROW: usize = 104;
pub(crate) const R_LT: usize = 105;
pub(crate) const R_LTEQ: usize = 106;
pub(crate) const R_SHL: usize = 107;
pub(crate) const R_SHL_ASSIGN: usize = 108;
pub(crate) const R_GT: usize = 109;
pub(crate) const R_GTEQ: usize = 110;
pub(crate) const R_SHR: usize = 111;
/// `?.` directly followed by a decimal digit. Re-emitted as `?` with a rewind
/// so the fraction can be rescanned as a numeric literal.
pub(crate) const R_QUEST_DIGIT: usize = 112;
pub(crate) const R_SHR_ASSIGN: usize = 113;
pub(crate) const R_USHR: usize = 114;
pub(crate) const R_USHR_ASSIGN: usize = 115;
pub(crate) const R_PLUS: usize = 116;
pub(crate) const R_PLUSPLUS: usize = 117;
pub(crate) const R_PLUS_ASSIGN: usize = 118;
pub(crate) const R_MINUS: usize = 119;
pub(crate) const R_MINUSMINUS: usize = 120;
pub(crate) const R_MINUS_ASSIGN: usize = 121;
pub(crate) const R_STAR: usize = 122;
pub(crate) const R_STAR_ASSIGN: usize = 123;
pub(crate) const R_STARSTAR: usize = 124;
pub(crate) const R_STARSTAR_ASSIGN: usize = 125;
pub(crate) const R_DIV: usize = 126;
pub(crate) const R_DIV_ASSIGN: usize = 127;
pub(crate) const R_PERCENT: usize = 128;
pub(crate) const R_PERCENT_ASSIGN: usize = 129;
pub(crate) const R_AMP: usize = 130;
pub(crate) const R_AMPAMP: usize = 131;
pub(crate) const R_AMPAMP_ASSIGN: usize = 132;
pub(crate) const R_AMP_ASSIGN: usize = 133;
pub(crate) const R_PIPE: usize = 134;
pub(crate) const R_PIPEPIPE: usize = 135;
pub(crate) const R_PIPEPIPE_ASSIGN: usize = 136;
pub(crate) const R_PIPE_ASSIGN: usize = 137;
pub(crate) const R_CARET: usize = 138;
pub(crate) const R_CARET_ASSIGN: usize = 139;
pub(crate) const R_EXCL: usize = 140;
pub(crate) const R_NOTEQ: usize = 141;
pub(crate) const R_NOTEQEQ: usize = 142;
pub(crate) const R_TILDE: usize = 143;
pub(crate) const R_AT: usize = 144;
/// `..`, an overshoot while looking for `...`. Re-emitted as `.` with a
/// rewind, like [`R_QUEST_DIGIT`].
pub(crate) const R_DOTDOT: usize = 145;

pub(crate) const NUM_RULES: usize = 146;

/// Maps an accepted rule to the token it produces. Rules with special
/// handling (0, 112, 145) have their token substituted by the scanner.
pub(crate) static RULE_TOKEN: [Token; NUM_RULES] = [
    Token::InvalidToken,           // 0: fallback
    Token::Eoi,                    // 1
    Token::InvalidToken,           // 2: whitespace, discarded before emission
    Token::MultiLineComment,       // 3
    Token::SingleLineComment,      // 4
    Token::Ident,                  // 5
    Token::Await,                  // 6
    Token::Break,                  // 7
    Token::Case,                   // 8
    Token::Catch,                  // 9
    Token::Class,                  // 10
    Token::Const,                  // 11
    Token::Continue,               // 12
    Token::Debugger,               // 13
    Token::Default,                // 14
    Token::Delete,                 // 15
    Token::Do,                     // 16
    Token::Else,                   // 17
    Token::Export,                 // 18
    Token::Extends,                // 19
    Token::Finally,                // 20
    Token::For,                    // 21
    Token::Function,               // 22
    Token::If,                     // 23
    Token::Import,                 // 24
    Token::In,                     // 25
    Token::Instanceof,             // 26
    Token::New,                    // 27
    Token::Return,                 // 28
    Token::Super,                  // 29
    Token::Switch,                 // 30
    Token::This,                   // 31
    Token::Throw,                  // 32
    Token::Try,                    // 33
    Token::Typeof,                 // 34
    Token::Var,                    // 35
    Token::Void,                   // 36
    Token::While,                  // 37
    Token::With,                   // 38
    Token::Yield,                  // 39
    Token::Enum,                   // 40
    Token::Null,                   // 41
    Token::True,                   // 42
    Token::False,                  // 43
    Token::As,                     // 44
    Token::Async,                  // 45
    Token::From,                   // 46
    Token::Get,                    // 47
    Token::Let,                    // 48
    Token::Of,                     // 49
    Token::Set,                    // 50
    Token::Static,                 // 51
    Token::Target,                 // 52
    Token::Implements,             // 53
    Token::Interface,              // 54
    Token::Private,                // 55
    Token::Protected,              // 56
    Token::Public,                 // 57
    Token::Any,                    // 58
    Token::Unknown,                // 59
    Token::Boolean,                // 60
    Token::Number,                 // 61
    Token::String,                 // 62
    Token::Symbol,                 // 63
    Token::Abstract,               // 64
    Token::Constructor,            // 65
    Token::Declare,                // 66
    Token::Is,                     // 67
    Token::Module,                 // 68
    Token::Namespace,              // 69
    Token::Require,                // 70
    Token::Type,                   // 71
    Token::Readonly,               // 72
    Token::Keyof,                  // 73
    Token::Unique,                 // 74
    Token::Infer,                  // 75
    Token::NumericLiteral,         // 76
    Token::StringLiteral,          // 77
    Token::RegexLiteral,           // 78
    Token::TemplateHead,           // 79
    Token::TemplateMiddle,         // 80
    Token::TemplateTail,           // 81
    Token::NoSubstitutionTemplate, // 82
    Token::JsxText,                // 83
    Token::Ident,                  // 84: JSX identifier
    Token::StringLiteral,          // 85: JSX string
    Token::LBrace,                 // 86
    Token::RBrace,                 // 87
    Token::LParen,                 // 88
    Token::RParen,                 // 89
    Token::LBrack,                 // 90
    Token::RBrack,                 // 91
    Token::Semicolon,              // 92
    Token::Comma,                  // 93
    Token::Dot,                    // 94
    Token::DotDotDot,              // 95
    Token::Quest,                  // 96
    Token::QuestDot,               // 97
    Token::QuestQuest,             // 98
    Token::QuestQuestAssign,       // 99
    Token::Colon,                  // 100
    Token::Assign,                 // 101
    Token::EqEq,                   // 102
    Token::EqEqEq,                 // 103
    Token::Arrow,                  // 104
    Token::Lt,                     // 105
    Token::LtEq,                   // 106
    Token::Shl,                    // 107
    Token::ShlAssign,              // 108
    Token::Gt,                     // 109
    Token::GtEq,                   // 110
    Token::Shr,                    // 111
    Token::InvalidToken,           // 112: `?.` + digit, re-emitted as `?`
    Token::ShrAssign,              // 113
    Token::Ushr,                   // 114
    Token::UshrAssign,             // 115
    Token::Plus,                   // 116
    Token::PlusPlus,               // 117
    Token::PlusAssign,             // 118
    Token::Minus,                  // 119
    Token::MinusMinus,             // 120
    Token::MinusAssign,            // 121
    Token::Star,                   // 122
    Token::StarAssign,             // 123
    Token::StarStar,               // 124
    Token::StarStarAssign,         // 125
    Token::Div,                    // 126
    Token::DivAssign,              // 127
    Token::Percent,                // 128
    Token::PercentAssign,          // 129
    Token::Amp,                    // 130
    Token::AmpAmp,                 // 131
    Token::AmpAmpAssign,           // 132
    Token::AmpAssign,              // 133
    Token::Pipe,                   // 134
    Token::PipePipe,               // 135
    Token::PipePipeAssign,         // 136
    Token::PipeAssign,             // 137
    Token::Caret,                  // 138
    Token::CaretAssign,            // 139
    Token::Excl,                   // 140
    Token::NotEq,                  // 141
    Token::NotEqEq,                // 142
    Token::Tilde,                  // 143
    Token::At,                     // 144
    Token::InvalidToken,           // 145: `..`, re-emitted as `.`
];

// --- character classes -----------------------------------------------------

/// Character classes. Class 0 is reserved for end of input.
#[derive(Debug, Clone, Copy)]
#[repr(u8)]
enum Class {
    Eoi = 0,
    Other,
    Space,
    Nl,
    Cr,
    /// Identifier chars without a more specific class below.
    Letter,
    /// Identifier-continue-only code points (combining marks, ZWNJ, ZWJ, …).
    IdPart,
    Dollar,
    Underscore,
    Zero,
    One,
    Dig2_7,
    Dig8_9,
    /// `x` `X`, the hex radix prefix.
    LetterX,
    /// `o` `O`, the octal radix prefix.
    LetterO,
    /// `b` `B`, binary radix prefix and hex digit.
    LetterB,
    /// `e` `E`, exponent marker and hex digit.
    LetterE,
    /// `n`, the BigInt suffix.
    LetterN,
    /// `a c d f A C D F`, the remaining hex digits.
    HexAF,
    Quote,
    DQuote,
    Backtick,
    Backslash,
    Lbrace,
    Rbrace,
    Lparen,
    Rparen,
    Lbrack,
    Rbrack,
    Semi,
    Comma,
    Dot,
    Quest,
    Colon,
    Eq,
    Lt,
    Gt,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Excl,
    Tilde,
    At,
    Count,
}

pub(crate) const NUM_CLASSES: usize = Class::Count as usize;
pub(crate) const CLASS_EOI: usize = Class::Eoi as usize;

const RUNE_CLASS_LEN: usize = 128;

static RUNE_CLASS: [u8; RUNE_CLASS_LEN] = build_rune_class();

const fn build_rune_class() -> [u8; RUNE_CLASS_LEN] {
    let mut table = [Class::Other as u8; RUNE_CLASS_LEN];
    let mut i = 0;
    while i < RUNE_CLASS_LEN {
        let c = i as u8;
        table[i] = (match c {
            b'\t' | 0x0B | 0x0C | b' ' => Class::Space,
            b'\n' => Class::Nl,
            b'\r' => Class::Cr,
            b'$' => Class::Dollar,
            b'_' => Class::Underscore,
            b'0' => Class::Zero,
            b'1' => Class::One,
            b'2'..=b'7' => Class::Dig2_7,
            b'8' | b'9' => Class::Dig8_9,
            b'x' | b'X' => Class::LetterX,
            b'o' | b'O' => Class::LetterO,
            b'b' | b'B' => Class::LetterB,
            b'e' | b'E' => Class::LetterE,
            b'n' => Class::LetterN,
            b'a' | b'c' | b'd' | b'f' | b'A' | b'C' | b'D' | b'F' => Class::HexAF,
            b'g'..=b'm' | b'p'..=b'w' | b'y' | b'z' => Class::Letter,
            b'G'..=b'N' | b'P'..=b'W' | b'Y' | b'Z' => Class::Letter,
            b'\'' => Class::Quote,
            b'"' => Class::DQuote,
            b'`' => Class::Backtick,
            b'\\' => Class::Backslash,
            b'{' => Class::Lbrace,
            b'}' => Class::Rbrace,
            b'(' => Class::Lparen,
            b')' => Class::Rparen,
            b'[' => Class::Lbrack,
            b']' => Class::Rbrack,
            b';' => Class::Semi,
            b',' => Class::Comma,
            b'.' => Class::Dot,
            b'?' => Class::Quest,
            b':' => Class::Colon,
            b'=' => Class::Eq,
            b'<' => Class::Lt,
            b'>' => Class::Gt,
            b'+' => Class::Plus,
            b'-' => Class::Minus,
            b'*' => Class::Star,
            b'/' => Class::Slash,
            b'%' => Class::Percent,
            b'&' => Class::Amp,
            b'|' => Class::Pipe,
            b'^' => Class::Caret,
            b'!' => Class::Excl,
            b'~' => Class::Tilde,
            b'@' => Class::At,
            _ => Class::Other,
        }) as u8;
        i += 1;
    }
    table
}

/// Classifies a code point. ASCII goes through the static table; everything
/// else through the Unicode property checks.
#[inline]
pub(crate) fn classify(ch: char) -> usize {
    let code = ch as usize;
    if code < RUNE_CLASS_LEN {
        usize::from(RUNE_CLASS[code])
    } else {
        map_rune(ch) as usize
    }
}

/// Fallback classification for code points at or above `0x80`.
fn map_rune(ch: char) -> Class {
    if unicode::is_space_separator(ch) {
        Class::Space
    } else if unicode::is_line_separator(ch) {
        Class::Cr
    } else if unicode::is_id_start(ch) {
        Class::Letter
    } else if unicode::is_id_continue(ch) {
        Class::IdPart
    } else {
        Class::Other
    }
}

// --- DFA states ------------------------------------------------------------

/// Scanning states. The `Acc*` rows consume the final char of a token and
/// then accept on every column.
#[derive(Debug, Clone, Copy)]
#[repr(u16)]
enum St {
    // Start states, selected through `STATE_MAP`.
    CodeRe = 0,
    CodeDiv,
    TmplRe,
    TmplDiv,
    TypeArgs,
    JsxTag,
    JsxText,
    // Shared scanning states.
    Ws,
    Ident,
    JsxIdent,
    JsxTextRun,
    // Numeric literals.
    NumZero,
    NumDec,
    NumDecSep,
    NumFrac,
    NumFracSep,
    NumExpStart,
    NumExpSign,
    NumExp,
    NumExpSep,
    NumHexStart,
    NumHex,
    NumHexSep,
    NumOctStart,
    NumOct,
    NumOctSep,
    NumBinStart,
    NumBin,
    NumBinSep,
    NumBigInt,
    NumBad,
    // String literals.
    Str1,
    Str1Esc,
    Str2,
    Str2Esc,
    // Template chunks.
    Tpl,
    TplEsc,
    TplDollar,
    TplMid,
    TplMidEsc,
    TplMidDollar,
    // Slash dispatch, regular expressions.
    SlashRe,
    SlashDiv,
    ReBody,
    ReEsc,
    ReClass,
    ReClassEsc,
    ReFlags,
    // Comments.
    Slc,
    Mlc,
    MlcStar,
    // JSX strings.
    JsxStr1,
    JsxStr2,
    // Punctuator chains.
    Dot1,
    Dot2,
    Quest1,
    QuestDot,
    Qq,
    Eq1,
    Eq2,
    Lt1,
    Shl,
    Gt1,
    Shr,
    Ushr,
    Plus1,
    Minus1,
    Star1,
    StarStar,
    Percent1,
    Amp1,
    AmpAmp,
    Pipe1,
    PipePipe,
    Caret1,
    Excl1,
    NotEq1,
    // Terminal rows.
    AccString,
    AccTplHead,
    AccTplNoSub,
    AccTplMid,
    AccTplTail,
    AccMlc,
    AccJsxStr,
    AccLBrace,
    AccRBrace,
    AccLParen,
    AccRParen,
    AccLBrack,
    AccRBrack,
    AccSemi,
    AccComma,
    AccColon,
    AccTilde,
    AccAt,
    AccLt,
    AccGt,
    AccDiv,
    AccAssign,
    AccDot,
    AccDotDotDot,
    AccQuestDigit,
    AccQqAssign,
    AccEqEqEq,
    AccArrow,
    AccLtEq,
    AccShlAssign,
    AccGtEq,
    AccShrAssign,
    AccUshrAssign,
    AccPlusPlus,
    AccPlusAssign,
    AccMinusMinus,
    AccMinusAssign,
    AccStarAssign,
    AccStarStarAssign,
    AccDivAssign,
    AccPercentAssign,
    AccAmpAmpAssign,
    AccAmpAssign,
    AccPipePipeAssign,
    AccPipeAssign,
    AccCaretAssign,
    AccNotEqEq,
    Count,
}

const NUM_STATES: usize = St::Count as usize;

/// DFA start state for each lexer state register value.
pub(crate) static STATE_MAP: [u16; 10] = [
    St::CodeRe as u16,   // Initial
    St::CodeDiv as u16,  // Div
    St::TmplRe as u16,   // Template
    St::TmplDiv as u16,  // TemplateDiv
    St::CodeRe as u16,   // TemplateExpr
    St::CodeDiv as u16,  // TemplateExprDiv
    St::TypeArgs as u16, // JsxTypeArgs
    St::JsxTag as u16,   // JsxTag
    St::JsxTag as u16,   // JsxClosingTag
    St::JsxText as u16,  // JsxText
];

/// Looks up one transition.
#[inline]
pub(crate) fn action(state: usize, class: usize) -> i16 {
    ACTIONS[state * NUM_CLASSES + class]
}

pub(crate) static ACTIONS: Lazy<Box<[i16]>> = Lazy::new(build_actions);

const fn acc(rule: usize) -> i16 {
    FIRST_RULE - rule as i16
}

// Class groups used by the listing below.
const WS: &[Class] = &[Class::Space, Class::Nl, Class::Cr];
const IDENT_START: &[Class] = &[
    Class::Letter,
    Class::Dollar,
    Class::Underscore,
    Class::LetterX,
    Class::LetterO,
    Class::LetterB,
    Class::LetterE,
    Class::LetterN,
    Class::HexAF,
];
const IDENT_CONT: &[Class] = &[
    Class::Letter,
    Class::Dollar,
    Class::Underscore,
    Class::LetterX,
    Class::LetterO,
    Class::LetterB,
    Class::LetterE,
    Class::LetterN,
    Class::HexAF,
    Class::IdPart,
    Class::Zero,
    Class::One,
    Class::Dig2_7,
    Class::Dig8_9,
];
const DEC_DIGITS: &[Class] = &[Class::Zero, Class::One, Class::Dig2_7, Class::Dig8_9];
const HEX_DIGITS: &[Class] = &[
    Class::Zero,
    Class::One,
    Class::Dig2_7,
    Class::Dig8_9,
    Class::HexAF,
    Class::LetterE,
    Class::LetterB,
];
const OCT_DIGITS: &[Class] = &[Class::Zero, Class::One, Class::Dig2_7];
const BIN_DIGITS: &[Class] = &[Class::Zero, Class::One];

struct Builder {
    actions: Vec<i16>,
}

impl Builder {
    fn new() -> Self {
        // Unspecified columns accept the zero-length fallback rule; the
        // scanner turns that into a forced one-char advance.
        Self {
            actions: vec![acc(R_INVALID); NUM_STATES * NUM_CLASSES],
        }
    }

    fn set(&mut self, s: St, c: Class, v: i16) {
        self.actions[s as usize * NUM_CLASSES + c as usize] = v;
    }

    /// Every column of `s` accepts `rule`.
    fn fill_acc(&mut self, s: St, rule: usize) {
        for c in 0..NUM_CLASSES {
            self.actions[s as usize * NUM_CLASSES + c] = acc(rule);
        }
    }

    /// Every column of `s` transitions to `to`; column 0 must be overridden
    /// with an accept afterwards.
    fn fill_to(&mut self, s: St, to: St) {
        for c in 0..NUM_CLASSES {
            self.actions[s as usize * NUM_CLASSES + c] = to as i16;
        }
    }

    fn on(&mut self, s: St, c: Class, to: St) {
        self.set(s, c, to as i16);
    }

    fn on_each(&mut self, s: St, cs: &[Class], to: St) {
        for &c in cs {
            self.set(s, c, to as i16);
        }
    }

    fn acc_on(&mut self, s: St, c: Class, rule: usize) {
        self.set(s, c, acc(rule));
    }

    fn eoi_acc(&mut self, s: St, rule: usize) {
        self.set(s, Class::Eoi, acc(rule));
    }

    /// Common transitions of the four code scanning modes and the type
    /// argument mode; the slash and `}` columns are mode-specific.
    fn code_start(&mut self, s: St, slash: St, rbrace: St) {
        self.acc_on(s, Class::Eoi, R_EOI);
        self.on_each(s, WS, St::Ws);
        self.on_each(s, IDENT_START, St::Ident);
        self.on(s, Class::Zero, St::NumZero);
        self.on_each(s, &[Class::One, Class::Dig2_7, Class::Dig8_9], St::NumDec);
        self.on(s, Class::Quote, St::Str1);
        self.on(s, Class::DQuote, St::Str2);
        self.on(s, Class::Backtick, St::Tpl);
        self.on(s, Class::Lbrace, St::AccLBrace);
        self.on(s, Class::Rbrace, rbrace);
        self.on(s, Class::Lparen, St::AccLParen);
        self.on(s, Class::Rparen, St::AccRParen);
        self.on(s, Class::Lbrack, St::AccLBrack);
        self.on(s, Class::Rbrack, St::AccRBrack);
        self.on(s, Class::Semi, St::AccSemi);
        self.on(s, Class::Comma, St::AccComma);
        self.on(s, Class::Colon, St::AccColon);
        self.on(s, Class::Tilde, St::AccTilde);
        self.on(s, Class::At, St::AccAt);
        self.on(s, Class::Dot, St::Dot1);
        self.on(s, Class::Quest, St::Quest1);
        self.on(s, Class::Eq, St::Eq1);
        self.on(s, Class::Lt, St::Lt1);
        self.on(s, Class::Gt, St::Gt1);
        self.on(s, Class::Plus, St::Plus1);
        self.on(s, Class::Minus, St::Minus1);
        self.on(s, Class::Star, St::Star1);
        self.on(s, Class::Percent, St::Percent1);
        self.on(s, Class::Amp, St::Amp1);
        self.on(s, Class::Pipe, St::Pipe1);
        self.on(s, Class::Caret, St::Caret1);
        self.on(s, Class::Excl, St::Excl1);
        self.on(s, Class::Slash, slash);
    }

    fn finish(self) -> Box<[i16]> {
        // Column 0 (end of input) must accept everywhere, otherwise the scan
        // loop could spin at the end of the source.
        for state in 0..NUM_STATES {
            debug_assert!(
                self.actions[state * NUM_CLASSES] < 0,
                "state {state} does not accept at end of input"
            );
        }
        self.actions.into_boxed_slice()
    }
}

#[allow(clippy::too_many_lines)]
fn build_actions() -> Box<[i16]> {
    let mut t = Builder::new();

    // Start states.
    t.code_start(St::CodeRe, St::SlashRe, St::AccRBrace);
    t.code_start(St::CodeDiv, St::SlashDiv, St::AccRBrace);
    t.code_start(St::TmplRe, St::SlashRe, St::TplMid);
    t.code_start(St::TmplDiv, St::SlashDiv, St::TplMid);
    // Type arguments scan like code, except that `<` and `>` stay single-char
    // so nested generics close one level at a time.
    t.code_start(St::TypeArgs, St::SlashDiv, St::AccRBrace);
    t.on(St::TypeArgs, Class::Lt, St::AccLt);
    t.on(St::TypeArgs, Class::Gt, St::AccGt);

    t.acc_on(St::JsxTag, Class::Eoi, R_EOI);
    t.on_each(St::JsxTag, WS, St::Ws);
    t.on_each(St::JsxTag, IDENT_START, St::JsxIdent);
    t.on(St::JsxTag, Class::Quote, St::JsxStr1);
    t.on(St::JsxTag, Class::DQuote, St::JsxStr2);
    t.on(St::JsxTag, Class::Lbrace, St::AccLBrace);
    t.on(St::JsxTag, Class::Rbrace, St::AccRBrace);
    t.on(St::JsxTag, Class::Lt, St::AccLt);
    t.on(St::JsxTag, Class::Gt, St::AccGt);
    t.on(St::JsxTag, Class::Slash, St::AccDiv);
    t.on(St::JsxTag, Class::Eq, St::AccAssign);
    t.on(St::JsxTag, Class::Colon, St::AccColon);
    t.on(St::JsxTag, Class::Dot, St::AccDot);

    t.fill_to(St::JsxText, St::JsxTextRun);
    t.acc_on(St::JsxText, Class::Eoi, R_EOI);
    t.on(St::JsxText, Class::Lt, St::AccLt);
    t.on(St::JsxText, Class::Gt, St::AccGt);
    t.on(St::JsxText, Class::Lbrace, St::AccLBrace);
    t.on(St::JsxText, Class::Rbrace, St::AccRBrace);

    t.fill_to(St::JsxTextRun, St::JsxTextRun);
    t.eoi_acc(St::JsxTextRun, R_JSX_TEXT);
    t.acc_on(St::JsxTextRun, Class::Lt, R_JSX_TEXT);
    t.acc_on(St::JsxTextRun, Class::Gt, R_JSX_TEXT);
    t.acc_on(St::JsxTextRun, Class::Lbrace, R_JSX_TEXT);
    t.acc_on(St::JsxTextRun, Class::Rbrace, R_JSX_TEXT);

    // Whitespace runs and identifiers.
    t.fill_acc(St::Ws, R_WHITESPACE);
    t.on_each(St::Ws, WS, St::Ws);

    t.fill_acc(St::Ident, R_IDENT);
    t.on_each(St::Ident, IDENT_CONT, St::Ident);

    t.fill_acc(St::JsxIdent, R_JSX_IDENT);
    t.on_each(St::JsxIdent, IDENT_CONT, St::JsxIdent);
    t.on(St::JsxIdent, Class::Minus, St::JsxIdent);

    // Numeric literals.
    t.fill_acc(St::NumZero, R_NUMERIC);
    t.on(St::NumZero, Class::LetterX, St::NumHexStart);
    t.on(St::NumZero, Class::LetterO, St::NumOctStart);
    t.on(St::NumZero, Class::LetterB, St::NumBinStart);
    t.on(St::NumZero, Class::Dot, St::NumFrac);
    t.on_each(St::NumZero, DEC_DIGITS, St::NumDec);
    t.on(St::NumZero, Class::LetterN, St::NumBigInt);
    t.on(St::NumZero, Class::LetterE, St::NumExpStart);
    t.on(St::NumZero, Class::Underscore, St::NumDecSep);
    t.on_each(
        St::NumZero,
        &[Class::Letter, Class::HexAF, Class::Dollar, Class::IdPart],
        St::NumBad,
    );

    t.fill_acc(St::NumDec, R_NUMERIC);
    t.on_each(St::NumDec, DEC_DIGITS, St::NumDec);
    t.on(St::NumDec, Class::Underscore, St::NumDecSep);
    t.on(St::NumDec, Class::Dot, St::NumFrac);
    t.on(St::NumDec, Class::LetterE, St::NumExpStart);
    t.on(St::NumDec, Class::LetterN, St::NumBigInt);
    t.on_each(
        St::NumDec,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumDecSep, DEC_DIGITS, St::NumDec);
    t.on_each(
        St::NumDecSep,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.fill_acc(St::NumFrac, R_NUMERIC);
    t.on_each(St::NumFrac, DEC_DIGITS, St::NumFrac);
    t.on(St::NumFrac, Class::Underscore, St::NumFracSep);
    t.on(St::NumFrac, Class::LetterE, St::NumExpStart);
    t.on_each(
        St::NumFrac,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumFracSep, DEC_DIGITS, St::NumFrac);
    t.on_each(
        St::NumFracSep,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.on_each(St::NumExpStart, &[Class::Plus, Class::Minus], St::NumExpSign);
    t.on_each(St::NumExpStart, DEC_DIGITS, St::NumExp);
    t.on_each(
        St::NumExpStart,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.on_each(St::NumExpSign, DEC_DIGITS, St::NumExp);

    t.fill_acc(St::NumExp, R_NUMERIC);
    t.on_each(St::NumExp, DEC_DIGITS, St::NumExp);
    t.on(St::NumExp, Class::Underscore, St::NumExpSep);
    t.on_each(
        St::NumExp,
        &[
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumExpSep, DEC_DIGITS, St::NumExp);

    t.on_each(St::NumHexStart, HEX_DIGITS, St::NumHex);
    t.on_each(
        St::NumHexStart,
        &[
            Class::Letter,
            Class::LetterX,
            Class::LetterO,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.fill_acc(St::NumHex, R_NUMERIC);
    t.on_each(St::NumHex, HEX_DIGITS, St::NumHex);
    t.on(St::NumHex, Class::Underscore, St::NumHexSep);
    t.on(St::NumHex, Class::LetterN, St::NumBigInt);
    t.on_each(
        St::NumHex,
        &[
            Class::Letter,
            Class::LetterX,
            Class::LetterO,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumHexSep, HEX_DIGITS, St::NumHex);
    t.on_each(
        St::NumHexSep,
        &[
            Class::Letter,
            Class::LetterX,
            Class::LetterO,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.on_each(St::NumOctStart, OCT_DIGITS, St::NumOct);
    t.on_each(
        St::NumOctStart,
        &[
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.fill_acc(St::NumOct, R_NUMERIC);
    t.on_each(St::NumOct, OCT_DIGITS, St::NumOct);
    t.on(St::NumOct, Class::Underscore, St::NumOctSep);
    t.on(St::NumOct, Class::LetterN, St::NumBigInt);
    t.on_each(
        St::NumOct,
        &[
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumOctSep, OCT_DIGITS, St::NumOct);
    t.on_each(
        St::NumOctSep,
        &[
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.on_each(St::NumBinStart, BIN_DIGITS, St::NumBin);
    t.on_each(
        St::NumBinStart,
        &[
            Class::Dig2_7,
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.fill_acc(St::NumBin, R_NUMERIC);
    t.on_each(St::NumBin, BIN_DIGITS, St::NumBin);
    t.on(St::NumBin, Class::Underscore, St::NumBinSep);
    t.on(St::NumBin, Class::LetterN, St::NumBigInt);
    t.on_each(
        St::NumBin,
        &[
            Class::Dig2_7,
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::Dollar,
            Class::IdPart,
        ],
        St::NumBad,
    );

    t.on_each(St::NumBinSep, BIN_DIGITS, St::NumBin);
    t.on_each(
        St::NumBinSep,
        &[
            Class::Dig2_7,
            Class::Dig8_9,
            Class::Letter,
            Class::HexAF,
            Class::LetterX,
            Class::LetterO,
            Class::LetterB,
            Class::LetterE,
            Class::LetterN,
            Class::Dollar,
            Class::IdPart,
            Class::Underscore,
        ],
        St::NumBad,
    );

    t.fill_acc(St::NumBigInt, R_NUMERIC);
    t.on_each(St::NumBigInt, IDENT_CONT, St::NumBad);

    t.on_each(St::NumBad, IDENT_CONT, St::NumBad);

    // String literals. An unescaped line terminator ends the token as
    // invalid without being consumed.
    t.fill_to(St::Str1, St::Str1);
    t.eoi_acc(St::Str1, R_INVALID);
    t.on(St::Str1, Class::Quote, St::AccString);
    t.on(St::Str1, Class::Backslash, St::Str1Esc);
    t.acc_on(St::Str1, Class::Nl, R_INVALID);
    t.acc_on(St::Str1, Class::Cr, R_INVALID);

    t.fill_to(St::Str1Esc, St::Str1);
    t.eoi_acc(St::Str1Esc, R_INVALID);

    t.fill_to(St::Str2, St::Str2);
    t.eoi_acc(St::Str2, R_INVALID);
    t.on(St::Str2, Class::DQuote, St::AccString);
    t.on(St::Str2, Class::Backslash, St::Str2Esc);
    t.acc_on(St::Str2, Class::Nl, R_INVALID);
    t.acc_on(St::Str2, Class::Cr, R_INVALID);

    t.fill_to(St::Str2Esc, St::Str2);
    t.eoi_acc(St::Str2Esc, R_INVALID);

    // Template chunks opened by a backtick.
    t.fill_to(St::Tpl, St::Tpl);
    t.eoi_acc(St::Tpl, R_INVALID);
    t.on(St::Tpl, Class::Backtick, St::AccTplNoSub);
    t.on(St::Tpl, Class::Dollar, St::TplDollar);
    t.on(St::Tpl, Class::Backslash, St::TplEsc);

    t.fill_to(St::TplEsc, St::Tpl);
    t.eoi_acc(St::TplEsc, R_INVALID);

    t.fill_to(St::TplDollar, St::Tpl);
    t.eoi_acc(St::TplDollar, R_INVALID);
    t.on(St::TplDollar, Class::Lbrace, St::AccTplHead);
    t.on(St::TplDollar, Class::Backtick, St::AccTplNoSub);
    t.on(St::TplDollar, Class::Dollar, St::TplDollar);
    t.on(St::TplDollar, Class::Backslash, St::TplEsc);

    // Template continuations opened by `}` in the template states.
    t.fill_to(St::TplMid, St::TplMid);
    t.eoi_acc(St::TplMid, R_INVALID);
    t.on(St::TplMid, Class::Backtick, St::AccTplTail);
    t.on(St::TplMid, Class::Dollar, St::TplMidDollar);
    t.on(St::TplMid, Class::Backslash, St::TplMidEsc);

    t.fill_to(St::TplMidEsc, St::TplMid);
    t.eoi_acc(St::TplMidEsc, R_INVALID);

    t.fill_to(St::TplMidDollar, St::TplMid);
    t.eoi_acc(St::TplMidDollar, R_INVALID);
    t.on(St::TplMidDollar, Class::Lbrace, St::AccTplMid);
    t.on(St::TplMidDollar, Class::Backtick, St::AccTplTail);
    t.on(St::TplMidDollar, Class::Dollar, St::TplMidDollar);
    t.on(St::TplMidDollar, Class::Backslash, St::TplMidEsc);

    // A slash in regex position: comment or regular expression literal.
    t.fill_to(St::SlashRe, St::ReBody);
    t.eoi_acc(St::SlashRe, R_INVALID);
    t.on(St::SlashRe, Class::Star, St::Mlc);
    t.on(St::SlashRe, Class::Slash, St::Slc);
    t.on(St::SlashRe, Class::Backslash, St::ReEsc);
    t.on(St::SlashRe, Class::Lbrack, St::ReClass);
    t.acc_on(St::SlashRe, Class::Nl, R_INVALID);
    t.acc_on(St::SlashRe, Class::Cr, R_INVALID);

    // A slash in division position: comment or division operator.
    t.fill_acc(St::SlashDiv, R_DIV);
    t.on(St::SlashDiv, Class::Star, St::Mlc);
    t.on(St::SlashDiv, Class::Slash, St::Slc);
    t.on(St::SlashDiv, Class::Eq, St::AccDivAssign);

    t.fill_to(St::ReBody, St::ReBody);
    t.eoi_acc(St::ReBody, R_INVALID);
    t.on(St::ReBody, Class::Slash, St::ReFlags);
    t.on(St::ReBody, Class::Backslash, St::ReEsc);
    t.on(St::ReBody, Class::Lbrack, St::ReClass);
    t.acc_on(St::ReBody, Class::Nl, R_INVALID);
    t.acc_on(St::ReBody, Class::Cr, R_INVALID);

    t.fill_to(St::ReEsc, St::ReBody);
    t.eoi_acc(St::ReEsc, R_INVALID);
    t.acc_on(St::ReEsc, Class::Nl, R_INVALID);
    t.acc_on(St::ReEsc, Class::Cr, R_INVALID);

    // Inside `[…]` a slash does not terminate the literal.
    t.fill_to(St::ReClass, St::ReClass);
    t.eoi_acc(St::ReClass, R_INVALID);
    t.on(St::ReClass, Class::Rbrack, St::ReBody);
    t.on(St::ReClass, Class::Backslash, St::ReClassEsc);
    t.acc_on(St::ReClass, Class::Nl, R_INVALID);
    t.acc_on(St::ReClass, Class::Cr, R_INVALID);

    t.fill_to(St::ReClassEsc, St::ReClass);
    t.eoi_acc(St::ReClassEsc, R_INVALID);
    t.acc_on(St::ReClassEsc, Class::Nl, R_INVALID);
    t.acc_on(St::ReClassEsc, Class::Cr, R_INVALID);

    t.fill_acc(St::ReFlags, R_REGEX);
    t.on_each(St::ReFlags, IDENT_CONT, St::ReFlags);

    // Comments.
    t.fill_to(St::Slc, St::Slc);
    t.eoi_acc(St::Slc, R_SINGLELINE_COMMENT);
    t.acc_on(St::Slc, Class::Nl, R_SINGLELINE_COMMENT);
    t.acc_on(St::Slc, Class::Cr, R_SINGLELINE_COMMENT);

    t.fill_to(St::Mlc, St::Mlc);
    t.eoi_acc(St::Mlc, R_INVALID);
    t.on(St::Mlc, Class::Star, St::MlcStar);

    t.fill_to(St::MlcStar, St::Mlc);
    t.eoi_acc(St::MlcStar, R_INVALID);
    t.on(St::MlcStar, Class::Star, St::MlcStar);
    t.on(St::MlcStar, Class::Slash, St::AccMlc);

    // JSX attribute strings: raw until the matching quote.
    t.fill_to(St::JsxStr1, St::JsxStr1);
    t.eoi_acc(St::JsxStr1, R_INVALID);
    t.on(St::JsxStr1, Class::Quote, St::AccJsxStr);

    t.fill_to(St::JsxStr2, St::JsxStr2);
    t.eoi_acc(St::JsxStr2, R_INVALID);
    t.on(St::JsxStr2, Class::DQuote, St::AccJsxStr);

    // Punctuator chains (maximal munch).
    t.fill_acc(St::Dot1, R_DOT);
    t.on_each(St::Dot1, DEC_DIGITS, St::NumFrac);
    t.on(St::Dot1, Class::Dot, St::Dot2);

    t.fill_acc(St::Dot2, R_DOTDOT);
    t.on(St::Dot2, Class::Dot, St::AccDotDotDot);

    t.fill_acc(St::Quest1, R_QUEST);
    t.on(St::Quest1, Class::Dot, St::QuestDot);
    t.on(St::Quest1, Class::Quest, St::Qq);

    t.fill_acc(St::QuestDot, R_QUESTDOT);
    t.on_each(St::QuestDot, DEC_DIGITS, St::AccQuestDigit);

    t.fill_acc(St::Qq, R_QUESTQUEST);
    t.on(St::Qq, Class::Eq, St::AccQqAssign);

    t.fill_acc(St::Eq1, R_ASSIGN);
    t.on(St::Eq1, Class::Eq, St::Eq2);
    t.on(St::Eq1, Class::Gt, St::AccArrow);

    t.fill_acc(St::Eq2, R_EQEQ);
    t.on(St::Eq2, Class::Eq, St::AccEqEqEq);

    t.fill_acc(St::Lt1, R_LT);
    t.on(St::Lt1, Class::Eq, St::AccLtEq);
    t.on(St::Lt1, Class::Lt, St::Shl);

    t.fill_acc(St::Shl, R_SHL);
    t.on(St::Shl, Class::Eq, St::AccShlAssign);

    t.fill_acc(St::Gt1, R_GT);
    t.on(St::Gt1, Class::Eq, St::AccGtEq);
    t.on(St::Gt1, Class::Gt, St::Shr);

    t.fill_acc(St::Shr, R_SHR);
    t.on(St::Shr, Class::Eq, St::AccShrAssign);
    t.on(St::Shr, Class::Gt, St::Ushr);

    t.fill_acc(St::Ushr, R_USHR);
    t.on(St::Ushr, Class::Eq, St::AccUshrAssign);

    t.fill_acc(St::Plus1, R_PLUS);
    t.on(St::Plus1, Class::Plus, St::AccPlusPlus);
    t.on(St::Plus1, Class::Eq, St::AccPlusAssign);

    t.fill_acc(St::Minus1, R_MINUS);
    t.on(St::Minus1, Class::Minus, St::AccMinusMinus);
    t.on(St::Minus1, Class::Eq, St::AccMinusAssign);

    t.fill_acc(St::Star1, R_STAR);
    t.on(St::Star1, Class::Star, St::StarStar);
    t.on(St::Star1, Class::Eq, St::AccStarAssign);

    t.fill_acc(St::StarStar, R_STARSTAR);
    t.on(St::StarStar, Class::Eq, St::AccStarStarAssign);

    t.fill_acc(St::Percent1, R_PERCENT);
    t.on(St::Percent1, Class::Eq, St::AccPercentAssign);

    t.fill_acc(St::Amp1, R_AMP);
    t.on(St::Amp1, Class::Amp, St::AmpAmp);
    t.on(St::Amp1, Class::Eq, St::AccAmpAssign);

    t.fill_acc(St::AmpAmp, R_AMPAMP);
    t.on(St::AmpAmp, Class::Eq, St::AccAmpAmpAssign);

    t.fill_acc(St::Pipe1, R_PIPE);
    t.on(St::Pipe1, Class::Pipe, St::PipePipe);
    t.on(St::Pipe1, Class::Eq, St::AccPipeAssign);

    t.fill_acc(St::PipePipe, R_PIPEPIPE);
    t.on(St::PipePipe, Class::Eq, St::AccPipePipeAssign);

    t.fill_acc(St::Caret1, R_CARET);
    t.on(St::Caret1, Class::Eq, St::AccCaretAssign);

    t.fill_acc(St::Excl1, R_EXCL);
    t.on(St::Excl1, Class::Eq, St::NotEq1);

    t.fill_acc(St::NotEq1, R_NOTEQ);
    t.on(St::NotEq1, Class::Eq, St::AccNotEqEq);

    // Terminal rows: the last char of the token is already consumed.
    for &(s, rule) in &[
        (St::AccString, R_STRING),
        (St::AccTplHead, R_TEMPLATE_HEAD),
        (St::AccTplNoSub, R_NO_SUBSTITUTION_TEMPLATE),
        (St::AccTplMid, R_TEMPLATE_MIDDLE),
        (St::AccTplTail, R_TEMPLATE_TAIL),
        (St::AccMlc, R_MULTILINE_COMMENT),
        (St::AccJsxStr, R_JSX_STRING),
        (St::AccLBrace, R_LBRACE),
        (St::AccRBrace, R_RBRACE),
        (St::AccLParen, R_LPAREN),
        (St::AccRParen, R_RPAREN),
        (St::AccLBrack, R_LBRACK),
        (St::AccRBrack, R_RBRACK),
        (St::AccSemi, R_SEMICOLON),
        (St::AccComma, R_COMMA),
        (St::AccColon, R_COLON),
        (St::AccTilde, R_TILDE),
        (St::AccAt, R_AT),
        (St::AccLt, R_LT),
        (St::AccGt, R_GT),
        (St::AccDiv, R_DIV),
        (St::AccAssign, R_ASSIGN),
        (St::AccDot, R_DOT),
        (St::AccDotDotDot, R_DOTDOTDOT),
        (St::AccQuestDigit, R_QUEST_DIGIT),
        (St::AccQqAssign, R_QUESTQUEST_ASSIGN),
        (St::AccEqEqEq, R_EQEQEQ),
        (St::AccArrow, R_ARROW),
        (St::AccLtEq, R_LTEQ),
        (St::AccShlAssign, R_SHL_ASSIGN),
        (St::AccGtEq, R_GTEQ),
        (St::AccShrAssign, R_SHR_ASSIGN),
        (St::AccUshrAssign, R_USHR_ASSIGN),
        (St::AccPlusPlus, R_PLUSPLUS),
        (St::AccPlusAssign, R_PLUS_ASSIGN),
        (St::AccMinusMinus, R_MINUSMINUS),
        (St::AccMinusAssign, R_MINUS_ASSIGN),
        (St::AccStarAssign, R_STAR_ASSIGN),
        (St::AccStarStarAssign, R_STARSTAR_ASSIGN),
        (St::AccDivAssign, R_DIV_ASSIGN),
        (St::AccPercentAssign, R_PERCENT_ASSIGN),
        (St::AccAmpAmpAssign, R_AMPAMP_ASSIGN),
        (St::AccAmpAssign, R_AMP_ASSIGN),
        (St::AccPipePipeAssign, R_PIPEPIPE_ASSIGN),
        (St::AccPipeAssign, R_PIPE_ASSIGN),
        (St::AccCaretAssign, R_CARET_ASSIGN),
        (St::AccNotEqEq, R_NOTEQEQ),
    ] {
        t.fill_acc(s, rule);
    }

    t.finish()
}
