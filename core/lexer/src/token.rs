//! The token enumeration used by the grammar.
//!
//! Tokens carry stable integer identifiers; the punctuators occupy one
//! contiguous range so the mode controller can classify them with a single
//! comparison.

/// The byte span of a token in the source.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first char of the token.
    pub start: usize,
    /// Byte offset just past the last char of the token.
    pub end: usize,
}

impl Span {
    /// Creates a new span.
    #[inline]
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The smallest individual words, phrases and characters of the language.
///
/// Discriminants are stable: the grammar identifies tokens by number, and the
/// punctuators form the contiguous range
/// `[PUNCTUATION_START, PUNCTUATION_END)`.
#[allow(missing_docs)] // the variant names are the documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Token {
    /// No token has been produced yet.
    Unavailable = 0,
    /// End of input.
    Eoi,
    /// A char sequence that does not form any token.
    InvalidToken,
    /// A `// …` comment, up to (not including) the line terminator.
    SingleLineComment,
    /// A `/* … */` comment.
    MultiLineComment,
    /// A non-keyword identifier.
    Ident,

    // Keywords, in keyword-table order.
    Await,
    Break,
    Case,
    Catch,
    Class,
    Const,
    Continue,
    Debugger,
    Default,
    Delete,
    Do,
    Else,
    Export,
    Extends,
    Finally,
    For,
    Function,
    If,
    Import,
    In,
    Instanceof,
    New,
    Return,
    Super,
    Switch,
    This,
    Throw,
    Try,
    Typeof,
    Var,
    Void,
    While,
    With,
    Yield,
    Enum,
    Null,
    True,
    False,
    As,
    Async,
    From,
    Get,
    Let,
    Of,
    Set,
    Static,
    Target,
    Implements,
    Interface,
    Private,
    Protected,
    Public,
    Any,
    Unknown,
    Boolean,
    Number,
    String,
    Symbol,
    Abstract,
    Constructor,
    Declare,
    Is,
    Module,
    Namespace,
    Require,
    Type,
    Readonly,
    Keyof,
    Unique,
    Infer,

    // Punctuators. This range must stay contiguous.
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBrack,
    /// `]`
    RBrack,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `...`
    DotDotDot,
    /// `?`
    Quest,
    /// `?.`
    QuestDot,
    /// `??`
    QuestQuest,
    /// `??=`
    QuestQuestAssign,
    /// `:`
    Colon,
    /// `=`
    Assign,
    /// `==`
    EqEq,
    /// `===`
    EqEqEq,
    /// `=>`
    Arrow,
    /// `<`
    Lt,
    /// `<=`
    LtEq,
    /// `<<`
    Shl,
    /// `<<=`
    ShlAssign,
    /// `>`
    Gt,
    /// `>=`
    GtEq,
    /// `>>`
    Shr,
    /// `>>=`
    ShrAssign,
    /// `>>>`
    Ushr,
    /// `>>>=`
    UshrAssign,
    /// `+`
    Plus,
    /// `++`
    PlusPlus,
    /// `+=`
    PlusAssign,
    /// `-`
    Minus,
    /// `--`
    MinusMinus,
    /// `-=`
    MinusAssign,
    /// `*`
    Star,
    /// `*=`
    StarAssign,
    /// `**`
    StarStar,
    /// `**=`
    StarStarAssign,
    /// `/`
    Div,
    /// `/=`
    DivAssign,
    /// `%`
    Percent,
    /// `%=`
    PercentAssign,
    /// `&`
    Amp,
    /// `&&`
    AmpAmp,
    /// `&&=`
    AmpAmpAssign,
    /// `&=`
    AmpAssign,
    /// `|`
    Pipe,
    /// `||`
    PipePipe,
    /// `||=`
    PipePipeAssign,
    /// `|=`
    PipeAssign,
    /// `^`
    Caret,
    /// `^=`
    CaretAssign,
    /// `!`
    Excl,
    /// `!=`
    NotEq,
    /// `!==`
    NotEqEq,
    /// `~`
    Tilde,
    /// `@`
    At,

    // Literals.
    /// A numeric literal, including BigInt literals.
    NumericLiteral,
    /// A single- or double-quoted string literal.
    StringLiteral,
    /// A regular expression literal, body and flags included.
    RegexLiteral,
    /// A template literal without substitutions: `` `…` ``.
    NoSubstitutionTemplate,
    /// The opening chunk of a template literal: `` `…${ ``.
    TemplateHead,
    /// A middle chunk of a template literal: `}…${`.
    TemplateMiddle,
    /// The closing chunk of a template literal: `` }…` ``.
    TemplateTail,
    /// Raw text between JSX tags.
    JsxText,
}

/// First discriminant of the punctuator range.
pub const PUNCTUATION_START: u16 = Token::LBrace as u16;
/// One past the last discriminant of the punctuator range.
pub const PUNCTUATION_END: u16 = Token::At as u16 + 1;

impl Token {
    /// Whether the token is a punctuator.
    #[inline]
    #[must_use]
    pub fn is_punctuator(self) -> bool {
        (PUNCTUATION_START..PUNCTUATION_END).contains(&(self as u16))
    }

    /// Whether the token is a reserved word or a contextual keyword.
    #[inline]
    #[must_use]
    pub fn is_keyword(self) -> bool {
        (Token::Await as u16..=Token::Infer as u16).contains(&(self as u16))
    }
}
