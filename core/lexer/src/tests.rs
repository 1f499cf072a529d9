//! Tests for the scanner.

use crate::{Dialect, Lexer, LexerState, Token, TokenValue};
use indoc::indoc;

fn tokens(src: &str) -> Vec<Token> {
    Lexer::new(src).collect()
}

fn tokens_in(src: &str, dialect: Dialect) -> Vec<Token> {
    let mut lexer = Lexer::new(src);
    lexer.set_dialect(dialect);
    lexer.by_ref().collect()
}

/// Every token with its text, end-of-input excluded.
fn lexemes(src: &str) -> Vec<(Token, String)> {
    let mut lexer = Lexer::new(src);
    let mut out = Vec::new();
    loop {
        let token = lexer.next_token();
        if token == Token::Eoi {
            return out;
        }
        out.push((token, lexer.text().to_owned()));
    }
}

#[test]
fn empty_source() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token(), Token::Eoi);
    assert_eq!(lexer.span(), crate::Span::new(0, 0));
    // End of input repeats forever.
    assert_eq!(lexer.next_token(), Token::Eoi);
    assert_eq!(lexer.next_token(), Token::Eoi);
}

#[test]
fn byte_order_mark_is_skipped() {
    let mut lexer = Lexer::new("\u{FEFF}var x");
    assert_eq!(lexer.next_token(), Token::Var);
    assert_eq!(lexer.span(), crate::Span::new(3, 6));
    assert_eq!(lexer.text(), "var");
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.next_token(), Token::Eoi);
}

#[test]
fn division_chain() {
    assert_eq!(
        tokens("a/b/c"),
        [
            Token::Ident,
            Token::Div,
            Token::Ident,
            Token::Div,
            Token::Ident,
            Token::Eoi
        ]
    );
}

#[test]
fn regex_after_return() {
    assert_eq!(
        lexemes("return /x/g;"),
        [
            (Token::Return, "return".to_owned()),
            (Token::RegexLiteral, "/x/g".to_owned()),
            (Token::Semicolon, ";".to_owned()),
        ]
    );
}

#[test]
fn regex_at_statement_start() {
    assert_eq!(
        tokens("/abc/i.test(s)"),
        [
            Token::RegexLiteral,
            Token::Dot,
            Token::Ident,
            Token::LParen,
            Token::Ident,
            Token::RParen,
            Token::Eoi
        ]
    );
}

#[test]
fn regex_character_class_hides_slash() {
    let lexed = lexemes("/[a/]b/");
    assert_eq!(lexed, [(Token::RegexLiteral, "/[a/]b/".to_owned())]);
}

#[test]
fn regex_value_splits_pattern_and_flags() {
    let mut lexer = Lexer::new("/ab+c/gi");
    assert_eq!(lexer.next_token(), Token::RegexLiteral);
    assert_eq!(
        *lexer.value(),
        TokenValue::Regex {
            pattern: "ab+c".into(),
            flags: "gi".into()
        }
    );
}

#[test]
fn division_after_parenthesized_expression() {
    assert_eq!(
        tokens("(a)/b/c"),
        [
            Token::LParen,
            Token::Ident,
            Token::RParen,
            Token::Div,
            Token::Ident,
            Token::Div,
            Token::Ident,
            Token::Eoi
        ]
    );
}

#[test]
fn div_assign_in_division_context() {
    assert_eq!(
        tokens("a /= b"),
        [Token::Ident, Token::DivAssign, Token::Ident, Token::Eoi]
    );
}

#[test]
fn preincrement_on_new_line_expects_regex() {
    assert_eq!(
        tokens("x\n++/y/"),
        [Token::Ident, Token::PlusPlus, Token::RegexLiteral, Token::Eoi]
    );
}

#[test]
fn postincrement_keeps_division_context() {
    assert_eq!(
        tokens("x++ /y/g"),
        [
            Token::Ident,
            Token::PlusPlus,
            Token::Div,
            Token::Ident,
            Token::Div,
            Token::Ident,
            Token::Eoi
        ]
    );
}

#[test]
fn template_with_substitution() {
    assert_eq!(
        lexemes("`a${1+2}b`"),
        [
            (Token::TemplateHead, "`a${".to_owned()),
            (Token::NumericLiteral, "1".to_owned()),
            (Token::Plus, "+".to_owned()),
            (Token::NumericLiteral, "2".to_owned()),
            (Token::TemplateTail, "}b`".to_owned()),
        ]
    );
}

#[test]
fn template_with_middle_chunks() {
    assert_eq!(
        tokens("`a${1}m${2}b`"),
        [
            Token::TemplateHead,
            Token::NumericLiteral,
            Token::TemplateMiddle,
            Token::NumericLiteral,
            Token::TemplateTail,
            Token::Eoi
        ]
    );
}

#[test]
fn template_with_nested_braces() {
    let mut lexer = Lexer::new("`a${ {b:1} }c`");
    let collected: Vec<Token> = lexer.by_ref().collect();
    assert_eq!(
        collected,
        [
            Token::TemplateHead,
            Token::LBrace,
            Token::Ident,
            Token::Colon,
            Token::NumericLiteral,
            Token::RBrace,
            Token::TemplateTail,
            Token::Eoi
        ]
    );
    assert!(lexer.stack().is_empty());
}

#[test]
fn nested_template_literal() {
    assert_eq!(
        tokens("`x${`y`}z`"),
        [
            Token::TemplateHead,
            Token::NoSubstitutionTemplate,
            Token::TemplateTail,
            Token::Eoi
        ]
    );
}

#[test]
fn template_without_substitution() {
    assert_eq!(lexemes("`abc`"), [(Token::NoSubstitutionTemplate, "`abc`".to_owned())]);
}

#[test]
fn template_escapes_do_not_terminate() {
    assert_eq!(
        lexemes(r"`a\`b\${c`"),
        [(Token::NoSubstitutionTemplate, r"`a\`b\${c`".to_owned())]
    );
}

#[test]
fn unterminated_template_is_invalid() {
    assert_eq!(tokens("`abc"), [Token::InvalidToken, Token::Eoi]);
}

#[test]
fn optional_chaining() {
    assert_eq!(
        tokens("a?.b"),
        [Token::Ident, Token::QuestDot, Token::Ident, Token::Eoi]
    );
}

#[test]
fn quest_before_digit_resplits() {
    let mut lexer = Lexer::new("foo?.5");
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.next_token(), Token::Quest);
    assert_eq!(lexer.text(), "?");
    assert_eq!(lexer.next_token(), Token::NumericLiteral);
    assert_eq!(lexer.text(), ".5");
    assert_eq!(*lexer.value(), TokenValue::Number(0.5));
    assert_eq!(lexer.next_token(), Token::Eoi);
}

#[test]
fn nullish_operators() {
    assert_eq!(
        tokens("a ?? b ??= c"),
        [
            Token::Ident,
            Token::QuestQuest,
            Token::Ident,
            Token::QuestQuestAssign,
            Token::Ident,
            Token::Eoi
        ]
    );
}

#[test]
fn double_dot_is_two_tokens() {
    assert_eq!(
        tokens("a..b"),
        [Token::Ident, Token::Dot, Token::Dot, Token::Ident, Token::Eoi]
    );
}

#[test]
fn float_then_member_access() {
    assert_eq!(
        lexemes("1..toString"),
        [
            (Token::NumericLiteral, "1.".to_owned()),
            (Token::Dot, ".".to_owned()),
            (Token::Ident, "toString".to_owned()),
        ]
    );
}

#[test]
fn all_punctuators() {
    let src = "{ } ( ) [ ] ; , . ... ? ?. ?? ??= : = == === => \
               < <= << <<= > >= >> >>= >>> >>>= + ++ += - -- -= \
               * *= ** **= % %= & && &&= &= | || ||= |= ^ ^= ! != !== ~ @";
    assert_eq!(
        tokens_in(src, Dialect::Typescript),
        [
            Token::LBrace,
            Token::RBrace,
            Token::LParen,
            Token::RParen,
            Token::LBrack,
            Token::RBrack,
            Token::Semicolon,
            Token::Comma,
            Token::Dot,
            Token::DotDotDot,
            Token::Quest,
            Token::QuestDot,
            Token::QuestQuest,
            Token::QuestQuestAssign,
            Token::Colon,
            Token::Assign,
            Token::EqEq,
            Token::EqEqEq,
            Token::Arrow,
            Token::Lt,
            Token::LtEq,
            Token::Shl,
            Token::ShlAssign,
            Token::Gt,
            Token::GtEq,
            Token::Shr,
            Token::ShrAssign,
            Token::Ushr,
            Token::UshrAssign,
            Token::Plus,
            Token::PlusPlus,
            Token::PlusAssign,
            Token::Minus,
            Token::MinusMinus,
            Token::MinusAssign,
            Token::Star,
            Token::StarAssign,
            Token::StarStar,
            Token::StarStarAssign,
            Token::Percent,
            Token::PercentAssign,
            Token::Amp,
            Token::AmpAmp,
            Token::AmpAmpAssign,
            Token::AmpAssign,
            Token::Pipe,
            Token::PipePipe,
            Token::PipePipeAssign,
            Token::PipeAssign,
            Token::Caret,
            Token::CaretAssign,
            Token::Excl,
            Token::NotEq,
            Token::NotEqEq,
            Token::Tilde,
            Token::At,
            Token::Eoi
        ]
    );
}

#[test]
fn every_keyword_is_recognized() {
    let src = "await break case catch class const continue debugger default \
               delete do else export extends finally for function if import \
               in instanceof new return super switch this throw try typeof \
               var void while with yield enum null true false as async from \
               get let of set static target implements interface private \
               protected public any unknown boolean number string symbol \
               abstract constructor declare is module namespace require type \
               readonly keyof unique infer";
    assert_eq!(
        tokens(src),
        [
            Token::Await,
            Token::Break,
            Token::Case,
            Token::Catch,
            Token::Class,
            Token::Const,
            Token::Continue,
            Token::Debugger,
            Token::Default,
            Token::Delete,
            Token::Do,
            Token::Else,
            Token::Export,
            Token::Extends,
            Token::Finally,
            Token::For,
            Token::Function,
            Token::If,
            Token::Import,
            Token::In,
            Token::Instanceof,
            Token::New,
            Token::Return,
            Token::Super,
            Token::Switch,
            Token::This,
            Token::Throw,
            Token::Try,
            Token::Typeof,
            Token::Var,
            Token::Void,
            Token::While,
            Token::With,
            Token::Yield,
            Token::Enum,
            Token::Null,
            Token::True,
            Token::False,
            Token::As,
            Token::Async,
            Token::From,
            Token::Get,
            Token::Let,
            Token::Of,
            Token::Set,
            Token::Static,
            Token::Target,
            Token::Implements,
            Token::Interface,
            Token::Private,
            Token::Protected,
            Token::Public,
            Token::Any,
            Token::Unknown,
            Token::Boolean,
            Token::Number,
            Token::String,
            Token::Symbol,
            Token::Abstract,
            Token::Constructor,
            Token::Declare,
            Token::Is,
            Token::Module,
            Token::Namespace,
            Token::Require,
            Token::Type,
            Token::Readonly,
            Token::Keyof,
            Token::Unique,
            Token::Infer,
            Token::Eoi
        ]
    );
}

#[test]
fn keyword_prefixes_are_identifiers() {
    assert_eq!(
        tokens("returned iff newish"),
        [Token::Ident, Token::Ident, Token::Ident, Token::Eoi]
    );
}

#[test]
fn numeric_values() {
    let cases: &[(&str, f64)] = &[
        ("0", 0.0),
        ("42", 42.0),
        ("3.14", 3.14),
        (".5", 0.5),
        ("1e10", 1e10),
        ("1e+5", 1e5),
        ("2E-3", 2e-3),
        ("0x1F", 31.0),
        ("0o17", 15.0),
        ("0b101", 5.0),
        ("1_000_000", 1_000_000.0),
    ];
    for &(src, expected) in cases {
        let mut lexer = Lexer::new(src);
        assert_eq!(lexer.next_token(), Token::NumericLiteral, "for {src:?}");
        assert_eq!(*lexer.value(), TokenValue::Number(expected), "for {src:?}");
        assert_eq!(lexer.next_token(), Token::Eoi, "for {src:?}");
    }
}

#[test]
fn bigint_values() {
    let mut lexer = Lexer::new("10n");
    assert_eq!(lexer.next_token(), Token::NumericLiteral);
    assert_eq!(*lexer.value(), TokenValue::BigInt(10.into()));

    lexer.reset("0xFFn");
    assert_eq!(lexer.next_token(), Token::NumericLiteral);
    assert_eq!(*lexer.value(), TokenValue::BigInt(255.into()));
}

#[test]
fn malformed_numbers_are_invalid() {
    for src in ["1e", "0x", "0b2", "1abc", "10nn", "1__0"] {
        let lexed = lexemes(src);
        assert_eq!(
            lexed,
            [(Token::InvalidToken, src.to_owned())],
            "for {src:?}"
        );
    }
}

#[test]
fn string_escapes() {
    let cases: &[(&str, &str)] = &[
        (r#""a\nb""#, "a\nb"),
        (r"'it\'s'", "it's"),
        (r#""\x41""#, "A"),
        (r#""A\u{1F600}""#, "A\u{1F600}"),
        (r#""😀""#, "\u{1F600}"),
        ("\"a\\\nb\"", "ab"),
        (r#""plain""#, "plain"),
    ];
    for &(src, expected) in cases {
        let mut lexer = Lexer::new(src);
        assert_eq!(lexer.next_token(), Token::StringLiteral, "for {src:?}");
        assert_eq!(
            *lexer.value(),
            TokenValue::Str(expected.into()),
            "for {src:?}"
        );
    }
}

#[test]
fn unterminated_strings() {
    assert_eq!(tokens("\"abc"), [Token::InvalidToken, Token::Eoi]);
    // The line terminator ends the blemished token and scanning resumes.
    assert_eq!(
        tokens("\"ab\ncd\""),
        [Token::InvalidToken, Token::Ident, Token::InvalidToken, Token::Eoi]
    );
}

#[test]
fn comments_are_reported() {
    assert_eq!(
        lexemes("a // hi\nb"),
        [
            (Token::Ident, "a".to_owned()),
            (Token::SingleLineComment, "// hi".to_owned()),
            (Token::Ident, "b".to_owned()),
        ]
    );
    assert_eq!(
        tokens("a /* x\ny */ b"),
        [Token::Ident, Token::MultiLineComment, Token::Ident, Token::Eoi]
    );
}

#[test]
fn comments_preserve_slash_disposition() {
    assert_eq!(
        tokens("return /*c*/ /x/;"),
        [
            Token::Return,
            Token::MultiLineComment,
            Token::RegexLiteral,
            Token::Semicolon,
            Token::Eoi
        ]
    );
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(tokens("/* x"), [Token::InvalidToken, Token::Eoi]);
}

#[test]
fn jsx_element() {
    let mut lexer = Lexer::new("<div>hi</div>");
    lexer.set_dialect(Dialect::TypescriptJsx);
    let collected: Vec<Token> = lexer.by_ref().collect();
    assert_eq!(
        collected,
        [
            Token::Lt,
            Token::Ident,
            Token::Gt,
            Token::JsxText,
            Token::Lt,
            Token::Div,
            Token::Ident,
            Token::Gt,
            Token::Eoi
        ]
    );
    assert!(lexer.stack().is_empty());
    assert_eq!(lexer.state(), LexerState::DIV);
}

#[test]
fn jsx_works_in_plain_javascript() {
    assert_eq!(
        tokens("<b>x</b>"),
        [
            Token::Lt,
            Token::Ident,
            Token::Gt,
            Token::JsxText,
            Token::Lt,
            Token::Div,
            Token::Ident,
            Token::Gt,
            Token::Eoi
        ]
    );
}

#[test]
fn jsx_attributes() {
    let mut lexer = Lexer::new(r#"<a href="x" on={f}>t</a>"#);
    lexer.set_dialect(Dialect::TypescriptJsx);
    let mut collected = Vec::new();
    loop {
        let token = lexer.next_token();
        if token == Token::Eoi {
            break;
        }
        collected.push((token, lexer.text().to_owned()));
    }
    assert_eq!(
        collected,
        [
            (Token::Lt, "<".to_owned()),
            (Token::Ident, "a".to_owned()),
            (Token::Ident, "href".to_owned()),
            (Token::Assign, "=".to_owned()),
            (Token::StringLiteral, "\"x\"".to_owned()),
            (Token::Ident, "on".to_owned()),
            (Token::Assign, "=".to_owned()),
            (Token::LBrace, "{".to_owned()),
            (Token::Ident, "f".to_owned()),
            (Token::RBrace, "}".to_owned()),
            (Token::Gt, ">".to_owned()),
            (Token::JsxText, "t".to_owned()),
            (Token::Lt, "<".to_owned()),
            (Token::Div, "/".to_owned()),
            (Token::Ident, "a".to_owned()),
            (Token::Gt, ">".to_owned()),
        ]
    );
}

#[test]
fn jsx_identifiers_admit_dashes_and_keywords() {
    let mut lexer = Lexer::new(r#"<a data-x="1" class="c"/>"#);
    lexer.set_dialect(Dialect::TypescriptJsx);
    assert_eq!(lexer.next_token(), Token::Lt);
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.text(), "data-x");
    assert_eq!(lexer.next_token(), Token::Assign);
    assert_eq!(lexer.next_token(), Token::StringLiteral);
    assert_eq!(*lexer.value(), TokenValue::Str("1".into()));
    // `class` stays an identifier inside a tag.
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.text(), "class");
    assert_eq!(lexer.next_token(), Token::Assign);
    assert_eq!(lexer.next_token(), Token::StringLiteral);
    assert_eq!(lexer.next_token(), Token::Div);
    assert_eq!(lexer.next_token(), Token::Gt);
    assert_eq!(lexer.next_token(), Token::Eoi);
    assert!(lexer.stack().is_empty());
}

#[test]
fn jsx_self_closing_tag() {
    let mut lexer = Lexer::new("<br/>");
    lexer.set_dialect(Dialect::TypescriptJsx);
    let collected: Vec<Token> = lexer.by_ref().collect();
    assert_eq!(
        collected,
        [Token::Lt, Token::Ident, Token::Div, Token::Gt, Token::Eoi]
    );
    assert_eq!(lexer.state(), LexerState::DIV);
}

#[test]
fn tsx_type_arguments_on_a_tag() {
    assert_eq!(
        tokens_in("<Foo<T> a/>", Dialect::TypescriptJsx),
        [
            Token::Lt,
            Token::Ident,
            Token::Lt,
            Token::Ident,
            Token::Gt,
            Token::Ident,
            Token::Div,
            Token::Gt,
            Token::Eoi
        ]
    );
}

#[test]
fn typescript_less_than_is_comparison() {
    let mut lexer = Lexer::new("a < b");
    lexer.set_dialect(Dialect::Typescript);
    let collected: Vec<Token> = lexer.by_ref().collect();
    assert_eq!(collected, [Token::Ident, Token::Lt, Token::Ident, Token::Eoi]);
    assert!(lexer.stack().is_empty());
}

#[test]
fn forced_jsx_text_state() {
    let mut lexer = Lexer::new("hello {x} bye");
    lexer.set_state(LexerState::JSX_TEXT);
    let mut collected = Vec::new();
    loop {
        let token = lexer.next_token();
        if token == Token::Eoi {
            break;
        }
        collected.push((token, lexer.text().to_owned()));
    }
    assert_eq!(
        collected,
        [
            (Token::JsxText, "hello ".to_owned()),
            (Token::LBrace, "{".to_owned()),
            (Token::Ident, "x".to_owned()),
            (Token::RBrace, "}".to_owned()),
            (Token::JsxText, " bye".to_owned()),
        ]
    );
}

#[test]
fn unicode_identifiers() {
    assert_eq!(
        lexemes("café 日本語"),
        [
            (Token::Ident, "café".to_owned()),
            (Token::Ident, "日本語".to_owned()),
        ]
    );
}

#[test]
fn unicode_whitespace_and_line_separators() {
    assert_eq!(tokens("a\u{00A0}b"), [Token::Ident, Token::Ident, Token::Eoi]);
    assert_eq!(tokens("a\u{2028}b"), [Token::Ident, Token::Ident, Token::Eoi]);
}

#[test]
fn stray_characters_become_invalid_tokens() {
    assert_eq!(lexemes("#"), [(Token::InvalidToken, "#".to_owned())]);
    assert_eq!(
        tokens("a # b"),
        [Token::Ident, Token::InvalidToken, Token::Ident, Token::Eoi]
    );
    assert_eq!(
        tokens("a © b"),
        [Token::Ident, Token::InvalidToken, Token::Ident, Token::Eoi]
    );
}

#[test]
fn decorator_syntax() {
    assert_eq!(
        tokens("@dec class A {}"),
        [
            Token::At,
            Token::Ident,
            Token::Class,
            Token::Ident,
            Token::LBrace,
            Token::RBrace,
            Token::Eoi
        ]
    );
}

#[test]
fn line_numbers() {
    let src = indoc! {"
        let a = 1;
        let b = `x
        y${z}`;
    "};
    let mut lexer = Lexer::new(src);
    assert_eq!(lexer.next_token(), Token::Let);
    assert_eq!(lexer.line(), 1);
    while lexer.next_token() != Token::Semicolon {}
    assert_eq!(lexer.next_token(), Token::Let); // line 2
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.next_token(), Token::Ident);
    assert_eq!(lexer.next_token(), Token::Assign);
    assert_eq!(lexer.next_token(), Token::TemplateHead);
    assert_eq!(lexer.line(), 2); // the chunk starts on line 2
    assert_eq!(lexer.next_token(), Token::Ident); // z, after the embedded newline
    assert_eq!(lexer.line(), 3);
}

#[test]
fn lines_match_newline_count() {
    let src = "a\nbb\n\nccc\n/*x\ny*/ d";
    let mut lexer = Lexer::new(src);
    loop {
        let token = lexer.next_token();
        if token == Token::Eoi {
            break;
        }
        let start = lexer.span().start;
        let expected = 1 + src[..start].matches('\n').count() as u32;
        assert_eq!(lexer.line(), expected, "line of {:?}", lexer.text());
    }
}

#[test]
fn progress_is_bounded() {
    let sources = [
        "",
        "   \t \n ",
        "### €€ \\ \u{0301}",
        "\"unterminated",
        "`unterminated ${",
        "/unterminated",
        "1e 0x 0b2",
        "a b c d e",
    ];
    for src in sources {
        let mut lexer = Lexer::new(src);
        let mut steps = 0;
        while lexer.next_token() != Token::Eoi {
            steps += 1;
            assert!(steps <= src.len() + 1, "no progress on {src:?}");
        }
    }
}

#[test]
fn spans_are_monotone_and_cover_the_source() {
    let src = indoc! {r#"
        const n = 0x1F + 2.5;
        // comment
        function f(a, b) {
          return `v${a}w` / b;
        }
        let re = /[/]{1}/g;
    "#};
    let mut lexer = Lexer::new(src);
    let mut prev_end = 0;
    loop {
        let token = lexer.next_token();
        if token == Token::Eoi {
            break;
        }
        let span = lexer.span();
        assert!(span.start >= prev_end, "overlapping spans");
        assert_eq!(&src[span.start..span.end], lexer.text());
        // Whatever the scanner skipped must be whitespace.
        assert!(
            src[prev_end..span.start]
                .chars()
                .all(|c| c.is_whitespace() || c == '\u{FEFF}'),
            "skipped non-whitespace {:?}",
            &src[prev_end..span.start]
        );
        prev_end = span.end;
    }
    assert!(
        src[prev_end..].chars().all(char::is_whitespace),
        "unscanned trailing input"
    );
}

#[test]
fn stack_balances_on_well_matched_sources() {
    let sources = [
        "`a${ `b${c}d` }e`",
        "f(`x${ {k: [1, 2]} }y`)",
        "a + b * (c - d)",
    ];
    for src in sources {
        let mut lexer = Lexer::new(src);
        while lexer.next_token() != Token::Eoi {}
        assert!(lexer.stack().is_empty(), "unbalanced stack for {src:?}");
    }

    let mut lexer = Lexer::new("<x><y>t</y></x>");
    lexer.set_dialect(Dialect::TypescriptJsx);
    while lexer.next_token() != Token::Eoi {}
    assert!(lexer.stack().is_empty());
}

#[test]
fn slash_disposition_follows_token_kinds() {
    let mut lexer = Lexer::new("a ] ) + { } void null");
    assert_eq!(lexer.next_token(), Token::Ident);
    assert!(lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::RBrack);
    assert!(lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::RParen);
    assert!(lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::Plus);
    assert!(!lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::LBrace);
    assert!(!lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::RBrace);
    assert!(!lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::Void);
    assert!(!lexer.state().expects_division());
    assert_eq!(lexer.next_token(), Token::Null);
    assert!(lexer.state().expects_division());
}

#[test]
fn reset_restores_the_initial_state() {
    let mut lexer = Lexer::new("`a${");
    lexer.set_dialect(Dialect::TypescriptJsx);
    assert_eq!(lexer.next_token(), Token::TemplateHead);
    assert!(!lexer.stack().is_empty());

    lexer.reset("1");
    assert_eq!(lexer.state(), LexerState::INITIAL);
    assert_eq!(lexer.dialect(), Dialect::Javascript);
    assert!(lexer.stack().is_empty());
    assert_eq!(lexer.next_token(), Token::NumericLiteral);
}
