//! Context-sensitive lexical scanner for JavaScript, TypeScript and TSX.
//!
//! A single surface syntax is ambiguous between several sub-languages:
//! expression code, TS type syntax, JSX markup and template literals. The
//! scanner resolves the ambiguity at token boundaries with parser-informed
//! state feedback: a small state register (plus a stack of saved states)
//! selects the DFA start condition for the next token, and every emitted
//! token updates the register. The classic instance is the slash: division
//! always follows an expression, while a regular expression literal is an
//! expression itself, so the register tracks which reading is in effect.
//!
//! The driving parser may adjust the register, the dialect and the state
//! stack between tokens to force a mode (for example entering type-argument
//! scanning after a known generic).
//!
//! # Example
//!
//! ```
//! use krait_lexer::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("return /ab+c/i;");
//! assert_eq!(lexer.next_token(), Token::Return);
//! assert_eq!(lexer.next_token(), Token::RegexLiteral);
//! assert_eq!(lexer.text(), "/ab+c/i");
//! assert_eq!(lexer.next_token(), Token::Semicolon);
//! assert_eq!(lexer.next_token(), Token::Eoi);
//! ```

mod cursor;
mod keyword;
mod state;
mod tables;
mod token;
mod unicode;
mod value;

#[cfg(test)]
mod tests;

use cursor::Cursor;

pub use state::{Dialect, LexerState};
pub use token::{PUNCTUATION_END, PUNCTUATION_START, Span, Token};
pub use value::TokenValue;

/// The scanner.
///
/// Borrows the source for its lifetime; owns the state register, the cursor
/// and the state stack. Tokens are produced strictly left to right by
/// [`Lexer::next_token`], and positional queries refer to the most recent
/// token.
#[derive(Debug)]
pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    /// Byte offset where the last token started.
    token_offset: usize,
    /// Line on which the last token started.
    token_line: u32,
    state: LexerState,
    dialect: Dialect,
    /// The most recently returned token.
    token: Token,
    /// Saved states for nested template expressions and JSX contexts.
    stack: Vec<LexerState>,
    value: TokenValue,
}

impl<'a> Lexer<'a> {
    /// Creates a scanner over `source`, skipping a leading byte order mark.
    ///
    /// The scanner starts in [`LexerState::INITIAL`] with the
    /// [`Dialect::Javascript`] dialect; set the dialect before the first
    /// [`Lexer::next_token`] call if the source is TypeScript or TSX.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_offset: 0,
            token_line: 1,
            state: LexerState::INITIAL,
            dialect: Dialect::Javascript,
            token: Token::Unavailable,
            stack: Vec::new(),
            value: TokenValue::None,
        }
    }

    /// Resets the scanner to tokenize `source` from scratch.
    pub fn reset(&mut self, source: &'a str) {
        *self = Self::new(source);
    }

    /// Finds and returns the next token. The end of the source is signalled
    /// by [`Token::Eoi`], which repeats on every further call.
    pub fn next_token(&mut self) -> Token {
        let prev_line = self.token_line;
        loop {
            self.token_line = self.cursor.line();
            self.token_offset = self.cursor.offset();

            let mut dfa_state = i32::from(tables::STATE_MAP[self.state.index()]);
            let mut hash = 0u32;
            while dfa_state >= 0 {
                let Some(ch) = self.cursor.ch() else {
                    // End of input is column 0 and never advances.
                    dfa_state = i32::from(tables::action(dfa_state as usize, tables::CLASS_EOI));
                    continue;
                };
                dfa_state = i32::from(tables::action(dfa_state as usize, tables::classify(ch)));
                if dfa_state >= 0 {
                    hash = hash.wrapping_mul(31).wrapping_add(ch as u32);
                    self.cursor.advance();
                }
            }
            let mut rule = (i32::from(tables::FIRST_RULE) - dfa_state) as usize;

            if rule == tables::R_IDENT {
                if let Some(keyword_rule) = keyword::lookup(hash, self.token_text()) {
                    rule = usize::from(keyword_rule);
                }
            }

            let mut token = tables::RULE_TOKEN[rule];
            match rule {
                tables::R_INVALID => {
                    // A zero-length match must still make progress.
                    if self.cursor.offset() == self.token_offset {
                        self.cursor.rewind(self.cursor.scan_offset());
                    }
                }
                tables::R_WHITESPACE => continue,
                tables::R_QUEST_DIGIT => {
                    // `?.` followed by a digit: emit `?` alone so the
                    // fraction can be rescanned as a numeric literal.
                    self.cursor.rewind(self.token_offset + 1);
                    token = Token::Quest;
                }
                tables::R_DOTDOT => {
                    // Overshoot while looking for `...`: emit the first dot.
                    self.cursor.rewind(self.token_offset + 1);
                    token = Token::Dot;
                }
                _ => {}
            }

            self.value = match rule {
                tables::R_NUMERIC => value::numeric(self.token_text()),
                tables::R_STRING => value::string(self.token_text()),
                tables::R_JSX_STRING => value::jsx_string(self.token_text()),
                tables::R_REGEX => value::regex(self.token_text()),
                _ => TokenValue::None,
            };

            self.update_state(token, prev_line);
            self.token = token;
            return token;
        }
    }

    /// The byte span of the last token.
    #[inline]
    #[must_use]
    pub fn span(&self) -> Span {
        Span::new(self.token_offset, self.cursor.offset())
    }

    /// The line on which the last token started, 1-based.
    #[inline]
    #[must_use]
    pub fn line(&self) -> u32 {
        self.token_line
    }

    /// The source text of the last token.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.token_text()
    }

    /// The value attached to the last token, if any.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// The current state register.
    #[inline]
    #[must_use]
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Overrides the state register before the next token.
    #[inline]
    pub fn set_state(&mut self, state: LexerState) {
        self.state = state;
    }

    /// The dialect being scanned.
    #[inline]
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Changes the dialect. Meaningful before the first token of a mode.
    #[inline]
    pub fn set_dialect(&mut self, dialect: Dialect) {
        self.dialect = dialect;
    }

    /// The stack of saved states, innermost last.
    #[inline]
    #[must_use]
    pub fn stack(&self) -> &[LexerState] {
        &self.stack
    }

    /// Mutable access to the saved-state stack for parser-driven recovery.
    #[inline]
    pub fn stack_mut(&mut self) -> &mut Vec<LexerState> {
        &mut self.stack
    }

    fn token_text(&self) -> &'a str {
        self.cursor.slice(self.token_offset, self.cursor.offset())
    }

    fn push_state(&mut self, new_state: LexerState) {
        self.stack.push(self.state);
        self.state = new_state;
    }

    fn pop_state(&mut self) {
        self.state = self.stack.pop().unwrap_or(LexerState::DIV);
    }

    /// Applies the mode feedback for an emitted token.
    ///
    /// There is an ambiguity in the language in that a slash can either be a
    /// division operator or start a regular expression literal; division
    /// always follows an expression while regex literals are expressions
    /// themselves. Grammar knowledge about what each token can be followed
    /// by is encoded here so the next scan starts in the right condition.
    fn update_state(&mut self, token: Token, prev_line: u32) {
        if self.state <= LexerState::TEMPLATE_EXPR_DIV {
            match token {
                Token::New
                | Token::Delete
                | Token::Void
                | Token::Typeof
                | Token::Instanceof
                | Token::In
                | Token::Do
                | Token::Return
                | Token::Case
                | Token::Throw
                | Token::Else => self.state.expect_regex(),
                Token::TemplateHead => {
                    self.state.expect_division();
                    self.push_state(LexerState::TEMPLATE);
                }
                Token::TemplateMiddle => self.state = LexerState::TEMPLATE,
                Token::TemplateTail => self.pop_state(),
                Token::RParen | Token::RBrack => {
                    // TODO: support `if (...) /regex/;` without parser help.
                    self.state.expect_division();
                }
                Token::PlusPlus | Token::MinusMinus => {
                    if prev_line != self.token_line {
                        // Starts a new line, so this is a pre-increment and a
                        // regular expression may follow. Otherwise the
                        // previous disposition already distinguishes pre from
                        // post and carries over unchanged.
                        self.state.expect_regex();
                    }
                }
                Token::Lt => {
                    if self.state.expects_division() {
                        // A comparison or the start of type arguments.
                        self.state.expect_regex();
                    } else if self.dialect != Dialect::Typescript {
                        // Start of a JSX tag.
                        self.state.expect_division();
                        self.push_state(LexerState::JSX_TAG);
                    }
                }
                Token::LBrace => {
                    self.state.expect_regex();
                    if self.state >= LexerState::TEMPLATE {
                        self.push_state(LexerState::TEMPLATE_EXPR);
                    }
                }
                Token::RBrace => {
                    self.state.expect_regex();
                    if self.state >= LexerState::TEMPLATE {
                        self.pop_state();
                    }
                }
                Token::SingleLineComment | Token::MultiLineComment => {}
                t if t.is_punctuator() => self.state.expect_regex(),
                _ => self.state.expect_division(),
            }
        } else {
            // JSX modes.
            match token {
                Token::Div => {
                    if self.state == LexerState::JSX_TAG && self.token == Token::Lt {
                        // `</` makes this a closing tag. The frame pushed
                        // when `<` was scanned is discarded outright.
                        self.state = LexerState::JSX_CLOSING_TAG;
                        self.stack.pop();
                    }
                }
                Token::Gt => {
                    if self.state == LexerState::JSX_TYPE_ARGS
                        || self.state == LexerState::JSX_CLOSING_TAG
                        || self.token == Token::Div
                    {
                        self.pop_state();
                    } else {
                        self.state = LexerState::JSX_TEXT;
                    }
                }
                Token::LBrace => {
                    if self.state != LexerState::JSX_TYPE_ARGS {
                        self.push_state(LexerState::TEMPLATE_EXPR);
                    }
                }
                Token::Lt => {
                    if self.dialect == Dialect::TypescriptJsx
                        && self.state != LexerState::JSX_TEXT
                        && self.token != Token::Assign
                    {
                        // Type arguments on a tag name.
                        self.push_state(LexerState::JSX_TYPE_ARGS);
                    } else {
                        // Start of a nested JSX tag.
                        self.push_state(LexerState::JSX_TAG);
                    }
                }
                _ => {}
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token including the final [`Token::Eoi`], then ends.
    fn next(&mut self) -> Option<Token> {
        if self.token == Token::Eoi {
            return None;
        }
        Some(self.next_token())
    }
}
