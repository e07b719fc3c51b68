//! Tokenizer for a single, already de-continued, CL statement

use tracing::{debug, warn};

use crate::language::*;

/// Break a statement into tokens. The first word is always the command.
pub fn tokenize(statement: &str) -> Vec<Token<'_>> {
    let mut input = Lexer::new();
    input.initialize(statement, true);
    let tokens = input.read_tokens();
    debug!("Tokenized {} tokens", tokens.len());
    tokens
}

/// Break a piece of a statement into tokens without treating the first
/// word as the command name; used on continuation lines.
pub fn tokenize_fragment(text: &str) -> Vec<Token<'_>> {
    let mut input = Lexer::new();
    input.initialize(text, false);
    input.read_tokens()
}

#[derive(Debug)]
struct Lexer<'i> {
    source: &'i str,
    offset: usize,
    command_pending: bool,
}

impl<'i> Lexer<'i> {
    fn new() -> Lexer<'i> {
        Lexer {
            source: "",
            offset: 0,
            command_pending: false,
        }
    }

    fn initialize(&mut self, content: &'i str, command_pending: bool) {
        self.source = content;
        self.offset = 0;
        self.command_pending = command_pending;
    }

    fn advance(&mut self, width: usize) {
        self.source = &self.source[width..];
        self.offset += width;
    }

    fn peek_next_char(&self) -> Option<char> {
        self.source
            .chars()
            .next()
    }

    fn take(&mut self, kind: TokenKind, width: usize) -> Token<'i> {
        let text = &self.source[..width];
        self.advance(width);
        Token::new(kind, text)
    }

    fn read_tokens(&mut self) -> Vec<Token<'i>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.read_token() {
            tokens.push(token);
        }
        tokens
    }

    fn read_token(&mut self) -> Option<Token<'i>> {
        let c = self.peek_next_char()?;

        let token = if c.is_whitespace() {
            let width = self.scan_while(0, |c| c.is_whitespace());
            self.take(TokenKind::Space, width)
        } else if c == '(' {
            self.take(TokenKind::ParenOpen, 1)
        } else if c == ')' {
            self.take(TokenKind::ParenClose, 1)
        } else if self.command_pending {
            self.command_pending = false;
            let width = self.scan_run();
            self.take(TokenKind::Command, width)
        } else if c == '\'' {
            let width = self.scan_string(0);
            self.take(TokenKind::StringLiteral, width)
        } else if c == '&' {
            let width = self.scan_while(1, |c| c.is_ascii_alphanumeric());
            self.take(TokenKind::Variable, width)
        } else if c == '*' {
            let width = self.scan_while(1, |c| c.is_ascii_alphabetic());
            self.take(TokenKind::SymbolicValue, width)
        } else if c == '%' {
            let width = self.scan_while(1, |c| c.is_ascii_alphabetic());
            self.take(TokenKind::Function, width)
        } else {
            let width = self.scan_run();
            let kind = if is_identifier(&self.source[..width]) {
                TokenKind::Keyword
            } else {
                TokenKind::Value
            };
            self.take(kind, width)
        };

        Some(token)
    }

    /// Byte width of the leading characters, from `start` onwards, which
    /// satisfy the predicate.
    fn scan_while<P>(&self, start: usize, predicate: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        for (i, c) in self.source[start..].char_indices() {
            if !predicate(c) {
                return start + i;
            }
        }
        self.source
            .len()
    }

    /// A quoted string begins at `start` and ends at the first quote which
    /// is not doubled. An unterminated string runs to the end of input.
    fn scan_string(&self, start: usize) -> usize {
        let mut chars = self.source[start..]
            .char_indices()
            .skip(1)
            .peekable();

        while let Some((i, c)) = chars.next() {
            if c == '\'' {
                if let Some(&(_, '\'')) = chars.peek() {
                    chars.next();
                    continue;
                }
                return start + i + 1;
            }
        }

        warn!(offset = self.offset + start, "Unterminated string literal");
        self.source
            .len()
    }

    /// A run of anything other than whitespace and parenthesis. Quoted
    /// sections within the run (as in X'F0') are kept whole.
    fn scan_run(&self) -> usize {
        let mut i = 0;
        while let Some(c) = self.source[i..]
            .chars()
            .next()
        {
            if c.is_whitespace() || c == '(' || c == ')' {
                break;
            }
            if c == '\'' {
                i = self.scan_string(i);
            } else {
                i += c.len_utf8();
            }
        }
        i
    }
}
