//! Structural parser: command name followed by KEYWORD(value) pairs

use tracing::debug;

use crate::language::*;

/// Build a Statement from a token sequence. Nothing is rejected: tokens
/// which are not part of a KEYWORD(value) pair are skipped, and a value
/// whose closing parenthesis is missing runs to the end of the input.
pub fn parse_tokens<'i>(tokens: &[Token<'i>]) -> Statement<'i> {
    let mut input = Parser::new(tokens);
    input.read_statement()
}

struct Parser<'a, 'i> {
    tokens: &'a [Token<'i>],
    position: usize,
}

impl<'a, 'i> Parser<'a, 'i> {
    fn new(tokens: &'a [Token<'i>]) -> Parser<'a, 'i> {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token<'i>> {
        let tokens = self.tokens;
        tokens.get(self.position)
    }

    fn next(&mut self) -> Option<&'a Token<'i>> {
        let tokens = self.tokens;
        let token = tokens.get(self.position);
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn trim_whitespace(&mut self) {
        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Space {
                break;
            }
            self.position += 1;
        }
    }

    fn read_statement(&mut self) -> Statement<'i> {
        self.trim_whitespace();

        let command = match self.peek() {
            Some(token) if token.kind == TokenKind::Command => {
                self.position += 1;
                token.text
            }
            _ => "",
        };

        let mut parameters = Vec::new();
        loop {
            self.trim_whitespace();

            let token = match self.next() {
                Some(token) => token,
                None => break,
            };

            if !is_keyword_like(token) {
                debug!(text = token.text, "Skipping positional token");
                continue;
            }

            match self.peek() {
                Some(next) if next.kind == TokenKind::ParenOpen => {
                    self.position += 1;
                }
                _ => {
                    debug!(text = token.text, "Skipping keyword without value");
                    continue;
                }
            }

            let span = self.take_parenthesized();
            parameters.push(Parameter {
                keyword: token.text,
                value: interpret(span),
            });
        }

        debug!(
            "Found {} parameter{}",
            parameters.len(),
            if parameters.len() == 1 { "" } else { "s" }
        );

        Statement {
            label: None,
            command,
            parameters,
        }
    }

    /// Having consumed an opening parenthesis, take everything up to the
    /// matching closing one, which is consumed but not returned.
    fn take_parenthesized(&mut self) -> &'a [Token<'i>] {
        let tokens = self.tokens;
        let start = self.position;
        let mut depth = 0;

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::ParenOpen => depth += 1,
                TokenKind::ParenClose if depth == 0 => {
                    return &tokens[start..self.position - 1];
                }
                TokenKind::ParenClose => depth -= 1,
                _ => {}
            }
        }

        &tokens[start..]
    }
}

// An identifier-shaped Value token is accepted in keyword position, too.
fn is_keyword_like(token: &Token) -> bool {
    match token.kind {
        TokenKind::Keyword => true,
        TokenKind::Value => is_identifier(token.text),
        _ => false,
    }
}

/// A span of exactly one simple token is a scalar; anything else is kept
/// as an opaque expression. Whitespace just inside the parenthesis is not
/// significant.
fn interpret<'i>(span: &[Token<'i>]) -> Value<'i> {
    let mut span = span;
    while let Some(first) = span.first() {
        if first.kind != TokenKind::Space {
            break;
        }
        span = &span[1..];
    }
    while let Some(last) = span.last() {
        if last.kind != TokenKind::Space {
            break;
        }
        span = &span[..span.len() - 1];
    }

    if let [token] = span {
        match token.kind {
            TokenKind::StringLiteral
            | TokenKind::Value
            | TokenKind::Keyword
            | TokenKind::SymbolicValue
            | TokenKind::Variable => return Value::Scalar(token.text),
            _ => {}
        }
    }

    Value::Expression(span.to_vec())
}
