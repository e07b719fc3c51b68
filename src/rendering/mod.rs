//! Syntax highlighting of formatted CL source lines

use crate::language::*;
use crate::parsing::comment_start;
use crate::parsing::lexer::{tokenize, tokenize_fragment};

mod renderer;
mod terminal;

pub use renderer::{Identity, Render, Syntax};
pub use terminal::Terminal;

/// Join formatted lines into output text, each line newline terminated,
/// styling every piece with the given renderer. The first line is the one
/// carrying the label and command; every line but the last is expected to
/// end with the continuation character.
pub fn render(renderer: &impl Render, lines: &[String], continuation: char) -> String {
    let mut result = String::new();

    for (i, line) in lines
        .iter()
        .enumerate()
    {
        let continued = i + 1 < lines.len();
        for (syntax, content) in highlight(line, i == 0, continued, continuation) {
            result.push_str(&renderer.style(syntax, content));
        }
        result.push('\n');
    }

    result
}

/// Split one line into styled fragments. Concatenating the fragments gives
/// back the line unchanged.
pub fn highlight(
    line: &str,
    first: bool,
    continued: bool,
    continuation: char,
) -> Vec<(Syntax, &str)> {
    let mut result = Vec::new();
    let mut rest = line;

    if first {
        let re = regex!(r"^\s*[A-Za-z$#@][A-Za-z0-9$#@_]*:");
        if let Some(m) = re.find(line) {
            let label = &line[..m.end()];
            let indent = label.len()
                - label
                    .trim_start()
                    .len();
            if indent > 0 {
                result.push((Syntax::Neutral, &label[..indent]));
            }
            result.push((Syntax::Label, &label[indent..]));
            rest = &line[m.end()..];
        }
    }

    let mut comment = None;
    if let Some(start) = comment_start(rest) {
        comment = Some(&rest[start..]);
        rest = &rest[..start];
    }

    let mut marker = None;
    let mut trailing = "";
    if continued {
        let trimmed = rest.trim_end();
        if let Some(before) = trimmed.strip_suffix(continuation) {
            marker = Some(&trimmed[before.len()..]);
            trailing = &rest[trimmed.len()..];
            rest = before;
        }
    }

    let tokens = if first {
        tokenize(rest)
    } else {
        tokenize_fragment(rest)
    };

    for (i, token) in tokens
        .iter()
        .enumerate()
    {
        let syntax = match token.kind {
            TokenKind::Command => Syntax::Command,
            TokenKind::Keyword => match tokens.get(i + 1) {
                Some(next) if next.kind == TokenKind::ParenOpen => Syntax::Keyword,
                _ => Syntax::Neutral,
            },
            TokenKind::Variable => Syntax::Variable,
            TokenKind::SymbolicValue => Syntax::Symbolic,
            TokenKind::Function => Syntax::Function,
            TokenKind::StringLiteral => Syntax::String,
            TokenKind::Value if is_numeric(token.text) => Syntax::Numeric,
            TokenKind::Value => Syntax::Neutral,
            TokenKind::ParenOpen | TokenKind::ParenClose => Syntax::Structure,
            TokenKind::Space => Syntax::Neutral,
        };
        result.push((syntax, token.text));
    }

    if let Some(marker) = marker {
        result.push((Syntax::Continuation, marker));
        if !trailing.is_empty() {
            result.push((Syntax::Neutral, trailing));
        }
    }

    if let Some(comment) = comment {
        result.push((Syntax::Comment, comment));
    }

    result
}
