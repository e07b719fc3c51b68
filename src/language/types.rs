//! Types representing tokens and the Abstract Syntax Tree of a CL statement

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Command,
    Keyword,
    Variable,
    SymbolicValue,
    Function,
    StringLiteral,
    Value,
    ParenOpen,
    ParenClose,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'i> {
    pub kind: TokenKind,
    pub text: &'i str,
}

impl<'i> Token<'i> {
    pub fn new(kind: TokenKind, text: &'i str) -> Token<'i> {
        Token { kind, text }
    }
}

/// One parsed command invocation: an optional label, the command name,
/// and its keyword parameters in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement<'i> {
    pub label: Option<&'i str>,
    pub command: &'i str,
    pub parameters: Vec<Parameter<'i>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter<'i> {
    pub keyword: &'i str,
    pub value: Value<'i>,
}

/// The value inside a keyword's parentheses. Parsing only ever yields
/// Scalar or Expression; the remaining variants are for values built up
/// programmatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'i> {
    Scalar(&'i str),
    Nested(Vec<Value<'i>>),
    FunctionCall {
        name: &'i str,
        arguments: Vec<Value<'i>>,
    },
    Expression(Vec<Token<'i>>),
    CommandCall(Box<Statement<'i>>),
}

/// A piece of a source file: either one logical statement, with any
/// comments that were written on its lines, or a line that is blank or
/// holds only a comment and is kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Statement {
        text: String,
        comment: Option<String>,
    },
    Verbatim(String),
}

impl<'i> Statement<'i> {
    pub fn parameter(&self, keyword: &str) -> Option<&Parameter<'i>> {
        self.parameters
            .iter()
            .find(|parameter| {
                parameter
                    .keyword
                    .eq_ignore_ascii_case(keyword)
            })
    }
}

// Re-join expression tokens, collapsing each run of whitespace to a single
// space. Quoted strings are reproduced verbatim.
pub fn rejoin(tokens: &[Token]) -> String {
    let mut result = String::new();
    for token in tokens {
        match token.kind {
            TokenKind::Space => result.push(' '),
            _ => result.push_str(token.text),
        }
    }
    result
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(text) => write!(f, "{}", text),
            Value::Nested(items) => {
                for (i, item) in items
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    match item {
                        Value::Nested(_) => write!(f, "({})", item)?,
                        _ => write!(f, "{}", item)?,
                    }
                }
                Ok(())
            }
            Value::FunctionCall { name, arguments } => {
                write!(f, "{}(", name)?;
                for (i, argument) in arguments
                    .iter()
                    .enumerate()
                {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", argument)?;
                }
                write!(f, ")")
            }
            Value::Expression(tokens) => write!(f, "{}", rejoin(tokens)),
            Value::CommandCall(statement) => write!(f, "{}", statement),
        }
    }
}

impl fmt::Display for Parameter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.keyword, self.value)
    }
}

// The flat single-line form; the label is not part of it.
impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command)?;
        for parameter in &self.parameters {
            write!(f, " {}", parameter)?;
        }
        Ok(())
    }
}

// the validate functions all need to have start and end anchors.

pub fn is_identifier(content: &str) -> bool {
    let re = regex!(r"^[A-Za-z][A-Za-z0-9]*$");
    re.is_match(content)
}

pub fn is_numeric(content: &str) -> bool {
    let re = regex!(r"^[+-]?(?:[0-9]+(?:[.,][0-9]*)?|[.,][0-9]+)$");
    re.is_match(content)
}

/// Wrapped in a matching pair of single or double quotes.
pub fn is_quoted(content: &str) -> bool {
    content.len() >= 2
        && ((content.starts_with('\'') && content.ends_with('\''))
            || (content.starts_with('"') && content.ends_with('"')))
}
