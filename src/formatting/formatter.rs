//! Fixed-column line formatter for CL statements

use tracing::{debug, warn};

use crate::language::*;
use crate::parsing::parse;
use crate::parsing::split::Depth;

// Reserved at the end of every line for " +".
const MARKER_WIDTH: usize = 2;

const MAXIMUM_ROUNDS: usize = 1000;

/// Lay a statement out as source lines: label and command in their columns
/// on the first line, parameters following, wrapping onto continuation
/// lines as needed. Every line except the last ends with the continuation
/// marker. Quoted strings, numbers, and a keyword with its opening
/// parenthesis are never broken across lines.
pub fn format_statement(statement: &Statement, layout: &Layout) -> Vec<String> {
    let atomics = collect_atomics(statement, layout.case);

    let mut output = Formatter::new(layout, &atomics);
    output.format_statement(statement);
    output.finish()
}

/// Lay out one section of a source file. Blank and comment-only lines come
/// back as written; a statement's comments follow its last line.
pub fn format_section(section: &Section, layout: &Layout) -> Vec<String> {
    match section {
        Section::Verbatim(line) => vec![line.clone()],
        Section::Statement { text, comment } => {
            let statement = parse(text);
            let mut lines = format_statement(&statement, layout);

            if let Some(comment) = comment {
                match lines.last_mut() {
                    Some(last) => {
                        last.push(' ');
                        last.push_str(comment);
                    }
                    None => lines.push(comment.clone()),
                }
            }
            lines
        }
    }
}

struct Formatter<'l> {
    layout: &'l Layout,
    atomics: &'l [String],
    lines: Vec<String>,
    current: String,
}

impl<'l> Formatter<'l> {
    fn new(layout: &'l Layout, atomics: &'l [String]) -> Formatter<'l> {
        Formatter {
            layout,
            atomics,
            lines: Vec::new(),
            current: String::new(),
        }
    }

    fn format_statement(&mut self, statement: &Statement) {
        if let Some(label) = statement.label {
            self.pad_to(self.layout.label_column);
            self.current
                .push_str(label);
            self.current
                .push(':');
        }

        self.pad_to(self.layout.command_column);
        let command = self
            .layout
            .case
            .apply(statement.command);
        self.current
            .push_str(&command);

        if statement
            .parameters
            .is_empty()
        {
            return;
        }

        self.pad_to(self.layout.parameter_column);

        for (i, parameter) in statement
            .parameters
            .iter()
            .enumerate()
        {
            self.format_parameter(parameter, i > 0);
        }
    }

    fn format_parameter(&mut self, parameter: &Parameter, separate: bool) {
        let keyword = self
            .layout
            .case
            .apply(parameter.keyword);

        match &parameter.value {
            Value::FunctionCall { name, arguments } => {
                self.format_function(&keyword, name, arguments, separate);
            }
            Value::Expression(tokens) => {
                let text = format!("{}({})", keyword, rejoin(tokens));
                let atomics = expression_atomics(&keyword, tokens);
                self.add(&text, &atomics, separate);
            }
            value => {
                let text = format!("{}({})", keyword, flatten(value, self.layout.case));
                let atomics = self.atomics;
                self.add(&text, atomics, separate);
            }
        }
    }

    /// A function call that fits is written inline. Otherwise each argument
    /// goes onto its own continuation line, with the closing parenthesis
    /// following the last argument.
    fn format_function(&mut self, keyword: &str, name: &str, arguments: &[Value], separate: bool) {
        let arguments: Vec<String> = arguments
            .iter()
            .map(|argument| flatten(argument, self.layout.case))
            .filter(|argument| !argument.is_empty())
            .collect();

        let inline = format!("{}({}({}))", keyword, name, arguments.join(" "));
        let needed = width(&inline) + if separate { 1 } else { 0 };
        let atomics = self.atomics;

        if width(&self.current) + needed <= self.limit() {
            self.add(&inline, atomics, separate);
            return;
        }

        debug!(function = name, "Placing arguments on separate lines");

        let head = format!("{}({}(", keyword, name);
        self.add(&head, atomics, separate);

        for argument in &arguments {
            self.wrap();
            self.add(argument, atomics, false);
        }

        self.add("))", atomics, false);
    }

    /// Append text to the current line, breaking it at spaces where it does
    /// not fit. A break is only taken at a space outside every atomic value
    /// and not directly after an opening parenthesis. If no such space is
    /// available the text moves to a fresh continuation line; if it does
    /// not fit there either it is allowed to run past the margin.
    fn add(&mut self, text: &str, atomics: &[String], separate: bool) {
        let mut remaining = if separate && !self.is_fresh() && !self.current.ends_with(' ') {
            format!(" {}", text)
        } else {
            text.to_string()
        };

        let mut rounds = 0;

        while !remaining.is_empty() {
            rounds += 1;
            if rounds > MAXIMUM_ROUNDS {
                warn!("Gave up wrapping after {} attempts", MAXIMUM_ROUNDS);
                self.current
                    .push_str(&remaining);
                break;
            }

            if self.is_fresh() {
                remaining = remaining
                    .trim_start()
                    .to_string();
                if remaining.is_empty() {
                    break;
                }
            }

            let available = self
                .limit()
                .saturating_sub(width(&self.current));

            if width(&remaining) <= available {
                self.current
                    .push_str(&remaining);
                break;
            }

            if let Some(index) = last_break(&remaining, available, atomics) {
                self.current
                    .push_str(remaining[..index].trim_end());
                self.wrap();
                remaining = remaining[index..]
                    .trim_start()
                    .to_string();
                continue;
            }

            if !self.is_fresh() {
                self.wrap();
                continue;
            }

            // too long for even an empty line
            match next_break(&remaining, available, atomics) {
                Some(index) => {
                    self.current
                        .push_str(&remaining[..index]);
                    self.wrap();
                    remaining = remaining[index..]
                        .trim_start()
                        .to_string();
                }
                None => {
                    self.current
                        .push_str(&remaining);
                    break;
                }
            }
        }
    }

    fn pad_to(&mut self, column: usize) {
        let target = column.saturating_sub(1);
        let current = width(&self.current);

        if current < target {
            self.current
                .push_str(&" ".repeat(target - current));
        } else if !self
            .current
            .is_empty()
            && !self
                .current
                .ends_with(' ')
        {
            self.current
                .push(' ');
        }
    }

    fn limit(&self) -> usize {
        self.layout
            .right_margin
            .saturating_sub(MARKER_WIDTH)
    }

    fn is_fresh(&self) -> bool {
        self.current
            .trim()
            .is_empty()
    }

    fn wrap(&mut self) {
        let mut line = self
            .current
            .trim_end()
            .to_string();
        line.push(' ');
        line.push(self.layout.continuation);
        self.lines
            .push(line);

        self.current = " ".repeat(
            self.layout
                .continuation_column
                .saturating_sub(1),
        );
    }

    fn finish(mut self) -> Vec<String> {
        let last = self
            .current
            .trim_end();
        if !last.is_empty() {
            self.lines
                .push(last.to_string());
        }
        self.lines
    }
}

fn width(text: &str) -> usize {
    text.chars()
        .count()
}

/// Character position and byte offset of every space where a line may be
/// broken: outside quotes, not directly after an opening parenthesis, and
/// not inside any of the unquoted atomic values.
fn safe_spaces(text: &str, atomics: &[String]) -> Vec<(usize, usize)> {
    let mut result = Vec::new();
    let mut depth = Depth::default();
    let mut previous = None;

    for (count, (index, c)) in text
        .char_indices()
        .enumerate()
    {
        if c == ' ' && !depth.quoted() && previous != Some('(') && !within(text, index, atomics) {
            result.push((count, index));
        }
        depth.observe(c);
        previous = Some(c);
    }

    result
}

// Only atomics without quotes; quoted ones are handled by the quote scan.
fn within(text: &str, index: usize, atomics: &[String]) -> bool {
    atomics
        .iter()
        .filter(|atom| !atom.is_empty() && !atom.contains(['\'', '"']))
        .any(|atom| {
            text.match_indices(atom.as_str())
                .any(|(start, _)| start < index && index < start + atom.len())
        })
}

/// The last safe space at or before `available` characters in.
fn last_break(text: &str, available: usize, atomics: &[String]) -> Option<usize> {
    safe_spaces(text, atomics)
        .into_iter()
        .take_while(|(count, _)| *count <= available)
        .last()
        .map(|(_, index)| index)
}

/// The first safe space beyond `available` characters in.
fn next_break(text: &str, available: usize, atomics: &[String]) -> Option<usize> {
    safe_spaces(text, atomics)
        .into_iter()
        .find(|(count, _)| *count > available)
        .map(|(_, index)| index)
}

/// Everything in a statement that must stay on one line: quoted strings,
/// numbers, and each keyword together with its opening parenthesis.
fn collect_atomics(statement: &Statement, case: KeywordCase) -> Vec<String> {
    let mut result = Vec::new();
    collect_statement(statement, case, &mut result);

    result.sort();
    result.dedup();
    result
}

fn collect_statement(statement: &Statement, case: KeywordCase, result: &mut Vec<String>) {
    for parameter in &statement.parameters {
        result.push(format!("{}(", case.apply(parameter.keyword)));
        collect_value(&parameter.value, case, result);
    }
}

fn collect_value(value: &Value, case: KeywordCase, result: &mut Vec<String>) {
    match value {
        Value::Scalar(text) => {
            if text.contains('\'') || text.contains('"') || is_numeric(text) {
                result.push(text.to_string());
            }
        }
        Value::Nested(items) => {
            for item in items {
                collect_value(item, case, result);
            }
        }
        Value::FunctionCall { arguments, .. } => {
            for argument in arguments {
                collect_value(argument, case, result);
            }
        }
        Value::Expression(tokens) => {
            collect_tokens(tokens, result);
        }
        Value::CommandCall(statement) => {
            collect_statement(statement, case, result);
        }
    }
}

fn collect_tokens(tokens: &[Token], result: &mut Vec<String>) {
    for token in tokens {
        match token.kind {
            TokenKind::StringLiteral => result.push(token.text.to_string()),
            TokenKind::Value if is_numeric(token.text) => result.push(token.text.to_string()),
            TokenKind::Value if token.text.contains('\'') => result.push(token.text.to_string()),
            _ => {}
        }
    }
}

// An expression carries its own atomic values.
fn expression_atomics(keyword: &str, tokens: &[Token]) -> Vec<String> {
    let mut result = vec![format!("{}(", keyword)];
    collect_tokens(tokens, &mut result);
    result
}

/// The single-line form of a value, with keyword case applied to any
/// command nested inside it.
fn flatten(value: &Value, case: KeywordCase) -> String {
    match value {
        Value::Scalar(text) => text.to_string(),
        Value::Nested(items) => {
            let pieces: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::Nested(_) => format!("({})", flatten(item, case)),
                    _ => flatten(item, case),
                })
                .collect();
            pieces.join(" ")
        }
        Value::FunctionCall { name, arguments } => {
            let pieces: Vec<String> = arguments
                .iter()
                .map(|argument| flatten(argument, case))
                .collect();
            format!("{}({})", name, pieces.join(" "))
        }
        Value::Expression(tokens) => rejoin(tokens),
        Value::CommandCall(statement) => {
            let mut result = case.apply(statement.command);
            for parameter in &statement.parameters {
                result.push(' ');
                result.push_str(&case.apply(parameter.keyword));
                result.push('(');
                result.push_str(&flatten(&parameter.value, case));
                result.push(')');
            }
            result
        }
    }
}
