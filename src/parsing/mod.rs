//! parser for CL command statements

use std::path::Path;
use tracing::debug;

use crate::language::{Layout, LoadingError, ParameterMetadata, Section, Statement};

pub mod lexer;
pub mod parser;
pub mod split;
pub mod values;

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Statements parsed from it can borrow from it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Read parameter metadata from a JSON file.
pub fn load_metadata(filename: &Path) -> Result<Vec<ParameterMetadata>, LoadingError<'_>> {
    let content = load(filename)?;

    serde_json::from_str(&content).map_err(|error| {
        debug!(?error);
        LoadingError {
            problem: "Invalid parameter metadata".to_string(),
            details: error.to_string(),
            filename,
        }
    })
}

/// Read layout settings from a JSON file. Settings not named in the file
/// keep their defaults.
pub fn load_layout(filename: &Path) -> Result<Layout, LoadingError<'_>> {
    let content = load(filename)?;

    serde_json::from_str(&content).map_err(|error| {
        debug!(?error);
        LoadingError {
            problem: "Invalid layout configuration".to_string(),
            details: error.to_string(),
            filename,
        }
    })
}

/// Join physical source lines into logical statements. A trailing '+'
/// continues onto the next line with its leading whitespace dropped; a
/// trailing '-' drops the whitespace before it and continues onto the next
/// line exactly as written. Comments are removed from statement text and
/// carried alongside it; blank and comment-only lines between statements
/// come back as they are.
pub fn sections(content: &str) -> Vec<Section> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut comments: Vec<String> = Vec::new();
    let mut quoted = false;
    let mut continuing = false;
    let mut verbatim = false;

    for line in content.lines() {
        let line = line.trim_end();

        if !continuing {
            quoted = false;
        }

        let mut found = Vec::new();
        let stripped = strip_comments(line, &mut quoted, &mut found);
        let stripped = stripped.trim_end();

        if !continuing
            && stripped
                .trim_start()
                .is_empty()
        {
            result.push(Section::Verbatim(line.to_string()));
            continue;
        }
        comments.extend(found);

        let piece = if continuing && !verbatim {
            stripped.trim_start()
        } else {
            stripped
        };

        if let Some(before) = piece.strip_suffix('+') {
            current.push_str(before);
            continuing = true;
            verbatim = false;
        } else if let Some(before) = piece.strip_suffix('-') {
            current.push_str(before.trim_end());
            continuing = true;
            verbatim = true;
        } else {
            current.push_str(piece);
            result.push(Section::Statement {
                text: std::mem::take(&mut current),
                comment: join_comments(&mut comments),
            });
            continuing = false;
        }
    }

    if !current
        .trim()
        .is_empty()
    {
        result.push(Section::Statement {
            text: current,
            comment: join_comments(&mut comments),
        });
    }

    debug!(
        "Found {} section{}",
        result.len(),
        if result.len() == 1 { "" } else { "s" }
    );

    result
}

/// The logical statements of a source file, without comments.
pub fn statements(content: &str) -> Vec<String> {
    sections(content)
        .into_iter()
        .filter_map(|section| match section {
            Section::Statement { text, .. } => Some(text),
            Section::Verbatim(_) => None,
        })
        .collect()
}

/// Byte offset where a comment begins on this line, if any, ignoring
/// anything inside quotes.
pub fn comment_start(line: &str) -> Option<usize> {
    find_comment(line, &mut false)
}

fn find_comment(text: &str, quoted: &mut bool) -> Option<usize> {
    for (i, c) in text.char_indices() {
        if c == '\'' {
            *quoted = !*quoted;
        } else if !*quoted && text[i..].starts_with("/*") {
            return Some(i);
        }
    }
    None
}

// Quote state carries across the lines of one statement. A comment left
// open runs to the end of its line.
fn strip_comments(line: &str, quoted: &mut bool, comments: &mut Vec<String>) -> String {
    let mut result = String::new();
    let mut rest = line;

    while let Some(start) = find_comment(rest, quoted) {
        result.push_str(rest[..start].trim_end());

        let after = &rest[start + 2..];
        match after.find("*/") {
            Some(end) => {
                comments.push(rest[start..start + end + 4].to_string());
                rest = &after[end + 2..];
            }
            None => {
                comments.push(rest[start..].to_string());
                rest = "";
            }
        }
    }
    result.push_str(rest);

    result
}

fn join_comments(comments: &mut Vec<String>) -> Option<String> {
    if comments.is_empty() {
        None
    } else {
        Some(std::mem::take(comments).join(" "))
    }
}

/// Parse one logical statement, including an optional leading label.
pub fn parse(statement: &str) -> Statement<'_> {
    let (label, rest) = split_label(statement);

    let tokens = lexer::tokenize(rest);
    let mut result = parser::parse_tokens(&tokens);
    result.label = label;
    result
}

fn split_label(statement: &str) -> (Option<&str>, &str) {
    let re = regex!(r"^\s*([A-Za-z$#@][A-Za-z0-9$#@_]*)\s*:");

    match re.captures(statement) {
        Some(cap) => {
            let whole = cap
                .get(0)
                .map_or(0, |m| m.end());
            let label = cap
                .get(1)
                .map(|m| m.as_str());
            (label, &statement[whole..])
        }
        None => (None, statement),
    }
}
