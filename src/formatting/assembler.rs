//! Reassembling a statement's text from its command name, the parameter
//! metadata, and a keyword to value map.

use std::collections::HashSet;

use tracing::debug;

use crate::formatting::quoting::quote_or_format;
use crate::language::*;
use crate::parsing::values::normalize;

/// Produce "COMMAND KW1(v1) KW2(v2) ..." with parameters in the order the
/// metadata declares them. Empty values are omitted, as are values equal to
/// the parameter's default unless the keyword was written in the source.
pub fn assemble(
    command: &str,
    metadata: &[ParameterMetadata],
    values: &ParameterMap,
    present: &HashSet<String>,
) -> String {
    let mut result = strip_library_list(command).to_string();

    for definition in metadata {
        let keyword = definition
            .keyword
            .to_uppercase();

        let value = match find(values, &keyword) {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        if !is_present(present, &keyword) {
            if let Some(default) = &definition.default {
                if normalize(value, definition) == normalize(default, definition) {
                    debug!(keyword = %keyword, "Omitting default value");
                    continue;
                }
            }
        }

        let rendered = render_value(value, definition);
        if rendered.is_empty() {
            continue;
        }

        result.push(' ');
        result.push_str(&keyword);
        result.push('(');
        result.push_str(&rendered);
        result.push(')');
    }

    result
}

fn strip_library_list(command: &str) -> &str {
    match command.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("*LIBL/") => &command[6..],
        _ => command,
    }
}

fn find<'m>(values: &'m ParameterMap, keyword: &str) -> Option<&'m ParameterValue> {
    values
        .get(keyword)
        .or_else(|| {
            values
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(keyword))
                .map(|(_, value)| value)
        })
}

fn is_present(present: &HashSet<String>, keyword: &str) -> bool {
    present
        .iter()
        .any(|key| key.eq_ignore_ascii_case(keyword))
}

/// Render a parameter's value into the text that goes between its
/// parenthesis.
pub fn render_value(value: &ParameterValue, definition: &ParameterMetadata) -> String {
    let shape = definition.shape();
    let normalized = normalize(value, definition);

    if definition.max > 1 {
        if let ParameterValue::List(occurrences) = &normalized {
            let pieces: Vec<String> = occurrences
                .iter()
                .map(|occurrence| render_occurrence(occurrence, &shape))
                .filter(|piece| !piece.is_empty())
                .collect();
            return pieces.join(" ");
        }
    }

    render_part(&normalized, &shape)
}

// each occurrence of an element list is parenthesized
fn render_occurrence(occurrence: &ParameterValue, shape: &PartMetadata) -> String {
    let text = render_part(occurrence, shape);
    if text.is_empty()
        || shape
            .elements
            .is_empty()
    {
        text
    } else {
        format!("({})", text)
    }
}

fn render_part(value: &ParameterValue, part: &PartMetadata) -> String {
    let items = match value {
        ParameterValue::Text(text) => {
            return quote_or_format(text.trim(), &part.allowed, part.kind);
        }
        ParameterValue::List(items) => items,
    };

    if !part
        .qualifiers
        .is_empty()
    {
        let leaf = PartMetadata::default();
        let mut pieces: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let qualifier = part
                    .qualifiers
                    .get(i)
                    .unwrap_or(&leaf);
                render_part(item, qualifier)
            })
            .collect();
        drop_trailing_empty(&mut pieces);
        pieces.reverse();
        return pieces.join("/");
    }

    if !part
        .elements
        .is_empty()
    {
        let leaf = PartMetadata::default();
        let mut pieces: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let element = part
                    .elements
                    .get(i)
                    .unwrap_or(&leaf);
                let text = render_part(item, element);
                match item {
                    ParameterValue::List(_) if !element.elements.is_empty() && !text.is_empty() => {
                        format!("({})", text)
                    }
                    _ => text,
                }
            })
            .collect();
        drop_trailing_empty(&mut pieces);
        return pieces.join(" ");
    }

    let pieces: Vec<String> = items
        .iter()
        .map(|item| render_part(item, part))
        .filter(|piece| !piece.is_empty())
        .collect();
    pieces.join(" ")
}

fn drop_trailing_empty(pieces: &mut Vec<String>) {
    while let Some(last) = pieces.last() {
        if last.is_empty() {
            pieces.pop();
        } else {
            break;
        }
    }
}
