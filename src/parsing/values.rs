//! Interpreting parsed parameter values according to parameter metadata,
//! producing the keyword to value map that the assembler consumes.

use std::collections::HashSet;

use tracing::debug;

use crate::language::*;
use crate::parsing::split::*;

/// Recover the value of every parameter present in a statement. Keywords
/// not described by the metadata keep their raw text.
pub fn extract(statement: &Statement, metadata: &[ParameterMetadata]) -> ParameterMap {
    let mut result = ParameterMap::new();

    for parameter in &statement.parameters {
        let keyword = parameter
            .keyword
            .to_uppercase();
        let raw = parameter
            .value
            .to_string();

        let value = match lookup(metadata, &keyword) {
            Some(definition) => interpret(&raw, definition),
            None => {
                debug!(keyword = %keyword, "No metadata for keyword");
                ParameterValue::Text(raw)
            }
        };

        result.insert(keyword, value);
    }

    result
}

/// The keywords written in a statement, uppercased.
pub fn keywords(statement: &Statement) -> HashSet<String> {
    statement
        .parameters
        .iter()
        .map(|parameter| {
            parameter
                .keyword
                .to_uppercase()
        })
        .collect()
}

/// Split raw parameter text into occurrences, qualifier parts, and element
/// parts as the metadata describes. Qualifier parts come back with the
/// object name first, which is the reverse of how they are written.
pub fn interpret(raw: &str, definition: &ParameterMetadata) -> ParameterValue {
    let shape = definition.shape();

    if definition.max > 1 {
        let occurrences = split_multi_instance(raw)
            .into_iter()
            .map(|occurrence| interpret_occurrence(occurrence, &shape))
            .collect();
        ParameterValue::List(occurrences)
    } else {
        interpret_part(raw, &shape)
    }
}

fn interpret_occurrence(occurrence: &str, shape: &PartMetadata) -> ParameterValue {
    if shape
        .elements
        .is_empty()
    {
        interpret_part(occurrence, shape)
    } else {
        interpret_part(strip_parens(occurrence), shape)
    }
}

fn interpret_part(raw: &str, part: &PartMetadata) -> ParameterValue {
    if !part
        .qualifiers
        .is_empty()
    {
        let parts = split_qualified(raw, part.qualifiers.len())
            .into_iter()
            .rev()
            .map(|text| ParameterValue::Text(text.to_string()))
            .collect();
        ParameterValue::List(parts)
    } else if !part
        .elements
        .is_empty()
    {
        let parts = split_multi_instance(raw)
            .into_iter()
            .enumerate()
            .map(|(i, piece)| match part.elements.get(i) {
                Some(element) => interpret_occurrence(piece, element),
                None => ParameterValue::Text(piece.to_string()),
            })
            .collect();
        ParameterValue::List(parts)
    } else {
        ParameterValue::Text(raw.to_string())
    }
}

/// Bring a value into its fully split form, so that "LIB/OBJ" and
/// ["OBJ", "LIB"] compare equal for a qualified parameter.
pub fn normalize(value: &ParameterValue, definition: &ParameterMetadata) -> ParameterValue {
    match value {
        ParameterValue::Text(text) => interpret(text, definition),
        ParameterValue::List(items) if definition.max > 1 => {
            let shape = definition.shape();
            let occurrences = items
                .iter()
                .map(|item| match item {
                    ParameterValue::Text(text) => interpret_occurrence(text, &shape),
                    ParameterValue::List(_) => normalize_part(item, &shape),
                })
                .collect();
            ParameterValue::List(occurrences)
        }
        ParameterValue::List(_) => normalize_part(value, &definition.shape()),
    }
}

fn normalize_part(value: &ParameterValue, part: &PartMetadata) -> ParameterValue {
    match value {
        ParameterValue::Text(text) => interpret_part(text, part),
        ParameterValue::List(items) => {
            if part
                .elements
                .is_empty()
            {
                return value.clone();
            }
            let parts = items
                .iter()
                .enumerate()
                .map(|(i, item)| match part.elements.get(i) {
                    Some(element) => match item {
                        ParameterValue::Text(text) => interpret_occurrence(text, element),
                        ParameterValue::List(_) => normalize_part(item, element),
                    },
                    None => item.clone(),
                })
                .collect();
            ParameterValue::List(parts)
        }
    }
}
