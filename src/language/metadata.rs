//! Parameter metadata describing the shape of each keyword a command
//! accepts, and the keyword to value map recovered from a statement.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The declared type of a parameter or of one of its parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParameterType {
    Name,
    #[serde(rename = "SNAME")]
    SimpleName,
    #[serde(rename = "CNAME")]
    CommunicationsName,
    #[serde(rename = "PNAME")]
    PathName,
    Generic,
    Char,
    Dec,
    Int2,
    Int4,
    Uint2,
    Uint4,
    #[serde(rename = "LGL")]
    Logical,
    #[serde(rename = "VARNAME")]
    VariableName,
    Date,
    Time,
    Hex,
    Cmd,
    #[default]
    #[serde(other)]
    Other,
}

impl ParameterType {
    /// Types whose values are always names, never free text.
    pub fn is_name(&self) -> bool {
        matches!(
            self,
            ParameterType::Name
                | ParameterType::SimpleName
                | ParameterType::CommunicationsName
                | ParameterType::Generic
        )
    }
}

/// Describes one qualifier or element part. Element parts can themselves
/// be qualified or be lists of further elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartMetadata {
    pub kind: ParameterType,
    pub allowed: Vec<String>,
    pub qualifiers: Vec<PartMetadata>,
    pub elements: Vec<PartMetadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMetadata {
    pub keyword: String,
    #[serde(default)]
    pub kind: ParameterType,
    #[serde(default = "single")]
    pub max: u32,
    #[serde(default)]
    pub default: Option<ParameterValue>,
    #[serde(default)]
    pub allowed: Vec<String>,
    #[serde(default)]
    pub qualifiers: Vec<PartMetadata>,
    #[serde(default)]
    pub elements: Vec<PartMetadata>,
}

fn single() -> u32 {
    1
}

impl ParameterMetadata {
    pub fn new(keyword: &str) -> ParameterMetadata {
        ParameterMetadata {
            keyword: keyword.to_uppercase(),
            kind: ParameterType::Other,
            max: 1,
            default: None,
            allowed: Vec::new(),
            qualifiers: Vec::new(),
            elements: Vec::new(),
        }
    }

    /// The shape of a single occurrence of this parameter.
    pub fn shape(&self) -> PartMetadata {
        PartMetadata {
            kind: self.kind,
            allowed: self
                .allowed
                .clone(),
            qualifiers: self
                .qualifiers
                .clone(),
            elements: self
                .elements
                .clone(),
        }
    }
}

/// Find the metadata for a keyword, ignoring case.
pub fn lookup<'a>(metadata: &'a [ParameterMetadata], keyword: &str) -> Option<&'a ParameterMetadata> {
    metadata
        .iter()
        .find(|parameter| {
            parameter
                .keyword
                .eq_ignore_ascii_case(keyword)
        })
}

/// Allowed special values for a keyword; empty when the keyword is unknown.
pub fn allowed_values<'a>(metadata: &'a [ParameterMetadata], keyword: &str) -> &'a [String] {
    match lookup(metadata, keyword) {
        Some(parameter) => &parameter.allowed,
        None => &[],
    }
}

/// Declared type for a keyword; Other when the keyword is unknown.
pub fn declared_type(metadata: &[ParameterMetadata], keyword: &str) -> ParameterType {
    match lookup(metadata, keyword) {
        Some(parameter) => parameter.kind,
        None => ParameterType::Other,
    }
}

/// A parsed parameter value: a single string, or an ordered list of further
/// values (occurrences, qualifier parts, or element parts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Text(String),
    List(Vec<ParameterValue>),
}

impl ParameterValue {
    pub fn is_empty(&self) -> bool {
        match self {
            ParameterValue::Text(text) => text
                .trim()
                .is_empty(),
            ParameterValue::List(items) => items
                .iter()
                .all(|item| item.is_empty()),
        }
    }
}

impl From<&str> for ParameterValue {
    fn from(text: &str) -> ParameterValue {
        ParameterValue::Text(text.to_string())
    }
}

impl<T> From<Vec<T>> for ParameterValue
where
    T: Into<ParameterValue>,
{
    fn from(items: Vec<T>) -> ParameterValue {
        ParameterValue::List(
            items
                .into_iter()
                .map(Into::into)
                .collect(),
        )
    }
}

/// Keyword (uppercase) to value.
pub type ParameterMap = HashMap<String, ParameterValue>;
