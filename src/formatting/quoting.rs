//! Canonical surface form of a single value: uppercased name, verbatim
//! expression, or quoted string.

use crate::language::*;

const OPERATORS: [&str; 9] = [
    "*CAT", "*TCAT", "*BCAT", "*EQ", "*NE", "*LT", "*LE", "*GT", "*GE",
];

/// Decide how a value is written. The order of these checks matters: a
/// name or special value wins over everything else, then built-in
/// expressions, then values which are already quoted, then numbers; any
/// remaining text is quoted.
pub fn quote_or_format(value: &str, allowed: &[String], kind: ParameterType) -> String {
    if value.is_empty() {
        return String::new();
    }

    let upper = value.to_uppercase();

    if kind.is_name()
        || allowed
            .iter()
            .any(|special| special.eq_ignore_ascii_case(&upper))
        || is_valid_name(value)
        || value.starts_with('*')
    {
        if is_quoted(value) {
            return value.to_string();
        }
        return upper;
    }

    if is_expression(value) {
        return value.to_string();
    }

    if is_quoted(value) || is_numeric(value) {
        return value.to_string();
    }

    format!("'{}'", value.replace('\'', "''"))
}

/// A bare name (up to 11 characters), a variable, or a quoted literal.
pub fn is_valid_name(value: &str) -> bool {
    let re = regex!(r"^&?[A-Za-z$#@][A-Za-z0-9$#@_.]{0,10}$");
    if re.is_match(value) {
        return true;
    }

    let re = regex!(r"^'(?:[^']|'')*'$");
    re.is_match(value)
}

/// Built-in expressions are written as they are and never quoted.
pub fn is_expression(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.starts_with('(') && trimmed.ends_with(')') {
        return true;
    }

    let upper = trimmed.to_uppercase();
    if OPERATORS
        .iter()
        .any(|operator| upper.contains(operator))
    {
        return true;
    }

    let re = regex!(r"%[A-Za-z]+\(");
    if re.is_match(trimmed) {
        return true;
    }

    let re = regex!(r"&[A-Za-z][A-Za-z0-9]*[*%]");
    re.is_match(trimmed)
}
