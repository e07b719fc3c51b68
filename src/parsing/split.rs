//! Splitting raw parameter values into occurrences, qualifier parts, and
//! element parts, respecting quotes and parenthesis.

/// Tracks whether a scan is inside quotes and how deeply it is nested in
/// parenthesis. Depth is not tracked while inside quotes.
#[derive(Debug, Default)]
pub(crate) struct Depth {
    single: bool,
    double: bool,
    nesting: usize,
}

impl Depth {
    pub(crate) fn quoted(&self) -> bool {
        self.single || self.double
    }

    pub(crate) fn observe(&mut self, c: char) {
        match c {
            '\'' if !self.double => self.single = !self.single,
            '"' if !self.single => self.double = !self.double,
            '(' if !self.quoted() => self.nesting += 1,
            ')' if !self.quoted() => self.nesting = self.nesting.saturating_sub(1),
            _ => {}
        }
    }

    fn outermost(&self) -> bool {
        !self.quoted() && self.nesting == 0
    }
}

/// Split a value on whitespace at the outermost level. Parenthesized
/// groups and quoted strings come back whole.
pub fn split_multi_instance(value: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = Depth::default();
    let mut start = None;

    for (i, c) in value.char_indices() {
        if c.is_whitespace() && depth.outermost() {
            if let Some(begin) = start.take() {
                parts.push(&value[begin..i]);
            }
            continue;
        }
        if start.is_none() {
            start = Some(i);
        }
        depth.observe(c);
    }

    if let Some(begin) = start {
        parts.push(&value[begin..]);
    }

    parts
}

/// Split a qualified name on '/' at the outermost level, left to right as
/// written, making at most `count - 1` splits. Trailing empty parts are
/// dropped.
pub fn split_qualified(value: &str, count: usize) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = Depth::default();
    let mut start = 0;

    for (i, c) in value.char_indices() {
        if parts.len() + 1 >= count {
            break;
        }
        if c == '/' && depth.outermost() {
            parts.push(&value[start..i]);
            start = i + 1;
            continue;
        }
        depth.observe(c);
    }
    parts.push(&value[start..]);

    while let Some(last) = parts.last() {
        if last.is_empty() {
            parts.pop();
        } else {
            break;
        }
    }

    parts
}

/// Remove one pair of parenthesis enclosing the whole value, if present.
pub fn strip_parens(value: &str) -> &str {
    let trimmed = value.trim();
    if !trimmed.starts_with('(') || !trimmed.ends_with(')') {
        return value;
    }

    // make sure the opening parenthesis is matched by the final one and not
    // by something earlier, as in "(A) (B)"
    let mut depth = Depth::default();
    for (i, c) in trimmed.char_indices() {
        depth.observe(c);
        if depth.outermost() && i + 1 < trimmed.len() {
            return value;
        }
    }

    trimmed[1..trimmed.len() - 1].trim()
}
