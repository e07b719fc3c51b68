//! Parser, assembler, and fixed-column formatter for CL command statements.

#[macro_use]
mod regex;

pub mod formatting;
pub mod language;
pub mod parsing;
pub mod rendering;
