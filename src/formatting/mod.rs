//! Quoting, assembly, and fixed-column layout of CL statements

mod assembler;
mod formatter;
mod quoting;

pub use assembler::*;
pub use formatter::*;
pub use quoting::*;
