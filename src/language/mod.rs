// Types representing CL statements, parameter metadata, and layout

mod error;
mod layout;
mod metadata;
mod types;

// Re-export all public symbols
pub use error::*;
pub use layout::*;
pub use metadata::*;
pub use types::*;
