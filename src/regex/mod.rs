// Shared regular expression support

#[macro_use]
mod cache;
