//! Response decoding
//!
//! Turns a raw response body into a list of record values. The Tilroy API
//! returns a JSON array at the response root, selected with the JSONPath
//! `$[*]`; other selectors are supported for completeness.

mod decoders;

pub use decoders::JsonDecoder;

/// JSONPath selector for the Tilroy response shape (array at the root)
pub const RECORDS_JSONPATH: &str = "$[*]";

#[cfg(test)]
mod tests;
