//! Target schemas
//!
//! Each stream declares a fixed flat schema for its emitted records. The
//! schema is a downstream contract only: flattening does not validate
//! against it, so a vendor payload change can produce extra or missing
//! keys without failing the run.

mod types;

pub use types::{Field, FieldType, Schema, SchemaBuilder};
