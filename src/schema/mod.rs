//! JSON Schema module
//!
//! Declarative field tables that serialize to the JSON Schema documents
//! emitted in SCHEMA messages and in the discovery catalog.
//!
//! Properties keep their declaration order. Optional fields are nullable
//! (`["string", "null"]`); required fields are listed under `required`.

mod types;

pub use types::{JsonSchema, JsonType, JsonTypeOrArray, Properties, Property, SchemaProperty};

#[cfg(test)]
mod tests;
