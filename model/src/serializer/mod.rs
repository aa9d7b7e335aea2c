//! Export of the resolved rule table.
//!
//! - **JSON** ([`json`]): one node per entity type with its resolved rules,
//!   written by `hqdm-rules` to `<out>/hqdm.rules.json`.

pub mod json;
