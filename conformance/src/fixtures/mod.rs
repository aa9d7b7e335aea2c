//! Instance fixtures for builder conformance.
//!
//! Each constant holds an entity document (see [`crate::document`]) whose
//! records all state the outcome they expect. The `instances` validator
//! builds every record and compares.

mod agreement;
mod association;
mod empty_values;
mod minimal;
mod strict;

pub use agreement::AGREEMENT_LIFECYCLE;
pub use association::OWNERSHIP;
pub use empty_values::EMPTY_VALUES;
pub use minimal::MINIMAL;
pub use strict::STRICT_BOUNDS;

/// Every fixture with its name, in run order.
pub const ALL: &[(&str, &str)] = &[
    ("minimal", MINIMAL),
    ("agreement_lifecycle", AGREEMENT_LIFECYCLE),
    ("ownership", OWNERSHIP),
    ("empty_values", EMPTY_VALUES),
    ("strict_bounds", STRICT_BOUNDS),
];
