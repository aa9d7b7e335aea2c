//! Rule rows for the bundled HQDM entity types.
//!
//! Each sub-module holds the rows for one part of the hierarchy. A row
//! declares only what is new or narrower for its type; everything else is
//! inherited when [`RuleTable::from_rows`](crate::RuleTable::from_rows)
//! resolves the table. Adding a type means adding a row here and a variant
//! to [`EntityType`](crate::EntityType).

pub mod activity;
pub mod agreement;
pub mod association;
pub mod extent;
pub mod top;

use crate::rules::TypeRow;

/// Every bundled row, roots first.
#[must_use]
pub fn rows() -> Vec<TypeRow> {
    let mut rows = top::rows();
    rows.extend(extent::rows());
    rows.extend(activity::rows());
    rows.extend(agreement::rows());
    rows.extend(association::rows());
    rows
}
