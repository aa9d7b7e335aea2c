//! Rule-table and builder validators.

pub mod builders;
pub mod hierarchy;
pub mod instances;
pub mod inventory;
pub mod narrowing;
