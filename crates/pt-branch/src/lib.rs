//! pt-branch: numbered branches and export records.
//!
//! Turns ordered element sequences into branches, resolves the per-element
//! export attributes through the host's attribute lookup, and flattens the
//! result into records with a stable field order.

pub mod assembler;
pub mod attributes;
pub mod record;

pub use assembler::{Assembly, Branch, BranchAssembler, BranchMember, CalcRole};
pub use attributes::{AttributeKeys, AttributeResolver};
pub use record::{composite_key, ExportRecord, RECORD_FIELDS};
