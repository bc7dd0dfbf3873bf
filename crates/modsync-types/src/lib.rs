//! Stable DTOs and IDs used across the modsync workspace.
//!
//! This crate is intentionally boring:
//! - version and inventory types reported by peers
//! - data types for the emitted decision receipt
//! - stable string IDs and codes
//! - explain registry for operator guidance

#![forbid(unsafe_code)]

pub mod error;
pub mod explain;
pub mod ids;
pub mod inventory;
pub mod receipt;
pub mod version;

pub use error::FormatError;
pub use explain::{all_check_ids, all_codes, lookup_explanation, ExamplePair, Explanation};
pub use inventory::{ModInventory, ReportedMod};
pub use receipt::{
    DecisionData, DecisionReport, Finding, ToolMeta, Verdict, SCHEMA_DECISION_V1,
};
pub use version::{parse_bound, ModVersion};
