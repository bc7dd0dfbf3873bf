//! Pure policy evaluation (no IO).
//!
//! Input: a peer's reported mod inventory and a policy built elsewhere.
//! Output: accept/reject verdict + one finding per failed rule.

#![forbid(unsafe_code)]

pub mod policy;
pub mod report;
pub mod rule;

mod engine;
pub mod checks;

#[cfg(test)]
mod test_support;

pub use engine::evaluate;
