//! Use case orchestration for modsync.
//!
//! This crate provides the application layer: use cases that coordinate the settings, lists,
//! domain, and render layers. The host (game server, CLI) owns transport and sessions and
//! reaches this crate through [`Gatekeeper`] and the [`SessionControl`] trait.

#![forbid(unsafe_code)]

mod explain;
mod gatekeeper;
mod render;
mod report;
mod session;

pub use explain::{format_explanation, format_not_found, run_explain, ExplainOutput};
pub use gatekeeper::{Gatekeeper, StartInput, StartOutput};
pub use render::{render_report, OutputFormat};
pub use report::{build_report, parse_inventory_json, serialize_report, verdict_exit_code};
pub use session::{ConnectionId, KickReason, SessionControl};
