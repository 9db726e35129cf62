pub mod access_gate;
pub mod middleware;

pub use access_gate::{Decision, DenyReason, decide, is_public, is_session_exit, needs_profile};
