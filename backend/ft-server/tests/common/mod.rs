#![allow(dead_code)]

//! Test infrastructure for ft-server HTTP tests

pub mod requests;
pub mod test_state;

pub use requests::*;
pub use test_state::*;
