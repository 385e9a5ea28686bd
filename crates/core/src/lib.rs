//! Domain types shared by the repository and HTTP layers.
//!
//! This crate has zero internal dependencies so it can be used by the `db`
//! and `api` crates alike.

pub mod error;
pub mod job_key;
pub mod types;
