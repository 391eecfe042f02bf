//! # pz-core
//!
//! Error types and shared macros for prazo-rs.
//!
//! Every other crate in the workspace builds on the single [`errors::Error`]
//! enum and the `ensure!` / `fail!` convenience macros defined here.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

pub use errors::{Error, Result};
