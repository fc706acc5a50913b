//! Client-side types and commands for the obot platform API.
//!
//! - [`types`]: wire models for API resources such as [`types::Project`].
//! - [`cli`]: commands exposed by the `obot` binary.
//! - [`version`]: the build version reported by the client.

pub mod cli;
mod error;
pub mod types;
pub mod version;

pub use error::{Error, Result};
