//! Wire models for obot API resources.
//!
//! Resources are composed from shared fragments that flatten into a single
//! JSON object:
//!
//! - [`Metadata`]: identity and audit fields carried by every resource.
//! - [`ThreadManifest`]: conversation configuration shared by threads and projects.
//! - [`Project`]: a workspace, built from both of the above plus its own fields.
//!
//! Collections use [`List`], which is a plain JSON array on the wire.
//! Keys the models do not know are dropped on decode and never re-emitted.

mod list;
mod metadata;
mod project;
mod thread;
mod tree;

pub use list::*;
pub use metadata::*;
pub use project::*;
pub use thread::*;
pub use tree::*;

use serde::{Deserialize, Deserializer};

/// Decodes a string field where an empty string means the field is absent.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Encoding counterpart of [`empty_as_none`]: skips absent and empty strings.
pub(crate) fn is_none_or_empty(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}
