//! Commands exposed by the `obot` binary.
//!
//! Each command writes to a caller-supplied writer so it can be driven from
//! tests as well as from `main`.

pub mod tree;
mod tree_render;
mod version;

pub use tree_render::render_forest;
pub use version::Version;
