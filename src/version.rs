//! Build version of the client.
//!
//! Release builds inject the value through the `OBOT_VERSION` environment
//! variable at compile time. Local builds fall back to the crate version.

/// The version string baked into this binary.
pub const VERSION: &str = match option_env!("OBOT_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Returns the process-wide version string.
pub fn get() -> &'static str {
    VERSION
}
