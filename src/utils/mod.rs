//! Shared utilities.

mod bounded;
mod selector;

// Re-export public API
pub use bounded::map_bounded;
pub use selector::parse_selector_unsafe;
