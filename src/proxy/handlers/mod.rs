//! Proxy server HTTP handlers.

mod cors;
mod forward;
mod static_files;

pub use cors::preflight_handler;
pub use forward::forward_handler;
pub use static_files::static_handler;
