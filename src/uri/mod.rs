//! Web addresses.

mod http_endpoint;

pub use http_endpoint::*;

mod tests;
