//! HTTP middleware: CORS and security headers.

pub mod cors;
pub mod security;

pub use cors::{create_cors_layer, create_cors_layer_from_env, create_permissive_cors_layer};
pub use security::security_headers;
