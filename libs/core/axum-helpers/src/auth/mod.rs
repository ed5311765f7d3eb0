//! Authentication module.
//!
//! Sessions are bearer JWTs minted by the external auth provider and shared
//! via the `SESSION_SECRET`. The middleware verifies the token signature and
//! expiry before any storage access and injects [`SessionClaims`] into the
//! request extensions; handlers behind the middleware can assume a valid
//! session.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{SessionAuth, SessionConfig, session_auth_middleware};
//! use core_config::FromEnv;
//!
//! let auth = SessionAuth::new(&SessionConfig::from_env()?);
//!
//! let protected = Router::new()
//!     .route("/fooditem", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(auth, session_auth_middleware));
//! ```

pub mod config;
pub mod middleware;
pub mod session;

pub use config::SessionConfig;
pub use middleware::session_auth_middleware;
pub use session::{SessionAuth, SessionClaims, SESSION_TOKEN_TTL};
