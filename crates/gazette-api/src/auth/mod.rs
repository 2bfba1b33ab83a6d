//! Admin authentication: hashed-secret verification, session tokens, and the
//! middleware guarding the admin surface.

pub mod middleware;
pub mod session;

pub use middleware::{AuthFailureLimiter, AuthState};
pub use session::SessionStore;
