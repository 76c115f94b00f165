//! Authentication settings carried by a request.
//!
//! [`AuthConfig`] selects one HTTP method (basic, digest, negotiate, NTLM)
//! and owns the SSL client-auth settings in [`SslConfig`].

mod config;
mod ssl;

pub use config::{AuthConfig, AuthType, Credentials};
pub use ssl::{SslConfig, VerifyMode};
