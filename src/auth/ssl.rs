use std::path::{Path, PathBuf};

/// How the peer certificate is verified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerifyMode {
    /// Verify the peer certificate (default).
    #[default]
    Peer,
    /// Skip peer verification.
    None,
}

/// SSL client-authentication settings.
///
/// Only the "configured" predicate is interpreted here; backends read the
/// paths and hand them to their TLS stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SslConfig {
    cert_file: Option<PathBuf>,
    cert_key_file: Option<PathBuf>,
    ca_cert_file: Option<PathBuf>,
    verify_mode: VerifyMode,
}

impl SslConfig {
    /// Returns true when SSL client auth should be applied: peer verification
    /// is disabled, or both a client certificate and its key are configured.
    #[must_use]
    pub fn is_present(&self) -> bool {
        self.verify_mode == VerifyMode::None
            || (self.cert_file.is_some() && self.cert_key_file.is_some())
    }

    #[must_use]
    pub fn cert_file(&self) -> Option<&Path> {
        self.cert_file.as_deref()
    }

    pub fn set_cert_file(&mut self, path: impl Into<PathBuf>) {
        self.cert_file = Some(path.into());
    }

    #[must_use]
    pub fn cert_key_file(&self) -> Option<&Path> {
        self.cert_key_file.as_deref()
    }

    pub fn set_cert_key_file(&mut self, path: impl Into<PathBuf>) {
        self.cert_key_file = Some(path.into());
    }

    #[must_use]
    pub fn ca_cert_file(&self) -> Option<&Path> {
        self.ca_cert_file.as_deref()
    }

    pub fn set_ca_cert_file(&mut self, path: impl Into<PathBuf>) {
        self.ca_cert_file = Some(path.into());
    }

    #[must_use]
    pub fn verify_mode(&self) -> VerifyMode {
        self.verify_mode
    }

    pub fn set_verify_mode(&mut self, mode: VerifyMode) {
        self.verify_mode = mode;
    }
}
