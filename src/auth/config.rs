use std::fmt;

use super::SslConfig;

/// Authentication method currently selected on an [`AuthConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// HTTP basic auth (RFC 7617).
    Basic,
    /// HTTP digest auth (RFC 7616).
    Digest,
    /// Negotiate/SPNEGO.
    Negotiate,
    /// NTLM.
    Ntlm,
}

impl AuthType {
    /// Returns the lowercase method name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Digest => "digest",
            Self::Negotiate => "negotiate",
            Self::Ntlm => "ntlm",
        }
    }
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Username and password for basic, digest and NTLM auth.
///
/// The password is redacted in Debug output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials. Pass an empty password when none is known.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password. Sensitive; never log it.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns `(username, password)`.
    #[must_use]
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// HTTP and SSL authentication settings for a request.
///
/// At most one HTTP method is active. Selecting a method replaces the active
/// one but keeps every method's stored credentials, so [`Self::basic`] still
/// returns the basic payload after switching to digest. SSL client auth is
/// tracked separately by the nested [`SslConfig`].
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    auth_type: Option<AuthType>,
    basic: Option<Credentials>,
    digest: Option<Credentials>,
    ntlm: Option<Credentials>,
    ssl: SslConfig,
}

impl AuthConfig {
    /// Creates a config with no method selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active method, if any.
    #[must_use]
    pub fn auth_type(&self) -> Option<AuthType> {
        self.auth_type
    }

    /// Returns the stored basic credentials, whether or not basic is active.
    #[must_use]
    pub fn basic(&self) -> Option<&Credentials> {
        self.basic.as_ref()
    }

    /// Stores basic credentials and makes basic the active method.
    pub fn set_basic(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.basic = Some(Credentials::new(username, password));
        self.auth_type = Some(AuthType::Basic);
    }

    /// Returns the stored digest credentials, whether or not digest is active.
    #[must_use]
    pub fn digest(&self) -> Option<&Credentials> {
        self.digest.as_ref()
    }

    /// Stores digest credentials and makes digest the active method.
    pub fn set_digest(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.digest = Some(Credentials::new(username, password));
        self.auth_type = Some(AuthType::Digest);
    }

    /// Returns the stored NTLM credentials, whether or not NTLM is active.
    #[must_use]
    pub fn ntlm(&self) -> Option<&Credentials> {
        self.ntlm.as_ref()
    }

    /// Stores NTLM credentials and makes NTLM the active method.
    pub fn set_ntlm(&mut self, username: impl Into<String>, password: impl Into<String>) {
        self.ntlm = Some(Credentials::new(username, password));
        self.auth_type = Some(AuthType::Ntlm);
    }

    /// Makes Negotiate/SPNEGO the active method.
    pub fn set_negotiate(&mut self) {
        self.auth_type = Some(AuthType::Negotiate);
    }

    /// Returns the SSL client-auth settings.
    #[must_use]
    pub fn ssl(&self) -> &SslConfig {
        &self.ssl
    }

    /// Returns the SSL client-auth settings for modification.
    ///
    /// Access alone does not enable SSL client auth; see [`SslConfig::is_present`].
    pub fn ssl_mut(&mut self) -> &mut SslConfig {
        &mut self.ssl
    }

    /// Returns the credentials of the active method.
    ///
    /// `None` when no method is selected or the method carries no credentials.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        match self.auth_type? {
            AuthType::Basic => self.basic(),
            AuthType::Digest => self.digest(),
            AuthType::Ntlm => self.ntlm(),
            AuthType::Negotiate => None,
        }
    }

    #[must_use]
    pub fn is_basic(&self) -> bool {
        self.auth_type == Some(AuthType::Basic)
    }

    #[must_use]
    pub fn is_digest(&self) -> bool {
        self.auth_type == Some(AuthType::Digest)
    }

    /// Returns true for basic or digest.
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.is_basic() || self.is_digest()
    }

    #[must_use]
    pub fn is_negotiate(&self) -> bool {
        self.auth_type == Some(AuthType::Negotiate)
    }

    #[must_use]
    pub fn is_ntlm(&self) -> bool {
        self.auth_type == Some(AuthType::Ntlm)
    }

    /// Returns true when SSL client auth is configured, independent of the
    /// active HTTP method.
    #[must_use]
    pub fn is_ssl(&self) -> bool {
        self.ssl.is_present()
    }
}
