//! Harness configuration
//!
//! An explicit, immutable record threaded through the runner and every test
//! as a context argument.

/// Connection details for the subject NNTP server
///
/// TLS is out of scope for this harness, so this carries no `tls`/
/// `allow_insecure_tls` fields.
#[must_use]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Subject server hostname or address
    pub host: String,
    /// Subject server port (typically 119 or 1119 for a test instance)
    pub port: u16,
    /// AUTHINFO USER value, used only if the server requires it
    pub username: String,
    /// AUTHINFO PASS value
    pub password: String,
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Create a configuration for the standard plaintext NNTP port (119)
    pub fn plain(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(host, 119, username, password)
    }
}

/// Full harness configuration surface
#[must_use]
#[derive(Debug, Clone)]
pub struct Config {
    /// Subject server connection details
    pub server: ServerConfig,
    /// Newsgroup used for posting/propagation tests
    pub group: String,
    /// Hierarchy prefix used by control-message tests (newgroup/rmgroup)
    pub hierarchy: String,
    /// From-header address used by posted probe articles
    pub email: String,
    /// Domain suffix used to build Message-ID and Path values
    pub domain: String,
    /// Bind address for the in-process loopback peering server, as
    /// `(host, port)`; `"*"` means "all interfaces"
    pub local_server_address: (String, u16),
    /// Overall wall-clock budget for a single test, in seconds
    pub time_limit: u64,
    /// Optional shell command re-run periodically while waiting on a
    /// propagation test
    pub trigger: Option<String>,
    /// How often `trigger` is re-invoked while waiting, in seconds
    pub trigger_timeout: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::plain("localhost", "", ""),
            group: "local.test".to_string(),
            hierarchy: String::new(),
            email: "invalid@invalid.invalid".to_string(),
            domain: "test.invalid".to_string(),
            local_server_address: ("*".to_string(), 1119),
            time_limit: 60,
            trigger: None,
            trigger_timeout: 5,
        }
    }
}

impl Config {
    /// Start from defaults, overriding only the subject server connection
    pub fn for_server(server: ServerConfig) -> Self {
        Self {
            server,
            ..Self::default()
        }
    }
}
