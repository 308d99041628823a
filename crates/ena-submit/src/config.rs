//! Credentials and endpoint configuration.
//!
//! Both sources are external collaborators: credentials come from the
//! environment, endpoints from a small TOML file. Missing values are fatal
//! configuration errors raised at first use, not at process start.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SubmitError};

/// Environment variable holding the archive user id.
pub const USER_VAR: &str = "ENA_USER";

/// Environment variable holding the archive secret.
pub const PASSWORD_VAR: &str = "ENA_PASSWORD";

/// Archive credential pair.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// Read both values from the environment, failing on the first missing
    /// or empty one.
    pub fn from_env() -> Result<Self> {
        Self::from_values(env::var(USER_VAR).ok(), env::var(PASSWORD_VAR).ok())
    }

    fn from_values(user: Option<String>, password: Option<String>) -> Result<Self> {
        let require = |value: Option<String>, name: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| SubmitError::Configuration(name.to_string()))
        };
        Ok(Self {
            user: require(user, USER_VAR)?,
            password: require(password, PASSWORD_VAR)?,
        })
    }
}

/// The three endpoint values the protocol needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Endpoints {
    /// Metadata submission URL of the test service.
    pub test_url: String,
    /// Metadata submission URL of the production service.
    pub production_url: String,
    /// Host of the data-file FTP service.
    pub ftp_host: String,
}

impl Endpoints {
    /// Load the endpoint file (TOML with `test-url`, `production-url`,
    /// `ftp-host` keys).
    pub fn load(path: &Path) -> Result<Self> {
        let endpoint_file = |message: String| SubmitError::EndpointFile {
            path: path.display().to_string(),
            message,
        };
        let content = fs::read_to_string(path).map_err(|err| endpoint_file(err.to_string()))?;
        toml::from_str(&content).map_err(|err| endpoint_file(err.to_string()))
    }
}

/// One of the two fixed submission targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnaServer {
    /// Test service; deposits are wiped daily.
    Test,
    Production,
}

impl EnaServer {
    fn base_url(self, endpoints: &Endpoints) -> &str {
        match self {
            Self::Test => &endpoints.test_url,
            Self::Production => &endpoints.production_url,
        }
    }

    /// Full submission URL with the credential pair embedded as the
    /// query-string auth token the service expects.
    pub fn submission_url(self, endpoints: &Endpoints, credentials: &Credentials) -> String {
        format!(
            "{}?auth=ENA%20{}%20{}",
            self.base_url(endpoints),
            credentials.user,
            credentials.password
        )
    }
}
