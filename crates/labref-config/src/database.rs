//! Relational store configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string: a local database path, `:memory:`, or a
    /// `libsql://` / `https://` server URL.
    #[serde(default)]
    pub url: String,

    /// Auth token for remote libSQL servers. Ignored for local databases.
    #[serde(default)]
    pub auth_token: String,
}

impl DatabaseConfig {
    /// Check if a connection string is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Whether the connection string points at a remote server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        let url = self.url.trim();
        ["libsql://", "http://", "https://"]
            .iter()
            .any(|scheme| url.starts_with(scheme))
    }

    /// The auth token, if one is set.
    #[must_use]
    pub fn auth_token(&self) -> Option<&str> {
        let token = self.auth_token.trim();
        (!token.is_empty()).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = DatabaseConfig::default();
        assert!(!config.is_configured());
        assert!(config.auth_token().is_none());
    }

    #[test]
    fn whitespace_url_is_not_configured() {
        let config = DatabaseConfig {
            url: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn remote_detection() {
        let mut config = DatabaseConfig {
            url: "libsql://refdata-lab.turso.io".into(),
            auth_token: "token".into(),
        };
        assert!(config.is_remote());
        assert_eq!(config.auth_token(), Some("token"));

        config.url = "./labref.db".into();
        assert!(!config.is_remote());

        config.url = ":memory:".into();
        assert!(!config.is_remote());
    }
}
