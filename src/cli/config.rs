use anyhow::Context;
use insta_api::{
    basic_display::BasicDisplayClient,
    graph::GraphClient,
    legacy::LegacyClient,
};
use serde::Deserialize;
use std::{
    collections::HashMap,
    path::Path,
};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub legacy: Option<LegacyConfig>,

    pub basic_display: Option<BasicDisplayConfig>,

    pub graph: Option<GraphConfig>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl Config {
    /// Load a config from a path
    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config from `{}`", path.display()))
            .and_then(|s| Self::load_from_str(&s))
    }

    /// Load a config from a str
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("failed to parse config")
    }

    /// The `[legacy]` table
    pub fn legacy(&self) -> anyhow::Result<&LegacyConfig> {
        self.legacy
            .as_ref()
            .context("the config has no `[legacy]` table")
    }

    /// The `[basic_display]` table
    pub fn basic_display(&self) -> anyhow::Result<&BasicDisplayConfig> {
        self.basic_display
            .as_ref()
            .context("the config has no `[basic_display]` table")
    }

    /// The `[graph]` table
    pub fn graph(&self) -> anyhow::Result<&GraphConfig> {
        self.graph
            .as_ref()
            .context("the config has no `[graph]` table")
    }

    /// Validate a config
    pub fn validate(&self) -> Vec<ValidationMessage> {
        let mut errors = Vec::new();

        push_unknown_keys(&mut errors, None, &self.extra);

        if let Some(config) = &self.legacy {
            push_unknown_keys(&mut errors, Some("legacy"), &config.extra);

            if config.access_token.is_none() && config.client_id.is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Warn,
                    error: ValidationError::NoCredentials("legacy"),
                });
            }

            if config.signed_requests && config.client_secret.is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::MissingClientSecret("legacy"),
                });
            }
        }

        if let Some(config) = &self.basic_display {
            push_unknown_keys(&mut errors, Some("basic_display"), &config.extra);

            if config.access_token.is_none() && config.client_id.is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Warn,
                    error: ValidationError::NoCredentials("basic_display"),
                });
            }
        }

        if let Some(config) = &self.graph {
            push_unknown_keys(&mut errors, Some("graph"), &config.extra);

            if config.access_token.is_none() && config.client_id.is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Warn,
                    error: ValidationError::NoCredentials("graph"),
                });
            }

            if config.appsecret_proof && config.client_secret.is_none() {
                errors.push(ValidationMessage {
                    severity: Severity::Error,
                    error: ValidationError::MissingClientSecret("graph"),
                });
            }
        }

        errors
    }
}

fn push_unknown_keys(
    errors: &mut Vec<ValidationMessage>,
    table: Option<&'static str>,
    extra: &HashMap<String, toml::Value>,
) {
    let mut keys: Vec<_> = extra.keys().collect();
    keys.sort();
    for key in keys {
        let key = match table {
            Some(table) => format!("{table}.{key}"),
            None => key.clone(),
        };
        errors.push(ValidationMessage {
            severity: Severity::Warn,
            error: ValidationError::UnknownKey(key),
        });
    }
}

#[derive(Deserialize, Debug)]
pub struct LegacyConfig {
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,

    #[serde(default)]
    signed_requests: bool,

    base_url: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl LegacyConfig {
    /// Make a client from this config
    pub fn client(&self) -> LegacyClient {
        let mut client = LegacyClient::new().with_signed_requests(self.signed_requests);
        if let Some(access_token) = self.access_token.as_deref() {
            client = client.with_access_token(access_token);
        }
        if let Some(client_id) = self.client_id.as_deref() {
            client = client.with_client_id(client_id);
        }
        if let Some(client_secret) = self.client_secret.as_deref() {
            client = client.with_client_secret(client_secret);
        }
        if let Some(redirect_uri) = self.redirect_uri.as_deref() {
            client = client.with_redirect_uri(redirect_uri);
        }
        if let Some(base_url) = self.base_url.as_deref() {
            client = client.with_base_url(base_url);
        }
        client
    }
}

#[derive(Deserialize, Debug)]
pub struct BasicDisplayConfig {
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    base_url: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl BasicDisplayConfig {
    /// Make a client from this config
    pub fn client(&self) -> BasicDisplayClient {
        let mut client = BasicDisplayClient::new();
        if let Some(access_token) = self.access_token.as_deref() {
            client = client.with_access_token(access_token);
        }
        if let Some(client_id) = self.client_id.as_deref() {
            client = client.with_client_id(client_id);
        }
        if let Some(client_secret) = self.client_secret.as_deref() {
            client = client.with_client_secret(client_secret);
        }
        if let Some(redirect_uri) = self.redirect_uri.as_deref() {
            client = client.with_redirect_uri(redirect_uri);
        }
        if let Some(base_url) = self.base_url.as_deref() {
            client = client.with_base_url(base_url);
        }
        client
    }
}

#[derive(Deserialize, Debug)]
pub struct GraphConfig {
    access_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    redirect_uri: Option<String>,
    version: Option<String>,

    #[serde(default)]
    appsecret_proof: bool,

    base_url: Option<String>,

    /// The instagram user id used by hashtag searches
    user_id: Option<String>,

    #[serde(flatten)]
    extra: HashMap<String, toml::Value>,
}

impl GraphConfig {
    /// The configured instagram user id
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Make a client from this config
    pub fn client(&self) -> GraphClient {
        let mut client = GraphClient::new().with_appsecret_proof(self.appsecret_proof);
        if let Some(version) = self.version.as_deref() {
            client = client.with_version(version);
        }
        if let Some(access_token) = self.access_token.as_deref() {
            client = client.with_access_token(access_token);
        }
        if let Some(client_id) = self.client_id.as_deref() {
            client = client.with_client_id(client_id);
        }
        if let Some(client_secret) = self.client_secret.as_deref() {
            client = client.with_client_secret(client_secret);
        }
        if let Some(redirect_uri) = self.redirect_uri.as_deref() {
            client = client.with_redirect_uri(redirect_uri);
        }
        if let Some(base_url) = self.base_url.as_deref() {
            client = client.with_base_url(base_url);
        }
        client
    }
}

#[derive(Debug)]
pub struct ValidationMessage {
    severity: Severity,
    error: ValidationError,
}

impl ValidationMessage {
    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn error(&self) -> &ValidationError {
        &self.error
    }
}

#[derive(Debug)]
pub enum ValidationError {
    NoCredentials(&'static str),
    MissingClientSecret(&'static str),
    UnknownKey(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoCredentials(table) => {
                write!(f, "`[{table}]` has neither an access token nor a client id")
            }
            ValidationError::MissingClientSecret(table) => {
                write!(f, "`[{table}]` needs a client secret to sign requests")
            }
            ValidationError::UnknownKey(key) => write!(f, "unknown key `{key}`"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Warn,
    Error,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_full() {
        let config = Config::load_from_str(
            r#"
[legacy]
access_token = "fb2e77d.47a0479900504cb3ab4a1f626d174d2d"
client_secret = "6dc1787668c64c939929c17683d7cb74"
signed_requests = true

[basic_display]
access_token = "IGQV"

[graph]
access_token = "EAAB"
client_secret = "app-secret"
appsecret_proof = true
version = "v18.0"
user_id = "17841405822304914"
"#,
        )
        .expect("failed to parse");

        assert!(config.validate().is_empty());

        let graph = config.graph().expect("missing graph table");
        assert!(graph.user_id() == Some("17841405822304914"));
        assert!(graph.client().base_url() == "https://graph.facebook.com/v18.0");

        let legacy = config.legacy().expect("missing legacy table").client();
        assert!(legacy.access_token() == Some("fb2e77d.47a0479900504cb3ab4a1f626d174d2d"));
    }

    #[test]
    fn validation() {
        let config = Config::load_from_str(
            r#"
token = "old"

[legacy]
signed_requests = true
colour = "red"
"#,
        )
        .expect("failed to parse");

        let messages = config.validate();
        let errors: Vec<_> = messages
            .iter()
            .map(|message| (message.severity(), message.error().to_string()))
            .collect();

        assert!(errors.len() == 4);
        assert!(errors[0] == (Severity::Warn, "unknown key `token`".to_string()));
        assert!(errors[1] == (Severity::Warn, "unknown key `legacy.colour`".to_string()));
        assert!(errors[2].0 == Severity::Warn);
        assert!(errors[3].0 == Severity::Error);
    }

    #[test]
    fn missing_tables() {
        let config = Config::default();
        assert!(config.validate().is_empty());
        assert!(config.graph().is_err());
    }
}
