//! Configuration handling
use std::fmt;

use url::Url;

use crate::{
    bitbucket::BITBUCKET_API_URL, cli::ImporterCli, errors::ImporterError, github::GITHUB_API_URL,
};

/// Login and secret for one platform
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Login
    login: String,

    /// Password or token
    secret: String,
}

impl Credentials {
    /// Create new credentials
    pub fn new(login: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            secret: secret.into(),
        }
    }

    /// Login
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Password or token
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("login", &self.login)
            .field("secret", &"***")
            .finish()
    }
}

/// Configuration data
#[derive(Clone, Debug)]
pub struct ImporterConfig {
    /// Bitbucket account owning the repositories
    pub source_owner: String,

    /// Bitbucket credentials
    pub source_credentials: Credentials,

    /// GitHub organization receiving the repositories
    pub destination_owner: String,

    /// GitHub credentials
    pub destination_credentials: Credentials,

    /// Bitbucket API base URL
    pub bitbucket_api: Url,

    /// GitHub API base URL
    pub github_api: Url,

    /// Verbosity level
    pub verbose: u8,
}

impl ImporterConfig {
    /// Create a configuration with the default API URLs
    /// # Errors
    /// Error if a default API URL can't be parsed
    pub fn try_new(
        source_owner: impl Into<String>,
        source_credentials: Credentials,
        destination_owner: impl Into<String>,
        destination_credentials: Credentials,
    ) -> Result<Self, ImporterError> {
        Ok(Self {
            source_owner: source_owner.into(),
            source_credentials,
            destination_owner: destination_owner.into(),
            destination_credentials,
            bitbucket_api: Url::parse(BITBUCKET_API_URL)?,
            github_api: Url::parse(GITHUB_API_URL)?,
            verbose: 0,
        })
    }

    /// Log level matching the verbosity
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

impl TryFrom<ImporterCli> for ImporterConfig {
    type Error = ImporterError;

    fn try_from(cli_args: ImporterCli) -> Result<Self, Self::Error> {
        let mut config = Self::try_new(
            cli_args.bitbucket_owner,
            Credentials::new(cli_args.bitbucket_login, cli_args.bitbucket_password),
            cli_args.github_owner,
            Credentials::new(cli_args.github_login, cli_args.github_password),
        )?;
        if let Some(url) = cli_args.bitbucket_api {
            config.bitbucket_api = url;
        }
        if let Some(url) = cli_args.github_api {
            config.github_api = url;
        }
        config.verbose = cli_args.verbose;
        Ok(config)
    }
}
