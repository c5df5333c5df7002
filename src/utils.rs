//! Utility functions
use std::fmt;

use chrono::{DateTime, Utc};

use crate::bitbucket::platform::BitbucketPlatform;
use crate::config::ImporterConfig;
use crate::errors::ImporterError;
use crate::github::platform::GithubPlatform;
use crate::importer::{ImportSummary, Importer};

/// A link through which a repository can be cloned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneLink {
    /// Protocol name given by the platform (https, ssh, ...)
    pub name: Option<String>,

    /// Clone URL
    pub href: String,
}

/// Repository information, as read from the source platform
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RepositoryDescriptor {
    /// Name of the repository
    pub name: String,

    /// Description of the repository
    pub description: String,

    /// Whether the repository is private
    pub private: bool,

    /// Clone links, in the order given by the platform
    pub clone_links: Vec<CloneLink>,

    /// Creation date
    pub created_on: Option<DateTime<Utc>>,

    /// Last update date
    pub updated_on: Option<DateTime<Utc>>,
}

impl RepositoryDescriptor {
    /// First clone URL whose scheme is `protocol`
    pub fn clone_url(&self, protocol: &str) -> Option<&str> {
        let prefix = format!("{protocol}:");
        self.clone_links
            .iter()
            .map(|link| link.href.as_str())
            .find(|href| href.starts_with(&prefix))
    }

    /// Clone URL over https
    pub fn https_clone_url(&self) -> Option<&str> {
        self.clone_url("https")
    }

    /// Protocol of each clone link, the scheme of the URL when the link has no name
    pub fn clone_protocols(&self) -> Vec<&str> {
        self.clone_links
            .iter()
            .map(|link| match &link.name {
                Some(name) => name.as_str(),
                None => link.href.split(':').next().unwrap_or_default(),
            })
            .collect()
    }
}

/// Repository on the destination platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationRepository {
    /// Owner (user or organization)
    pub owner: String,

    /// Repository name
    pub name: String,
}

impl DestinationRepository {
    /// Destination of the source repository `source_name`
    pub fn from_source(owner: &str, source_name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: normalize_repo_name(source_name),
        }
    }
}

impl fmt::Display for DestinationRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// State of an import job accepted by the destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportJob {
    /// Status of the import
    pub status: String,

    /// Human readable status
    pub status_text: Option<String>,

    /// URL of the import job
    pub url: Option<String>,
}

/// Lowercase the name and replace spaces with hyphens
pub fn normalize_repo_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Main function to import repositories
/// # Errors
/// Error if listing, creating or importing any repository fails
pub async fn main_import(config: ImporterConfig) -> Result<ImportSummary, ImporterError> {
    let source = BitbucketPlatform::new(
        config.source_credentials.clone(),
        config.bitbucket_api.clone(),
    );
    let destination = GithubPlatform::new(
        config.destination_credentials.clone(),
        config.github_api.clone(),
    );
    let importer = Importer::new(
        config.source_owner,
        config.source_credentials,
        config.destination_owner,
        Box::new(source),
        Box::new(destination),
    );
    importer.import_all_repositories().await
}
