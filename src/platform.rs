//! Platform traits used by the importer
use std::{future::Future, pin::Pin};

use crate::{
    config::Credentials,
    errors::ImporterError,
    utils::{DestinationRepository, ImportJob, RepositoryDescriptor},
};

/// Boxed future returned by the platform traits
pub type PlatformFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ImporterError>> + Send + 'a>>;

/// Platform the repositories are read from
pub trait SourcePlatform: Sync + Send {
    /// List every repository owned by `owner`, following pagination
    fn list_repositories<'a>(
        &'a self,
        owner: &'a str,
    ) -> PlatformFuture<'a, Vec<RepositoryDescriptor>>;

    /// Host of the platform
    fn get_remote_url(&self) -> &str;
}

/// Platform the repositories are imported into
pub trait DestinationPlatform: Sync + Send {
    /// Check if the repository exists
    fn repository_exists<'a>(&'a self, target: &'a DestinationRepository)
        -> PlatformFuture<'a, bool>;

    /// Create an empty repository
    fn create_repository<'a>(
        &'a self,
        target: &'a DestinationRepository,
        description: &'a str,
        private: bool,
    ) -> PlatformFuture<'a, ()>;

    /// Ask the platform to pull the history of `clone_url` into `target`
    fn start_import<'a>(
        &'a self,
        target: &'a DestinationRepository,
        clone_url: &'a str,
        source_credentials: &'a Credentials,
    ) -> PlatformFuture<'a, ImportJob>;

    /// Host of the platform
    fn get_remote_url(&self) -> &str;
}

/// Supported platforms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformType {
    /// Bitbucket
    Bitbucket,
    /// GitHub
    Github,
}

impl std::fmt::Display for PlatformType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformType::Bitbucket => write!(f, "bitbucket"),
            PlatformType::Github => write!(f, "github"),
        }
    }
}
