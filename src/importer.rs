//! Import repositories from one platform to another
use crate::config::Credentials;
use crate::errors::{ImporterError, ImporterErrorKind};
use crate::platform::{DestinationPlatform, PlatformType, SourcePlatform};
use crate::utils::{DestinationRepository, ImportJob, RepositoryDescriptor};

/// Outcome of the import of one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The repository already exists on the destination
    Skipped,

    /// The destination accepted the import
    Imported(ImportJob),
}

/// Counters of a whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Repositories imported
    pub imported: usize,

    /// Repositories skipped
    pub skipped: usize,
}

/// Imports every repository of a source owner into a destination owner
pub struct Importer {
    /// Owner on the source platform
    source_owner: String,

    /// Credentials the destination uses to pull from the source
    source_credentials: Credentials,

    /// Owner on the destination platform
    destination_owner: String,

    /// Source platform
    source: Box<dyn SourcePlatform>,

    /// Destination platform
    destination: Box<dyn DestinationPlatform>,
}

impl Importer {
    /// Create a new Importer
    pub fn new(
        source_owner: String,
        source_credentials: Credentials,
        destination_owner: String,
        source: Box<dyn SourcePlatform>,
        destination: Box<dyn DestinationPlatform>,
    ) -> Self {
        Self {
            source_owner,
            source_credentials,
            destination_owner,
            source,
            destination,
        }
    }

    /// Import every repository of the source owner, in listing order
    /// # Errors
    /// Error on the first repository that can't be listed, created or imported
    pub async fn import_all_repositories(&self) -> Result<ImportSummary, ImporterError> {
        let repositories = self.source.list_repositories(&self.source_owner).await?;

        println!(
            "importing {} {} repositories owned by '{}' to {} '{}'...",
            repositories.len(),
            self.source.get_remote_url(),
            self.source_owner,
            self.destination.get_remote_url(),
            self.destination_owner
        );
        let mut summary = ImportSummary::default();
        for repo in &repositories {
            match self.import_repository(repo).await? {
                ImportOutcome::Skipped => summary.skipped += 1,
                ImportOutcome::Imported(_) => summary.imported += 1,
            }
        }
        println!(
            "{} repositories imported, {} skipped",
            summary.imported, summary.skipped
        );
        Ok(summary)
    }

    /// Import one repository unless it already exists on the destination
    /// # Errors
    /// Error if the repository has no https clone URL or a platform call fails
    pub async fn import_repository(
        &self,
        repo: &RepositoryDescriptor,
    ) -> Result<ImportOutcome, ImporterError> {
        let target = DestinationRepository::from_source(&self.destination_owner, &repo.name);

        if self.destination.repository_exists(&target).await? {
            println!("skip {} (already exists)", repo.name);
            return Ok(ImportOutcome::Skipped);
        }

        println!("import {}", repo.name);
        if let Some(created_on) = repo.created_on {
            log::debug!("{} created on {created_on}", repo.name);
        }
        if let Some(updated_on) = repo.updated_on {
            log::debug!("{} last updated on {updated_on}", repo.name);
        }

        let clone_url = repo.https_clone_url().ok_or_else(|| {
            ImporterError::new(ImporterErrorKind::NoHttpsCloneUrl)
                .with_platform(PlatformType::Bitbucket)
                .with_text(&format!(
                    "no https clone url for repo {} (clone links: {})",
                    repo.name,
                    repo.clone_protocols().join(", ")
                ))
        })?;

        println!("  - creating empty repository {target}");
        self.destination
            .create_repository(&target, &repo.description, repo.private)
            .await?;

        println!("  - importing repository from {clone_url}");
        let job = self
            .destination
            .start_import(&target, clone_url, &self.source_credentials)
            .await?;
        log::info!("{target}: import {}", job.status);
        Ok(ImportOutcome::Imported(job))
    }
}
