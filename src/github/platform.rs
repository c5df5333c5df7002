//! Github Platform
use super::{
    repo::{GithubCreateRequest, GithubImportRequest, GithubImportResponse},
    GITHUB_API_HEADER, GITHUB_API_VERSION, GITHUB_IMPORT_ACCEPT, GITHUB_URL, GITHUB_V3_ACCEPT,
};
use crate::{
    config::Credentials,
    errors::{ImporterError, ImporterErrorKind},
    http::{api_url, expect_status, read_json, unexpected_status, AuthenticatedSession},
    platform::{DestinationPlatform, PlatformFuture, PlatformType},
    utils::{DestinationRepository, ImportJob},
};
use reqwest::{header::ACCEPT, Method, RequestBuilder, StatusCode};
use url::Url;
use urlencoding::encode;

/// Github Platform
#[derive(Debug, Clone)]
pub struct GithubPlatform {
    /// Github credentials
    credentials: Credentials,

    /// Github API base URL
    api_url: Url,
}

impl GithubPlatform {
    /// Create a new GithubPlatform
    pub(crate) fn new(credentials: Credentials, api_url: Url) -> Self {
        Self {
            credentials,
            api_url,
        }
    }

    /// Open a session and start a request on `path`
    fn request(
        &self,
        method: Method,
        path: &str,
        accept: &'static str,
    ) -> Result<RequestBuilder, ImporterError> {
        let session = AuthenticatedSession::new(&self.api_url, &self.credentials)?;
        Ok(session
            .request(method, &api_url(&self.api_url, path))?
            .header(ACCEPT, accept)
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION))
    }
}

/// Path of a repository in the API
fn repo_path(target: &DestinationRepository) -> String {
    format!("/repos/{}/{}", encode(&target.owner), encode(&target.name))
}

impl DestinationPlatform for GithubPlatform {
    fn get_remote_url(&self) -> &str {
        GITHUB_URL
    }

    fn repository_exists<'a>(
        &'a self,
        target: &'a DestinationRepository,
    ) -> PlatformFuture<'a, bool> {
        Box::pin(async move {
            let response = self
                .request(Method::HEAD, &repo_path(target), GITHUB_V3_ACCEPT)?
                .send()
                .await?;
            match response.status() {
                StatusCode::OK => Ok(true),
                StatusCode::NOT_FOUND => Ok(false),
                _ => Err(unexpected_status(
                    response,
                    ImporterErrorKind::RepoExists,
                    PlatformType::Github,
                )
                .await),
            }
        })
    }

    fn create_repository<'a>(
        &'a self,
        target: &'a DestinationRepository,
        description: &'a str,
        private: bool,
    ) -> PlatformFuture<'a, ()> {
        Box::pin(async move {
            let body = GithubCreateRequest {
                name: &target.name,
                description,
                private,
            };
            let path = format!("/orgs/{}/repos", encode(&target.owner));
            let response = self
                .request(Method::POST, &path, GITHUB_V3_ACCEPT)?
                .json(&body)
                .send()
                .await?;
            expect_status(
                response,
                StatusCode::CREATED,
                ImporterErrorKind::RepoCreation,
                PlatformType::Github,
            )
            .await?;
            Ok(())
        })
    }

    fn start_import<'a>(
        &'a self,
        target: &'a DestinationRepository,
        clone_url: &'a str,
        source_credentials: &'a Credentials,
    ) -> PlatformFuture<'a, ImportJob> {
        Box::pin(async move {
            let body = GithubImportRequest {
                vcs_url: clone_url,
                vcs_username: source_credentials.login(),
                vcs_password: source_credentials.secret(),
            };
            let path = format!("{}/import", repo_path(target));
            let response = self
                .request(Method::PUT, &path, GITHUB_IMPORT_ACCEPT)?
                .json(&body)
                .send()
                .await?;
            let response = expect_status(
                response,
                StatusCode::CREATED,
                ImporterErrorKind::RepoImport,
                PlatformType::Github,
            )
            .await?;
            let job: GithubImportResponse = read_json(response, PlatformType::Github).await?;
            Ok(job.into())
        })
    }
}
