//! Bitbucket Platform
use super::{repo::RepositoriesPage, BITBUCKET_URL};
use crate::{
    config::Credentials,
    errors::{ImporterError, ImporterErrorKind},
    http::{api_url, expect_success, read_json, AuthenticatedSession},
    platform::{PlatformFuture, PlatformType, SourcePlatform},
    utils::RepositoryDescriptor,
};
use reqwest::{header::ACCEPT, Method};
use url::Url;
use urlencoding::encode;

/// Bitbucket Platform
#[derive(Debug, Clone)]
pub struct BitbucketPlatform {
    /// Bitbucket credentials
    credentials: Credentials,

    /// Bitbucket API base URL
    api_url: Url,
}

impl BitbucketPlatform {
    /// Create a new BitbucketPlatform
    pub(crate) fn new(credentials: Credentials, api_url: Url) -> Self {
        Self {
            credentials,
            api_url,
        }
    }

    /// Pages of the repositories owned by `owner`
    pub(crate) fn repository_pages(
        &self,
        owner: &str,
    ) -> Result<RepositoryPages, ImporterError> {
        let session = AuthenticatedSession::new(&self.api_url, &self.credentials)?;
        let start_url = api_url(&self.api_url, &format!("/repositories/{}", encode(owner)));
        Ok(RepositoryPages::new(session, start_url))
    }
}

/// Lazy sequence of listing pages, following the `next` links.
///
/// Each call to [`RepositoryPages::next_page`] fetches one page. The sequence
/// ends once a page comes without a `next` link and can't be restarted.
pub(crate) struct RepositoryPages {
    /// Session used for every page
    session: AuthenticatedSession,

    /// URL of the page to fetch next
    next: Option<String>,

    /// Number of pages fetched
    page: usize,
}

impl RepositoryPages {
    /// Start the sequence at `start_url`
    fn new(session: AuthenticatedSession, start_url: String) -> Self {
        Self {
            session,
            next: Some(start_url),
            page: 0,
        }
    }

    /// Fetch the next page, `None` when the listing is exhausted
    pub(crate) async fn next_page(
        &mut self,
    ) -> Result<Option<Vec<RepositoryDescriptor>>, ImporterError> {
        let Some(url) = self.next.take() else {
            return Ok(None);
        };
        let response = self
            .session
            .request(Method::GET, &url)?
            .header(ACCEPT, "application/json")
            .send()
            .await?;
        let response = expect_success(
            response,
            ImporterErrorKind::ListRepositories,
            PlatformType::Bitbucket,
        )
        .await?;
        let page: RepositoriesPage = read_json(response, PlatformType::Bitbucket).await?;
        self.page += 1;
        self.next = page.next.filter(|next| !next.trim().is_empty());
        let repos = page
            .values
            .into_iter()
            .map(RepositoryDescriptor::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Requested bitbucket (page {}): {}", self.page, repos.len());
        Ok(Some(repos))
    }
}

impl SourcePlatform for BitbucketPlatform {
    fn get_remote_url(&self) -> &str {
        BITBUCKET_URL
    }

    fn list_repositories<'a>(
        &'a self,
        owner: &'a str,
    ) -> PlatformFuture<'a, Vec<RepositoryDescriptor>> {
        Box::pin(async move {
            let mut pages = self.repository_pages(owner)?;
            let mut all_repos = vec![];
            while let Some(repos) = pages.next_page().await? {
                all_repos.extend(repos);
            }
            Ok(all_repos)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    /// base64 of "bb-user:bb-pass"
    const AUTH: &str = "Basic YmItdXNlcjpiYi1wYXNz";

    fn repo_json(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "is_private": false,
            "description": "",
            "unknown_field": {"nested": true},
            "links": {
                "clone": [{"href": format!("https://bitbucket.org/acme/{name}.git"), "name": "https"}]
            }
        })
    }

    fn platform(server: &Server) -> BitbucketPlatform {
        let api_url = Url::parse(&format!("{}/2.0", server.url())).unwrap();
        BitbucketPlatform::new(Credentials::new("bb-user", "bb-pass"), api_url)
    }

    #[tokio::test]
    async fn list_follows_next_links() {
        let mut server = Server::new_async().await;
        let next = format!("{}/2.0/repositories/acme?page=2", server.url());
        let first = server
            .mock("GET", "/2.0/repositories/acme")
            .match_header("authorization", AUTH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "values": [repo_json("a"), repo_json("b")],
                    "next": next
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/2.0/repositories/acme?page=2")
            .match_header("authorization", AUTH)
            .with_status(200)
            .with_body(json!({"values": [repo_json("c")]}).to_string())
            .expect(1)
            .create_async()
            .await;

        let repos = platform(&server).list_repositories("acme").await.unwrap();
        let names: Vec<_> = repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert_eq!(
            repos[2].https_clone_url(),
            Some("https://bitbucket.org/acme/c.git")
        );
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn pages_are_fetched_on_demand() {
        let mut server = Server::new_async().await;
        let next = format!("{}/2.0/repositories/acme?page=2", server.url());
        let first = server
            .mock("GET", "/2.0/repositories/acme")
            .with_status(200)
            .with_body(
                json!({
                    "values": [repo_json("a")],
                    "next": next
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let second = server
            .mock("GET", "/2.0/repositories/acme?page=2")
            .with_status(200)
            .with_body(json!({"values": [repo_json("b")], "next": null}).to_string())
            .expect(0)
            .create_async()
            .await;

        let mut pages = platform(&server).repository_pages("acme").unwrap();
        let page = pages.next_page().await.unwrap().unwrap();
        assert_eq!(page.len(), 1);
        first.assert_async().await;
        second.assert_async().await;
    }

    #[tokio::test]
    async fn exhausted_pages_stay_exhausted() {
        let mut server = Server::new_async().await;
        let only = server
            .mock("GET", "/2.0/repositories/acme")
            .with_status(200)
            .with_body(json!({"values": [repo_json("a")], "next": ""}).to_string())
            .expect(1)
            .create_async()
            .await;

        let mut pages = platform(&server).repository_pages("acme").unwrap();
        assert!(pages.next_page().await.unwrap().is_some());
        assert!(pages.next_page().await.unwrap().is_none());
        assert!(pages.next_page().await.unwrap().is_none());
        only.assert_async().await;
    }

    #[tokio::test]
    async fn failing_page_fails_the_listing() {
        let mut server = Server::new_async().await;
        let next = format!("{}/2.0/repositories/acme?page=2", server.url());
        server
            .mock("GET", "/2.0/repositories/acme")
            .with_status(200)
            .with_body(
                json!({
                    "values": [repo_json("a")],
                    "next": next
                })
                .to_string(),
            )
            .create_async()
            .await;
        server
            .mock("GET", "/2.0/repositories/acme?page=2")
            .with_status(503)
            .with_body("maintenance")
            .create_async()
            .await;

        let error = platform(&server)
            .list_repositories("acme")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), &ImporterErrorKind::ListRepositories);
        assert_eq!(error.platform(), Some(&PlatformType::Bitbucket));
        assert!(error.to_string().contains("503"));
        assert!(error.to_string().contains("maintenance"));
    }

    #[tokio::test]
    async fn malformed_page_fails_the_listing() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/2.0/repositories/acme")
            .with_status(200)
            .with_body(json!({"values": [{"name": "no-privacy-flag"}]}).to_string())
            .create_async()
            .await;

        let error = platform(&server)
            .list_repositories("acme")
            .await
            .unwrap_err();
        assert_eq!(error.kind(), &ImporterErrorKind::Serde);
    }

    #[tokio::test]
    async fn owner_is_url_encoded() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/2.0/repositories/acme%20corp")
            .with_status(200)
            .with_body(json!({"values": []}).to_string())
            .expect(1)
            .create_async()
            .await;

        let repos = platform(&server)
            .list_repositories("acme corp")
            .await
            .unwrap();
        assert!(repos.is_empty());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn next_page_on_other_host_gets_no_credentials() {
        let mut server = Server::new_async().await;
        let mut elsewhere = Server::new_async().await;
        let next = format!("{}/2.0/repositories/acme?page=2", elsewhere.url());
        server
            .mock("GET", "/2.0/repositories/acme")
            .match_header("authorization", AUTH)
            .with_status(200)
            .with_body(
                json!({
                    "values": [repo_json("a")],
                    "next": next
                })
                .to_string(),
            )
            .create_async()
            .await;
        let foreign = elsewhere
            .mock("GET", "/2.0/repositories/acme?page=2")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(json!({"values": [repo_json("b")]}).to_string())
            .expect(1)
            .create_async()
            .await;

        let repos = platform(&server).list_repositories("acme").await.unwrap();
        assert_eq!(repos.len(), 2);
        foreign.assert_async().await;
    }
}
