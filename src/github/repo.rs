//! Github request and response bodies
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::ImportJob;

/// Body of the repository creation request
#[derive(Serialize, Debug, Clone)]
pub(crate) struct GithubCreateRequest<'a> {
    /// Repository name
    pub name: &'a str,

    /// Repository description
    pub description: &'a str,

    /// Repository private status
    pub private: bool,
}

/// Body of the import request
#[derive(Serialize, Clone)]
pub(crate) struct GithubImportRequest<'a> {
    /// URL GitHub clones from
    pub vcs_url: &'a str,

    /// Login on the source platform
    pub vcs_username: &'a str,

    /// Password on the source platform
    pub vcs_password: &'a str,
}

impl fmt::Debug for GithubImportRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubImportRequest")
            .field("vcs_url", &self.vcs_url)
            .field("vcs_username", &self.vcs_username)
            .field("vcs_password", &"***")
            .finish()
    }
}

/// Import accepted by GitHub
#[derive(Deserialize, Debug, Clone)]
pub(crate) struct GithubImportResponse {
    /// Import status
    pub status: String,

    /// Import status description
    #[serde(default)]
    pub status_text: Option<String>,

    /// Import URL
    #[serde(default)]
    pub url: Option<String>,
}

impl From<GithubImportResponse> for ImportJob {
    fn from(response: GithubImportResponse) -> Self {
        ImportJob {
            status: response.status,
            status_text: response.status_text,
            url: response.url,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn import_request_body() {
        let request = GithubImportRequest {
            vcs_url: "https://bitbucket.org/acme/repo-one.git",
            vcs_username: "bb-user",
            vcs_password: "bb-pass",
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "vcs_url": "https://bitbucket.org/acme/repo-one.git",
                "vcs_username": "bb-user",
                "vcs_password": "bb-pass"
            })
        );
        assert!(!format!("{request:?}").contains("bb-pass"));
    }

    #[test]
    fn import_response_ignores_unknown_fields() {
        let response: GithubImportResponse = serde_json::from_value(json!({
            "vcs": "git",
            "use_lfs": "undecided",
            "vcs_url": "https://bitbucket.org/acme/repo-one.git",
            "status": "importing",
            "status_text": "Importing...",
            "url": "https://api.github.com/repos/acme-gh/repo-one/import"
        }))
        .unwrap();
        let job: ImportJob = response.into();
        assert_eq!(job.status, "importing");
        assert_eq!(job.status_text.as_deref(), Some("Importing..."));
    }

    #[test]
    fn import_response_requires_status() {
        assert!(serde_json::from_value::<GithubImportResponse>(json!({"url": "x"})).is_err());
    }
}
