//! GitHub API module.
pub(crate) mod platform;
pub(crate) mod repo;

/// GitHub URL
const GITHUB_URL: &str = "github.com";

/// GitHub API URL
pub(crate) const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub API Header
const GITHUB_API_HEADER: &str = "X-GitHub-Api-Version";

/// GitHub API Version
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Media type of the v3 REST API
const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// Media type of the source imports preview
const GITHUB_IMPORT_ACCEPT: &str = "application/vnd.github.barred-rock-preview";
