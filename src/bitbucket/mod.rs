//! Bitbucket API module.
pub(crate) mod platform;
pub(crate) mod repo;

/// Bitbucket URL
const BITBUCKET_URL: &str = "bitbucket.org";

/// Bitbucket API URL
pub(crate) const BITBUCKET_API_URL: &str = "https://api.bitbucket.org/2.0";
