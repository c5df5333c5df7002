//! Error handling for the bitbucket-to-github crate.
use std::{error::Error as StdError, fmt};

use crate::platform::PlatformType;

/// Error type for the bitbucket-to-github crate.
#[derive(Debug)]
pub struct ImporterError {
    /// Inner error.
    inner: Box<Inner>,
}

impl ImporterError {
    /// Create a new error.
    pub(crate) fn new(kind: ImporterErrorKind) -> Self {
        Self {
            inner: Box::new(Inner {
                kind,
                message: None,
                source: None,
                platform: None,
            }),
        }
    }

    /// Create a new error of kind `Config` wrapping a source error
    pub(crate) fn new_with_source<E: Into<BoxError>>(text: &str, source: E) -> Self {
        let mut error = Self::new(ImporterErrorKind::Config);
        error.inner.message = Some(text.to_string());
        error.inner.source = Some(source.into());
        error
    }

    /// Attach a text message as the source.
    pub(crate) fn with_text(mut self, text: &str) -> Self {
        self.inner.source = Some(Box::new(std::io::Error::other(text)));
        self
    }

    /// Attach the platform the error comes from.
    pub(crate) fn with_platform(mut self, platform: PlatformType) -> Self {
        self.inner.platform = Some(platform);
        self
    }

    /// Kind of the error.
    pub fn kind(&self) -> &ImporterErrorKind {
        &self.inner.kind
    }

    /// Platform the error comes from, when known.
    pub fn platform(&self) -> Option<&PlatformType> {
        self.inner.platform.as_ref()
    }
}

/// Type alias for a boxed error.
pub(crate) type BoxError = Box<dyn StdError + Send + Sync>;

/// Inner error type for the bitbucket-to-github crate.
#[derive(Debug)]
struct Inner {
    /// Error kind.
    kind: ImporterErrorKind,

    /// Platform error
    platform: Option<PlatformType>,

    /// Context of the source error
    message: Option<String>,

    /// Source error.
    source: Option<BoxError>,
}

/// Kind of [`ImporterError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImporterErrorKind {
    /// Wrong command line usage.
    Usage,

    /// Invalid configuration.
    Config,

    /// Error related to the reqwest crate (transport).
    Reqwest,

    /// Error related to serde.
    Serde,

    /// A URL returned by or given to a platform can't be parsed.
    Url,

    /// A repository entry that violates the listing contract.
    InvalidRepository,

    /// Error related to the ListRepositories func.
    ListRepositories,

    /// Error related to the RepoExists func.
    RepoExists,

    /// Error related to the RepoCreation func.
    RepoCreation,

    /// Error related to the RepoImport func.
    RepoImport,

    /// The repository has no https clone link.
    NoHttpsCloneUrl,
}

impl fmt::Display for ImporterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // clap already renders a complete message
        if let (ImporterErrorKind::Usage, Some(source)) = (&self.inner.kind, &self.inner.source)
        {
            return write!(f, "{source}");
        }
        write!(f, "{:?}", self.inner.kind)?;
        if let Some(platform) = &self.inner.platform {
            write!(f, " ({platform})")?;
        }
        if let Some(message) = &self.inner.message {
            write!(f, ": {message}")?;
        }
        if let Some(source) = &self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for ImporterError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source.as_ref().map(|e| &**e as _)
    }
}

impl From<reqwest::Error> for ImporterError {
    fn from(e: reqwest::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: ImporterErrorKind::Reqwest,
                message: None,
                source: Some(Box::new(e)),
                platform: None,
            }),
        }
    }
}

impl From<serde_json::Error> for ImporterError {
    fn from(e: serde_json::Error) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: ImporterErrorKind::Serde,
                message: None,
                source: Some(Box::new(e)),
                platform: None,
            }),
        }
    }
}

impl From<url::ParseError> for ImporterError {
    fn from(e: url::ParseError) -> Self {
        Self {
            inner: Box::new(Inner {
                kind: ImporterErrorKind::Url,
                message: None,
                source: Some(Box::new(e)),
                platform: None,
            }),
        }
    }
}

impl From<clap::Error> for ImporterError {
    fn from(e: clap::Error) -> Self {
        Self::new(ImporterErrorKind::Usage).with_text(e.render().to_string().trim_end())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_contains_kind_platform_and_text() {
        let error = ImporterError::new(ImporterErrorKind::RepoCreation)
            .with_platform(PlatformType::Github)
            .with_text("422 Unprocessable Entity: name already exists");
        assert_eq!(
            error.to_string(),
            "RepoCreation (github): 422 Unprocessable Entity: name already exists"
        );
        assert_eq!(error.kind(), &ImporterErrorKind::RepoCreation);
        assert_eq!(error.platform(), Some(&PlatformType::Github));
        assert!(error.source().is_some());
    }

    #[test]
    fn display_without_details() {
        let error = ImporterError::new(ImporterErrorKind::NoHttpsCloneUrl);
        assert_eq!(error.to_string(), "NoHttpsCloneUrl");
        assert!(error.source().is_none());
    }

    #[test]
    fn wrapped_source_is_kept() {
        let parse = "12x".parse::<u8>().unwrap_err();
        let error = ImporterError::new_with_source("Unable to read the port", parse);
        assert_eq!(error.kind(), &ImporterErrorKind::Config);
        assert_eq!(
            error.to_string(),
            "Config: Unable to read the port: invalid digit found in string"
        );
        let source = error.source().unwrap();
        assert!(source.downcast_ref::<std::num::ParseIntError>().is_some());
    }

    #[test]
    fn serde_error_converts() {
        let parse = serde_json::from_str::<u8>("nope").unwrap_err();
        let error: ImporterError = parse.into();
        assert_eq!(error.kind(), &ImporterErrorKind::Serde);
    }
}
