//! Bitbucket Repo struct and conversion to RepositoryDescriptor
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::{
    errors::{ImporterError, ImporterErrorKind},
    platform::PlatformType,
    utils::{CloneLink, RepositoryDescriptor},
};

/// One page of the repository listing
#[derive(Deserialize, Debug)]
pub(crate) struct RepositoriesPage {
    /// Repositories of the page
    pub values: Vec<BitbucketRepo>,

    /// URL of the next page
    #[serde(default)]
    pub next: Option<String>,
}

/// Bitbucket link
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Link {
    /// Target of the link
    pub href: String,

    /// Name of the link, the protocol for clone links
    #[serde(default)]
    pub name: Option<String>,
}

/// Bitbucket Repo
#[derive(Deserialize, Debug)]
pub(crate) struct BitbucketRepo {
    /// Repository name
    pub name: String,

    /// Repository description
    #[serde(default)]
    pub description: Option<String>,

    /// Repository private status
    pub is_private: bool,

    /// Link groups (self, html, clone, ...)
    #[serde(default, deserialize_with = "one_or_many_links")]
    pub links: HashMap<String, Vec<Link>>,

    /// Creation date
    #[serde(default, deserialize_with = "blank_as_none")]
    pub created_on: Option<DateTime<Utc>>,

    /// Last update date
    #[serde(default, deserialize_with = "blank_as_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

impl TryFrom<BitbucketRepo> for RepositoryDescriptor {
    type Error = ImporterError;

    fn try_from(mut repo: BitbucketRepo) -> Result<Self, Self::Error> {
        if repo.name.is_empty() {
            return Err(ImporterError::new(ImporterErrorKind::InvalidRepository)
                .with_platform(PlatformType::Bitbucket)
                .with_text("repository without a name"));
        }
        let clone_links = repo
            .links
            .remove("clone")
            .unwrap_or_default()
            .into_iter()
            .map(|link| CloneLink {
                name: link.name,
                href: link.href,
            })
            .collect();
        Ok(RepositoryDescriptor {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            private: repo.is_private,
            clone_links,
            created_on: repo.created_on,
            updated_on: repo.updated_on,
        })
    }
}

/// Link groups hold either one link or a list of links
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    /// Single link
    One(Link),
    /// List of links
    Many(Vec<Link>),
}

/// Deserialize link groups, wrapping single links in a list
fn one_or_many_links<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<Link>>, D::Error>
where
    D: Deserializer<'de>,
{
    let groups = HashMap::<String, OneOrMany>::deserialize(deserializer)?;
    Ok(groups
        .into_iter()
        .map(|(key, group)| match group {
            OneOrMany::One(link) => (key, vec![link]),
            OneOrMany::Many(links) => (key, links),
        })
        .collect())
}

/// Deserialize an RFC 3339 date, blank strings and null being `None`
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => DateTime::parse_from_rfc3339(date)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}
