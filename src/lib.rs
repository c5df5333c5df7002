//! # bitbucket-to-github
//!
//! Import the repositories of a Bitbucket account into a GitHub organization.
//!
//! For each repository missing on GitHub, an empty repository is created with
//! the same description and visibility, then GitHub is asked to import the
//! history from the Bitbucket https clone URL.
//!
//! ## Usage
//!
//! ```txt
//! Usage: bitbucket-to-github BB-OWNER BB-LOGIN BB-PASSWORD GH-OWNER GH-LOGIN GH-PASSWORD
//!
//! Arguments:
//!   <BB-OWNER>     Bitbucket account owning the repositories
//!   <BB-LOGIN>     Bitbucket login
//!   <BB-PASSWORD>  Bitbucket password
//!   <GH-OWNER>     GitHub organization receiving the repositories
//!   <GH-LOGIN>     GitHub login
//!   <GH-PASSWORD>  GitHub password or token
//!
//! Options:
//!   -v, --verbose...  Verbose mode (-v, -vv, -vvv)
//!   -h, --help        Print help
//!   -V, --version     Print version
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![deny(
    missing_docs,
    clippy::all,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![warn(clippy::multiple_crate_versions)]

pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod http;
pub(crate) mod importer;
pub(crate) mod platform;
pub(crate) mod utils;

mod bitbucket;
mod github;

pub use cli::{exit_code, importer_main, parse_args, ImporterCli, Invocation};
pub use config::{Credentials, ImporterConfig};
pub use errors::{ImporterError, ImporterErrorKind};
pub use importer::{ImportOutcome, ImportSummary, Importer};
pub use platform::{DestinationPlatform, PlatformFuture, PlatformType, SourcePlatform};
pub use utils::{
    main_import, normalize_repo_name, CloneLink, DestinationRepository, ImportJob,
    RepositoryDescriptor,
};
