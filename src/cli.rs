//! Command line options for the bitbucket-to-github tool
use crate::{config::ImporterConfig, errors::ImporterError, utils::main_import};
use clap::{error::ErrorKind, Parser};
use url::Url;

/// bitbucket-to-github - Import Bitbucket repositories into a GitHub organization
#[derive(Parser, Clone, Debug)]
#[command(
    version,
    override_usage = "bitbucket-to-github BB-OWNER BB-LOGIN BB-PASSWORD GH-OWNER GH-LOGIN GH-PASSWORD"
)]
pub struct ImporterCli {
    /// Bitbucket account owning the repositories
    #[arg(value_name = "BB-OWNER", allow_hyphen_values = true)]
    pub bitbucket_owner: String,

    /// Bitbucket login
    #[arg(value_name = "BB-LOGIN", allow_hyphen_values = true)]
    pub bitbucket_login: String,

    /// Bitbucket password
    #[arg(value_name = "BB-PASSWORD", allow_hyphen_values = true)]
    pub bitbucket_password: String,

    /// GitHub organization receiving the repositories
    #[arg(value_name = "GH-OWNER", allow_hyphen_values = true)]
    pub github_owner: String,

    /// GitHub login
    #[arg(value_name = "GH-LOGIN", allow_hyphen_values = true)]
    pub github_login: String,

    /// GitHub password or token
    #[arg(value_name = "GH-PASSWORD", allow_hyphen_values = true)]
    pub github_password: String,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Bitbucket API base URL
    #[arg(long, hide = true)]
    pub bitbucket_api: Option<Url>,

    /// GitHub API base URL
    #[arg(long, hide = true)]
    pub github_api: Option<Url>,
}

/// What the command line asks for
#[derive(Clone, Debug)]
pub enum Invocation {
    /// Run the import
    Run(Box<ImporterCli>),

    /// Print the help or version text and stop
    Info(String),
}

/// Parse the command line arguments.
///
/// Values starting with `-` fill the pending positional slot unless they are
/// exactly a known flag such as `-v`; put `--` before the positionals to pass
/// such a value.
/// # Errors
/// Error of kind `Usage` if the arguments don't match the usage
pub fn parse_args<I, T>(args: I) -> Result<Invocation, ImporterError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match ImporterCli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(Box::new(cli))),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(Invocation::Info(e.render().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Process exit code for the result of [`importer_main`]
pub fn exit_code(result: &Result<(), ImporterError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Run the bitbucket-to-github tool with the provided command line options
/// # Errors
/// Error if the arguments are wrong or the import fails
pub async fn importer_main<I, T>(args: I) -> Result<(), ImporterError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli_args = match parse_args(args)? {
        Invocation::Run(cli_args) => *cli_args,
        Invocation::Info(text) => {
            print!("{text}");
            return Ok(());
        }
    };
    let config = ImporterConfig::try_from(cli_args)?;
    let _ = env_logger::builder()
        .filter_level(config.log_level())
        .format_target(false)
        .format_timestamp(None)
        .try_init();
    main_import(config).await?;
    Ok(())
}
