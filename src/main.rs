use bitbucket_to_github::{exit_code, importer_main};
use std::process::exit;

#[tokio::main]
async fn main() {
    let result = importer_main(std::env::args_os()).await;
    if let Err(e) = &result {
        eprintln!("{e}");
    }
    exit(exit_code(&result));
}
