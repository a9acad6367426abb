use clap::Parser;
use std::process::ExitCode;

use certificate_form::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match certificate_form::run(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
