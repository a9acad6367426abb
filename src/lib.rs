use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

pub mod certificate;
pub mod cli;
pub mod config;
pub mod terminal;

pub use crate::certificate::{CertificateForm, FormState, Submission};
pub use crate::cli::Cli;
pub use crate::config::AppConfig;

use crate::certificate::common::normalize_date_input;
use crate::certificate::{DocumentSink, FileSink};
use crate::terminal::TerminalPreview;

/// Initialise `env_logger`, defaulting to `info` unless `RUST_LOG` is set.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

/// Load a serialized [`FormState`] from a JSON file.
pub fn load_request(path: &Path) -> anyhow::Result<FormState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read request {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid request {}", path.display()))
}

/// Fill the form from `state` through its setters and submit once.
pub fn submit_once(
    form: &mut CertificateForm,
    sink: &mut dyn DocumentSink,
    state: FormState,
) -> anyhow::Result<Submission> {
    form.set_participant_name(state.participant_name);
    form.set_issue_date(normalize_date_input(&state.issue_date));
    let submission = form
        .generate_document(sink)
        .context("failed to generate certificate")?;
    Ok(submission)
}

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    init_logging();

    let mut config = AppConfig::from_env().context("invalid configuration")?;
    if let Some(dir) = cli.output_dir.clone() {
        config.output_dir = dir;
    }
    if cli.no_overwrite {
        config.overwrite = false;
    }
    log::debug!("Using configuration {:?}", config);

    let mut sink = FileSink::new(&config.output_dir).overwrite(config.overwrite);
    let mut form = CertificateForm::new();

    if cli.is_one_shot() {
        let state = match &cli.request {
            Some(path) => load_request(path)?,
            None => FormState {
                participant_name: cli.name.clone().unwrap_or_default(),
                issue_date: cli.date.clone().unwrap_or_default(),
            },
        };

        return match submit_once(&mut form, &mut sink, state)? {
            Submission::Saved(saved) => {
                if let Some(path) = saved.path {
                    println!("{}", path.display());
                }
                Ok(ExitCode::SUCCESS)
            }
            Submission::Rejected => {
                eprintln!("{}", form.errors().to_report());
                Ok(ExitCode::FAILURE)
            }
        };
    }

    log::info!(
        "Saving certificates to {}",
        config.output_dir.display()
    );
    let stdout = io::stdout();
    println!("{}", terminal::HELP);
    form.subscribe(Box::new(TerminalPreview::new(stdout)));

    let stdin = io::stdin();
    let mut out = io::stdout();
    terminal::run_session(&mut form, &mut sink, stdin.lock(), &mut out)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}
