use clap::Parser;
use std::path::PathBuf;

/// Fill in the certificate form and download the PDF.
///
/// Without `--name`, `--date` or `--request` an interactive session starts.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Directory certificates are saved to (overrides CERTIFICATE_OUTPUT_DIR)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Participant name for a one-shot run
    #[arg(short, long)]
    pub name: Option<String>,

    /// Issue date (YYYY-MM-DD or "today") for a one-shot run
    #[arg(short, long)]
    pub date: Option<String>,

    /// JSON file with `participant_name` and `issue_date` for a one-shot run
    #[arg(short, long, conflicts_with_all = ["name", "date"])]
    pub request: Option<PathBuf>,

    /// Refuse to replace an existing certificate file
    #[arg(long)]
    pub no_overwrite: bool,
}

impl Cli {
    pub fn is_one_shot(&self) -> bool {
        self.name.is_some() || self.date.is_some() || self.request.is_some()
    }
}
