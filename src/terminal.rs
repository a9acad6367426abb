//! Line-driven terminal front end for the certificate form.
//!
//! Each input line becomes a [`FormEvent`]. Field edits go straight to the
//! form setters; the preview is re-printed by a [`TerminalPreview`] observer.

use std::io::{self, BufRead, Write};

use crate::certificate::common::normalize_date_input;
use crate::certificate::validation::Field;
use crate::certificate::{CertificateForm, DocumentSink, FormObserver, FormSnapshot, Submission};

pub const HELP: &str = "\
Commands:
  name <text>        set the participant name
  date <YYYY-MM-DD>  set the issue date (\"today\" works too)
  download           generate and save the certificate
  preview            show the preview again
  help               show this help
  quit               leave";

/// An input event from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    NameChanged(String),
    /// Raw text typed into the date field, before calendar normalization
    DateChanged(String),
    DownloadRequested,
    PreviewRequested,
    HelpRequested,
    Quit,
    Unknown(String),
}

impl FormEvent {
    /// Parse one input line. The value of `name` is everything after the
    /// first space, kept verbatim.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let (command, value) = match line.trim_start().split_once(' ') {
            Some((command, value)) => (command, value),
            None => (line.trim(), ""),
        };

        let event = match command.to_ascii_lowercase().as_str() {
            "name" => Self::NameChanged(value.to_string()),
            "date" => Self::DateChanged(value.to_string()),
            "download" => Self::DownloadRequested,
            "preview" => Self::PreviewRequested,
            "help" | "?" => Self::HelpRequested,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(command.to_string()),
        };
        Some(event)
    }
}

/// Prints the preview and inline errors after every form change.
pub struct TerminalPreview<W: Write> {
    out: W,
}

impl<W: Write> TerminalPreview<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn draw(&mut self, snapshot: &FormSnapshot<'_>) -> io::Result<()> {
        writeln!(self.out)?;
        for field in [Field::ParticipantName, Field::IssueDate] {
            let value = match field {
                Field::ParticipantName => &snapshot.state.participant_name,
                Field::IssueDate => &snapshot.state.issue_date,
            };
            write!(self.out, "{} *: {:?}", field.label(), value)?;
            match snapshot.errors.message(field) {
                Some(message) => writeln!(self.out, "  <- {}", message)?,
                None => writeln!(self.out)?,
            }
        }
        writeln!(self.out)?;
        write!(self.out, "{}", snapshot.preview())?;
        self.out.flush()
    }
}

impl<W: Write> FormObserver for TerminalPreview<W> {
    fn on_change(&mut self, snapshot: &FormSnapshot<'_>) {
        if let Err(e) = self.draw(snapshot) {
            log::warn!("Failed to draw preview: {}", e);
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Apply one event to the form. Status messages go to `out`.
pub fn handle_event<W: Write>(
    form: &mut CertificateForm,
    sink: &mut dyn DocumentSink,
    event: FormEvent,
    out: &mut W,
) -> anyhow::Result<Flow> {
    match event {
        FormEvent::NameChanged(value) => form.set_participant_name(value),
        FormEvent::DateChanged(raw) => {
            let value = normalize_date_input(&raw);
            if value.is_empty() && !raw.trim().is_empty() {
                log::debug!("Date input {:?} is not a calendar date", raw);
            }
            form.set_issue_date(value);
        }
        FormEvent::DownloadRequested => match form.generate_document(sink) {
            Ok(Submission::Saved(saved)) => {
                let location = saved
                    .path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| saved.filename.clone());
                writeln!(out, "Downloaded {}", location)?;
            }
            Ok(Submission::Rejected) => {
                writeln!(out, "Please fix the highlighted fields.")?;
            }
            Err(e) => {
                log::error!("Certificate not saved: {}", e);
                writeln!(out, "Not saved: {}", e)?;
            }
        },
        FormEvent::PreviewRequested => write!(out, "{}", form.preview())?,
        FormEvent::HelpRequested => writeln!(out, "{}", HELP)?,
        FormEvent::Quit => return Ok(Flow::Stop),
        FormEvent::Unknown(command) => {
            writeln!(out, "Unknown command {:?}. Type \"help\".", command)?;
        }
    }
    Ok(Flow::Continue)
}

/// Read events from `input` until it ends or the user quits.
pub fn run_session<R: BufRead, W: Write>(
    form: &mut CertificateForm,
    sink: &mut dyn DocumentSink,
    input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(event) = FormEvent::parse(&line) else {
            continue;
        };
        if handle_event(form, sink, event, out)? == Flow::Stop {
            break;
        }
        out.flush()?;
    }
    Ok(())
}
