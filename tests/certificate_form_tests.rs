use certificate_form::certificate::layout::CertificateDocument;
use certificate_form::certificate::preview::{DATE_PLACEHOLDER, NAME_PLACEHOLDER};
use certificate_form::certificate::validation::{MISSING_DATE_MESSAGE, MISSING_NAME_MESSAGE};
use certificate_form::certificate::{CertificateForm, Field, MemorySink, Submission};

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn submit(name: &str, date: &str) -> (CertificateForm, MemorySink, Submission) {
    let mut form = CertificateForm::new();
    let mut sink = MemorySink::new();
    form.set_participant_name(name);
    form.set_issue_date(date);
    let outcome = form.generate_document(&mut sink).unwrap();
    (form, sink, outcome)
}

#[test]
fn test_both_fields_missing() {
    let (form, sink, outcome) = submit("", "");
    assert_eq!(outcome, Submission::Rejected);
    assert_eq!(form.errors().message(Field::ParticipantName), Some(MISSING_NAME_MESSAGE));
    assert_eq!(form.errors().message(Field::IssueDate), Some(MISSING_DATE_MESSAGE));
    assert!(sink.documents().is_empty());
}

#[test]
fn test_only_date_missing() {
    let (form, sink, outcome) = submit("Jane Doe", "");
    assert_eq!(outcome, Submission::Rejected);
    assert!(!form.errors().contains(Field::ParticipantName));
    assert!(form.errors().contains(Field::IssueDate));
    assert_eq!(form.errors().len(), 1);
    assert!(sink.documents().is_empty());
}

#[test]
fn test_whitespace_name_counts_as_missing() {
    let (form, sink, outcome) = submit("  ", "2024-05-01");
    assert_eq!(outcome, Submission::Rejected);
    assert!(form.errors().contains(Field::ParticipantName));
    assert!(!form.errors().contains(Field::IssueDate));
    assert!(sink.documents().is_empty());
}

#[test]
fn test_valid_form_saves_certificate() {
    let (form, sink, outcome) = submit("Jane Doe", "2024-05-01");

    match outcome {
        Submission::Saved(saved) => {
            assert_eq!(saved.filename, "Certificate_Jane Doe_2024-05-01.pdf");
        }
        Submission::Rejected => panic!("valid form was rejected"),
    }
    assert!(form.errors().is_empty());

    let (filename, pdf) = sink.last().unwrap();
    assert_eq!(filename, "Certificate_Jane Doe_2024-05-01.pdf");
    assert!(pdf.starts_with(b"%PDF"));
    assert!(contains(pdf, b"Jane Doe"));
    assert!(contains(pdf, b"Issue Date: 2024-05-01"));

    let document = CertificateDocument::compose(form.state());
    assert!(document.contains_text("Jane Doe"));
    assert!(document.contains_text("Issue Date: 2024-05-01"));
}

#[test]
fn test_validate_outcome_over_inputs() {
    let names = ["", " ", "\t\n", "Jane Doe", " x ", "홍길동"];
    let dates = ["", "2024-05-01"];

    for name in names {
        for date in dates {
            let mut form = CertificateForm::new();
            form.set_participant_name(name);
            form.set_issue_date(date);

            let name_missing = name.trim().is_empty();
            let date_missing = date.is_empty();

            assert_eq!(form.validate(), !name_missing && !date_missing, "{name:?} {date:?}");
            assert_eq!(form.errors().contains(Field::ParticipantName), name_missing);
            assert_eq!(form.errors().contains(Field::IssueDate), date_missing);
        }
    }
}

#[test]
fn test_editing_clears_only_that_field() {
    let mut form = CertificateForm::new();
    form.validate();

    form.set_issue_date("");
    assert!(!form.errors().contains(Field::IssueDate));
    assert!(form.errors().contains(Field::ParticipantName));

    form.set_participant_name("Jane");
    assert!(form.errors().is_empty());
}

#[test]
fn test_fixing_fields_then_resubmitting() {
    let mut form = CertificateForm::new();
    let mut sink = MemorySink::new();

    assert_eq!(form.generate_document(&mut sink).unwrap(), Submission::Rejected);
    form.set_participant_name("Jane Doe");
    form.set_issue_date("2024-05-01");
    assert!(matches!(
        form.generate_document(&mut sink).unwrap(),
        Submission::Saved(_)
    ));
    assert_eq!(sink.documents().len(), 1);
}

#[test]
fn test_preview_mirrors_state() {
    let mut form = CertificateForm::new();
    assert_eq!(form.preview().participant_name, NAME_PLACEHOLDER);
    assert_eq!(form.preview().issue_date, DATE_PLACEHOLDER);

    form.set_participant_name(" Jane ");
    form.set_issue_date("2024-05-01");
    assert_eq!(form.preview().participant_name, " Jane ");
    assert_eq!(form.preview().issue_date_line(), "Issue Date: 2024-05-01");

    form.set_participant_name("");
    assert_eq!(form.preview().participant_name, NAME_PLACEHOLDER);
}
