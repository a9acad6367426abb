use std::fs;

use certificate_form::certificate::{
    CertificateForm, DocumentSink, FileSink, GeneratorError, Submission,
};
use tempfile::tempdir;

#[test]
fn test_safe_name_written_verbatim() {
    let dir = tempdir().unwrap();
    let mut form = CertificateForm::new();
    let mut sink = FileSink::new(dir.path());

    form.set_participant_name("Jane Doe");
    form.set_issue_date("2024-05-01");
    let saved = match form.generate_document(&mut sink).unwrap() {
        Submission::Saved(saved) => saved,
        Submission::Rejected => panic!("valid form was rejected"),
    };

    let expected = dir.path().join("Certificate_Jane Doe_2024-05-01.pdf");
    assert_eq!(saved.path.as_deref(), Some(expected.as_path()));
    let bytes = fs::read(&expected).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert_eq!(bytes.len(), saved.size);
}

#[test]
fn test_path_separators_stay_inside_output_dir() {
    let dir = tempdir().unwrap();
    let mut form = CertificateForm::new();
    let mut sink = FileSink::new(dir.path());

    form.set_participant_name("../escape/me");
    form.set_issue_date("2024-05-01");
    let saved = match form.generate_document(&mut sink).unwrap() {
        Submission::Saved(saved) => saved,
        Submission::Rejected => panic!("valid form was rejected"),
    };

    assert_eq!(saved.filename, "Certificate_../escape/me_2024-05-01.pdf");
    let path = saved.path.unwrap();
    assert_eq!(path.parent(), Some(dir.path()));
    assert!(path.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_creates_missing_output_dir() {
    let dir = tempdir().unwrap();
    let nested = dir.path().join("issued").join("2024");
    let mut sink = FileSink::new(&nested);

    let saved = sink.save("a.pdf", b"%PDF-1.5").unwrap();
    assert_eq!(saved.path, Some(nested.join("a.pdf")));
    assert!(nested.join("a.pdf").exists());
}

#[test]
fn test_no_overwrite_refuses_existing_file() {
    let dir = tempdir().unwrap();
    let mut sink = FileSink::new(dir.path()).overwrite(false);

    sink.save("a.pdf", b"first").unwrap();
    let err = sink.save("a.pdf", b"second").unwrap_err();
    assert!(matches!(err, GeneratorError::AlreadyExists(_)));
    assert_eq!(fs::read(dir.path().join("a.pdf")).unwrap(), b"first");
}

#[test]
fn test_overwrite_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());

    sink.save("a.pdf", b"first, longer").unwrap();
    sink.save("a.pdf", b"second").unwrap();
    assert_eq!(fs::read(dir.path().join("a.pdf")).unwrap(), b"second");
}

#[test]
fn test_unusable_filename_is_an_error() {
    let dir = tempdir().unwrap();
    let mut sink = FileSink::new(dir.path());
    let err = sink.save("//", b"x").unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyFilename(_)));
}

#[test]
fn test_long_name_keeps_date_and_extension_on_disk() {
    let dir = tempdir().unwrap();
    let mut form = CertificateForm::new();
    let mut sink = FileSink::new(dir.path());

    let name = "A".repeat(300);
    form.set_participant_name(name.as_str());
    form.set_issue_date("2024-05-01");
    let saved = match form.generate_document(&mut sink).unwrap() {
        Submission::Saved(saved) => saved,
        Submission::Rejected => panic!("valid form was rejected"),
    };

    assert_eq!(saved.filename, format!("Certificate_{}_2024-05-01.pdf", name));
    let path = saved.path.unwrap();
    let on_disk = path.file_name().unwrap().to_str().unwrap();
    assert!(on_disk.starts_with("Certificate_AAA"));
    assert!(on_disk.ends_with("_2024-05-01.pdf"));
    assert!(on_disk.len() <= 255);
    assert!(path.exists());
}
