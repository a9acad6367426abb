//! Common helpers for certificate generation.
//!
//! Filename building, date input handling and the on-disk filename policy.

use chrono::{Local, NaiveDate};

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Logical download name. The participant name and date are interpolated
/// verbatim; see [`disk_filename`] for what actually reaches the filesystem.
pub fn certificate_filename(participant_name: &str, issue_date: &str) -> String {
    format!("Certificate_{participant_name}_{issue_date}.pdf")
}

/// Text of the issue date line, shared by the document and the preview.
pub fn issue_date_line(issue_date: &str) -> String {
    format!("Issue Date: {issue_date}")
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format(ISO_DATE_FORMAT).to_string()
}

/// Value a calendar date control reports for raw text.
///
/// A valid `YYYY-MM-DD` date is returned in canonical form; anything else
/// yields an empty value, the way a browser date input does.
pub fn normalize_date_input(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("today") {
        return today_iso();
    }

    NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
        .map(|date| date.format(ISO_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Longest filename most filesystems accept, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Name used on disk for a logical filename.
///
/// Path separators, reserved characters and control characters are removed,
/// and over-long names are shortened by [`fit_filename`]. Returns `None` when
/// nothing usable remains.
pub fn disk_filename(filename: &str) -> Option<String> {
    let options = sanitize_filename::Options {
        truncate: false,
        ..Default::default()
    };
    let sanitized = sanitize_filename::sanitize_with_options(filename, options);
    if sanitized.trim().is_empty() {
        None
    } else {
        Some(fit_filename(&sanitized, MAX_FILENAME_BYTES))
    }
}

/// Shorten `name` to at most `max` bytes by cutting before its last `_`
/// segment, so `_<date>.pdf` survives and only the participant name shrinks.
fn fit_filename(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    let tail_start = name.rfind('_').or_else(|| name.rfind('.')).unwrap_or(name.len());
    let tail = &name[tail_start..];
    if tail.len() >= max {
        return truncate_on_char_boundary(name, max).to_string();
    }

    let head = truncate_on_char_boundary(&name[..tail_start], max - tail.len());
    format!("{head}{tail}")
}

fn truncate_on_char_boundary(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_is_verbatim() {
        assert_eq!(
            certificate_filename("Jane Doe", "2024-05-01"),
            "Certificate_Jane Doe_2024-05-01.pdf"
        );
        assert_eq!(
            certificate_filename("a/b", "2024-05-01"),
            "Certificate_a/b_2024-05-01.pdf"
        );
    }

    #[test]
    fn test_disk_filename_keeps_safe_names() {
        let name = certificate_filename("Jane Doe", "2024-05-01");
        assert_eq!(disk_filename(&name).as_deref(), Some(name.as_str()));
    }

    #[test]
    fn test_disk_filename_strips_separators() {
        let name = certificate_filename("../../etc/passwd", "2024-05-01");
        let disk = disk_filename(&name).unwrap();
        assert!(!disk.contains('/'));
        assert!(disk.starts_with("Certificate_"));
        assert!(disk.ends_with(".pdf"));
    }

    #[test]
    fn test_long_name_keeps_date_and_extension() {
        let name = certificate_filename(&"A".repeat(300), "2024-05-01");
        let disk = disk_filename(&name).unwrap();
        assert_eq!(disk.len(), MAX_FILENAME_BYTES);
        assert!(disk.starts_with("Certificate_AAAA"));
        assert!(disk.ends_with("_2024-05-01.pdf"));
    }

    #[test]
    fn test_fit_filename_respects_char_boundaries() {
        let name = format!("Certificate_{}_2024-05-01.pdf", "é".repeat(200));
        let fitted = fit_filename(&name, MAX_FILENAME_BYTES);
        assert!(fitted.len() <= MAX_FILENAME_BYTES);
        assert!(fitted.ends_with("_2024-05-01.pdf"));
    }

    #[test]
    fn test_fit_filename_without_room_for_tail() {
        let name = format!("a_{}", "b".repeat(300));
        assert_eq!(fit_filename(&name, 10), "a_bbbbbbbb");
    }

    #[test]
    fn test_disk_filename_rejects_nothing_left() {
        assert_eq!(disk_filename("///"), None);
    }

    #[test]
    fn test_normalize_date_input() {
        assert_eq!(normalize_date_input("2024-05-01"), "2024-05-01");
        assert_eq!(normalize_date_input(" 2024-5-1 "), "2024-05-01");
        assert_eq!(normalize_date_input("2024-02-30"), "");
        assert_eq!(normalize_date_input("May 1st"), "");
        assert_eq!(normalize_date_input(""), "");
        assert_eq!(normalize_date_input("today"), today_iso());
    }
}
