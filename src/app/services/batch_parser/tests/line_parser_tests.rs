//! Tests for the single-line tokenizer

use chrono::NaiveDate;

use crate::Error;
use crate::app::services::batch_parser::line_parser::tokenize_line;

#[test]
fn test_tokenize_valid_line() {
    let raw = tokenize_line("photo.jpg, Krakow, 2013-09-05 14:08:15", 1).unwrap();

    assert_eq!(raw.base_name, "photo");
    assert_eq!(raw.extension, "jpg");
    assert_eq!(raw.city, "Krakow");
    assert_eq!(
        raw.timestamp,
        NaiveDate::from_ymd_opt(2013, 9, 5)
            .unwrap()
            .and_hms_opt(14, 8, 15)
            .unwrap()
    );
}

#[test]
fn test_tokenize_rejects_missing_field() {
    let result = tokenize_line("photo.jpg, Krakow", 3);
    match result {
        Err(Error::MalformedLine { line_number, .. }) => assert_eq!(line_number, 3),
        other => panic!("expected MalformedLine, got {:?}", other),
    }
}

#[test]
fn test_tokenize_rejects_extra_field() {
    assert!(matches!(
        tokenize_line("photo.jpg, Krakow, Poland, 2013-09-05 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_separator_without_space() {
    // The field separator is ", " exactly
    assert!(matches!(
        tokenize_line("photo.jpg,Krakow,2013-09-05 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_missing_extension_separator() {
    assert!(matches!(
        tokenize_line("photo, Krakow, 2013-09-05 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_multiple_extension_separators() {
    assert!(matches!(
        tokenize_line("my.photo.jpg, Krakow, 2013-09-05 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_wrong_timestamp_separators() {
    assert!(matches!(
        tokenize_line("photo.jpg, Krakow, 2013/09/05 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_timestamp_missing_seconds() {
    assert!(matches!(
        tokenize_line("photo.jpg, Krakow, 2013-09-05 14:08", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_rejects_invalid_calendar_date() {
    // February 30th never exists
    assert!(matches!(
        tokenize_line("photo.jpg, Krakow, 2013-02-30 14:08:15", 1),
        Err(Error::MalformedLine { .. })
    ));
}

#[test]
fn test_tokenize_does_not_validate_fields() {
    // Tokenizing only checks shape; a disallowed extension still tokenizes
    let raw = tokenize_line("photo.bmp, krakow, 2013-09-05 14:08:15", 1).unwrap();
    assert_eq!(raw.extension, "bmp");
    assert_eq!(raw.city, "krakow");
}
