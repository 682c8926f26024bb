//! Flat `key=value` text encoding shared by the cert and application files

use std::collections::HashMap;

/// Record key holding the access key in the cert file
pub const ACCESS_KEY_NAME: &str = "AK";
/// Record key holding the secret key in the cert file
pub const SECRET_KEY_NAME: &str = "SK";
/// Record key holding the application instance in the app file
pub const APP_INSTANCE_KEY_NAME: &str = "appInstance";
/// Record key holding the application group in the app file
pub const APP_GROUP_KEY_NAME: &str = "appGroup";

pub const DELIMITER: char = '=';

/// Render one record entry as a newline-terminated line
pub fn encode_line(key: &str, value: &str) -> String {
    format!("{key}{DELIMITER}{value}\n")
}

/// Decode file content into a record.
///
/// Returns `None` when the content is empty after trimming. Lines that do not
/// split into exactly one key and one value are skipped. Values keep any
/// further `=` characters, and a repeated key takes its last occurrence.
pub fn parse_record(content: &str) -> Option<HashMap<String, String>> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }

    let mut record = HashMap::new();
    for line in content.split('\n') {
        let Some((key, value)) = line.split_once(DELIMITER) else {
            continue;
        };
        record.insert(key.to_string(), value.to_string());
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line() {
        assert_eq!(encode_line("AK", "abc"), "AK=abc\n");
        assert_eq!(encode_line("k", ""), "k=\n");
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let record = parse_record("a=1\nbadline\nb=2\n").unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a").map(String::as_str), Some("1"));
        assert_eq!(record.get("b").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_splits_on_first_delimiter() {
        let record = parse_record("SK=abc==\n").unwrap();

        assert_eq!(record.get("SK").map(String::as_str), Some("abc=="));
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let record = parse_record("appInstance=i1\nappGroup=g1\nappInstance=i2\n").unwrap();

        assert_eq!(record.get("appInstance").map(String::as_str), Some("i2"));
        assert_eq!(record.get("appGroup").map(String::as_str), Some("g1"));
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_record("").is_none());
        assert!(parse_record("  \n\t\n").is_none());
    }

    #[test]
    fn test_parse_only_malformed_lines_is_empty_record() {
        let record = parse_record("garbage\nmore garbage").unwrap();

        assert!(record.is_empty());
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace_only() {
        let record = parse_record("\n\n  a=1\nb= 2 \nc=3\n\n").unwrap();

        assert_eq!(record.get("a").map(String::as_str), Some("1"));
        assert_eq!(record.get("b").map(String::as_str), Some(" 2 "));
        assert_eq!(record.get("c").map(String::as_str), Some("3"));
    }
}
