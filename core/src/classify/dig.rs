//! Classifier for `dig` output.
//!
//! Only the answer section matters: the lines after `;; ANSWER SECTION:` up
//! to the next blank line. Concatenated output of several queries holds
//! several such sections and each one is scanned.

use netlog_common::error::FieldError;
use netlog_common::record::DigRecord;

use super::{LineClassifier, Outcome};

const ANSWER_HEADER: &str = ";; ANSWER SECTION:";

/// Returns the lines of every answer section, in order.
pub fn answer_block<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut block: Vec<&'a str> = Vec::new();
    let mut inside: bool = false;

    for &line in lines {
        if !inside {
            inside = line.starts_with(ANSWER_HEADER);
            continue;
        }
        if line.is_empty() {
            inside = false;
            continue;
        }
        block.push(line);
    }
    block
}

/// Splits an answer line into `name ttl class type value`.
///
/// The value keeps any inner whitespace (TXT, SOA, MX data); a single
/// trailing dot is dropped.
pub fn parse_answer(line: &str) -> Result<DigRecord, FieldError> {
    let mut rest: &str = line.trim();
    let mut fields: [&str; 4] = [""; 4];

    for (i, field) in fields.iter_mut().enumerate() {
        let (head, tail) = rest
            .split_once(char::is_whitespace)
            .ok_or_else(|| FieldError::new(FIELD_NAMES[i + 1], line))?;
        *field = head;
        rest = tail.trim_start();
    }
    if rest.is_empty() {
        return Err(FieldError::new("value", line));
    }

    let value: &str = rest.strip_suffix('.').unwrap_or(rest);
    let [name, ttl, class, record_type] = fields;

    Ok(DigRecord {
        name: name.to_string(),
        ttl: ttl.to_string(),
        class: class.to_string(),
        record_type: record_type.to_string(),
        value: value.to_string(),
    })
}

const FIELD_NAMES: [&str; 5] = ["name", "ttl", "class", "type", "value"];

#[derive(Debug, Clone, Copy, Default)]
pub struct DigClassifier;

impl LineClassifier for DigClassifier {
    type Record = DigRecord;

    fn tool(&self) -> &'static str {
        "dig"
    }

    fn candidates<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        answer_block(lines)
    }

    fn classify(&self, line: &str) -> Outcome<DigRecord> {
        match parse_answer(line) {
            Ok(record) => Outcome::Record(record),
            Err(e) => Outcome::Malformed(e),
        }
    }
}
