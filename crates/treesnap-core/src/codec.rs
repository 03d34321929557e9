//! Report file codec.
//!
//! One record per line: `<path-key>|<size-in-bytes>|<lowercase-hex-sha256>`.
//! Decoding is lenient: a line that does not yield exactly three fields with
//! a numeric size is skipped and never reported as an error.

use crate::model::{FileRecord, RecordedFile, Report, ReportIndex};

/// Field separator. Paths containing it cannot round-trip.
pub const FIELD_SEPARATOR: char = '|';

/// Result of decoding a report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedReport {
    pub index: ReportIndex,
    /// 1-based numbers of lines that were skipped
    pub skipped_lines: Vec<usize>,
}

/// Encode one record as a report line (no terminator).
pub fn encode_record(record: &FileRecord) -> String {
    format!(
        "{}{sep}{}{sep}{}",
        record.key(),
        record.size_bytes,
        record.content_hash,
        sep = FIELD_SEPARATOR
    )
}

/// Encode a whole report, one `\n`-terminated line per record.
pub fn encode_report(report: &Report) -> String {
    let mut out = String::new();
    for record in &report.records {
        out.push_str(&encode_record(record));
        out.push('\n');
    }
    out
}

/// Parse one report line into `(key, recorded)`.
///
/// Returns `None` for anything malformed.
pub fn parse_line(line: &str) -> Option<(String, RecordedFile)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let [key, size, hash] = fields.as_slice() else {
        return None;
    };
    let size_bytes = size.parse::<u64>().ok()?;

    Some((
        (*key).to_string(),
        RecordedFile {
            size_bytes,
            content_hash: (*hash).into(),
        },
    ))
}

/// Decode report text. Later lines win on duplicate keys.
pub fn decode_report(text: &str) -> DecodedReport {
    let mut decoded = DecodedReport::default();
    for (idx, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some((key, file)) => {
                decoded.index.insert(key, file);
            }
            None => {
                tracing::debug!(line_number = idx + 1, "skipping malformed report line");
                decoded.skipped_lines.push(idx + 1);
            }
        }
    }
    decoded
}
