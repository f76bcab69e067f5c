//! CSV parser for transcript exports.

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::analyzers::types::CourseRecord;
use crate::error::TranscriptError;

/// Columns every transcript must carry. The grade-point, percentage-score and
/// overall-grade columns are optional.
pub static REQUIRED_COLUMNS: &[&str] = &[
    "是否主修",
    "考试类型",
    "重修重考",
    "是否有效",
    "是否及格",
    "学分",
    "是否学位课",
];

/// Parses decoded transcript text into course records.
///
/// Short or long rows are tolerated; missing cells read as empty. Rows the
/// CSV reader cannot make sense of are skipped with a warning.
///
/// # Errors
///
/// Returns an error if the header row cannot be read or a required column
/// is absent.
pub fn parse_transcript(text: &str) -> Result<Vec<CourseRecord>, TranscriptError> {
    let mut rdr = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = rdr.headers()?.clone();
    for &column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(TranscriptError::MissingColumn(column));
        }
    }
    rdr.set_headers(last_wins_headers(&headers));

    let mut records = Vec::new();
    for (index, result) in rdr.deserialize::<CourseRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!(row = index + 1, error = %e, "Skipping unreadable row"),
        }
    }

    debug!(rows = records.len(), "Transcript parsed");
    Ok(records)
}

/// Renames every earlier occurrence of a repeated header so that the last
/// column with a given name is the one deserialized.
fn last_wins_headers(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if headers.iter().skip(index + 1).any(|later| later == name) {
                debug!(column = name, index, "Ignoring repeated column");
                format!("{name}#{index}")
            } else {
                name.to_string()
            }
        })
        .collect()
}
