//! CSV loading of holdings text.
//!
//! The format is minimal: comma-delimited, no quoting or
//! escaping, first line is a header that is skipped. A field containing a
//! comma is not supported and will shift the remaining columns. Quote
//! characters are kept literally.

use tracing::debug;

use crate::types::{FundRecord, REQUIRED_COLUMNS};

const BOM: char = '\u{feff}';

/// Data rows split out of a holdings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    /// Rows with at least [`REQUIRED_COLUMNS`] columns, in file order.
    pub rows: Vec<Vec<String>>,

    /// Number of data rows discarded as too short or unreadable.
    pub dropped: usize,
}

impl ParsedRows {
    /// Maps every row into a [`FundRecord`] with metrics unset.
    #[must_use]
    pub fn into_records(self) -> Vec<FundRecord> {
        self.rows
            .iter()
            .filter_map(|row| FundRecord::from_row(row))
            .collect()
    }
}

/// Splits holdings text into data rows.
///
/// Strips a leading byte-order mark, trims surrounding whitespace, accepts
/// `\n` and `\r\n` line endings, skips the header line, and drops any row
/// with fewer than [`REQUIRED_COLUMNS`] columns. Blank lines are ignored.
///
/// # Examples
///
/// ```
/// use fundwatch_portfolio::loader::parse_rows;
///
/// let text = "\u{feff}FundName,Code,Cost,Shares,TargetWeight,CurrentValue,High_3m\r\n\
///             黄金ETF,518880,3.0,500,0.1,4.0,5.0\r\n\
///             short,row\r\n";
/// let parsed = parse_rows(text);
///
/// assert_eq!(parsed.rows.len(), 1);
/// assert_eq!(parsed.rows[0][0], "黄金ETF");
/// assert_eq!(parsed.dropped, 1);
/// ```
#[must_use]
pub fn parse_rows(text: &str) -> ParsedRows {
    let body = text.strip_prefix(BOM).unwrap_or(text).trim();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(body.as_bytes());

    let mut parsed = ParsedRows::default();
    for result in reader.records() {
        match result {
            Ok(record) if record.len() >= REQUIRED_COLUMNS => {
                parsed
                    .rows
                    .push(record.iter().map(str::to_string).collect());
            }
            Ok(record) => {
                debug!(
                    line = record.position().map(|p| p.line()),
                    columns = record.len(),
                    "dropping short row"
                );
                parsed.dropped += 1;
            }
            Err(e) => {
                debug!(error = %e, "dropping unreadable row");
                parsed.dropped += 1;
            }
        }
    }

    parsed
}

/// Parses holdings text straight into records, returning the dropped count.
#[must_use]
pub fn parse_records(text: &str) -> (Vec<FundRecord>, usize) {
    let parsed = parse_rows(text);
    let dropped = parsed.dropped;
    (parsed.into_records(), dropped)
}
