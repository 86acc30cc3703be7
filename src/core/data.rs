//! Heatmap series + memory-efficient CSV loader with zero-allocation number parsing.
//!
//! Layout: one header row naming the value-bucket edges, then one row per
//! timestamp with a count for every bucket.
//!
//! ```text
//! timestamp,0,10,20,50
//! 1700000000000,3,0,1
//! 1700000060000,1,4,0
//! ```

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
};

use serde::Serialize;

use crate::core::range::{ValueRange, ranges_from_bounds};

// --- Public Row Structs ---

/// Pre-aggregated histogram rows: `counts[t][b]` samples fell into value
/// bucket `b` at `timestamps[t]` (milliseconds).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HeatmapSeries {
    /// Ascending value-bucket edges; `n + 1` edges for `n` buckets.
    pub bounds: Vec<f64>,
    pub timestamps: Vec<i64>,
    pub counts: Vec<Vec<f64>>,
}

impl HeatmapSeries {
    #[must_use]
    pub fn ranges(&self) -> Vec<ValueRange> {
        ranges_from_bounds(&self.bounds)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    MissingHeader,
    BadColumnCount { expected: usize, got: usize },
    BadNumber { field: &'static str, text: String },
    UnsortedBounds,
}

impl Display for ParseCsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on line {}: {}", self.line, e),
            ParseErrorKind::MissingHeader => write!(f, "missing header row with bucket edges"),
            ParseErrorKind::BadColumnCount { expected, got } => {
                write!(
                    f,
                    "line {}: expected {} columns, got {}",
                    self.line, expected, got
                )
            }
            ParseErrorKind::BadNumber { field, text } => {
                write!(f, "line {}: invalid {} value '{}'", self.line, field, text)
            }
            ParseErrorKind::UnsortedBounds => {
                write!(f, "line {}: bucket edges must strictly increase", self.line)
            }
        }
    }
}
impl Error for ParseCsvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn bad_number(bytes: &[u8], line: usize, field: &'static str) -> ParseCsvError {
    ParseCsvError {
        line,
        kind: ParseErrorKind::BadNumber {
            field,
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    }
}

#[inline]
fn parse_f64(bytes: &[u8], line: usize, field: &'static str) -> Result<f64, ParseCsvError> {
    let val =
        lexical_core::parse::<f64>(bytes).map_err(|_| bad_number(bytes, line, field))?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(bad_number(bytes, line, field))
    }
}

#[inline]
fn parse_i64(bytes: &[u8], line: usize, field: &'static str) -> Result<i64, ParseCsvError> {
    lexical_core::parse::<i64>(bytes).map_err(|_| bad_number(bytes, line, field))
}

/// Split on `,` and trim every field.
#[inline]
fn split_fields(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|&b| b == b',').map(trim)
}

// --- Fast CSV ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_heatmap_csv<R: Read>(src: R) -> Result<HeatmapSeries, ParseCsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = HeatmapSeries::default();
    let mut saw_header = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        if trim(&buf).is_empty() || buf[0] == b'#' {
            continue;
        }

        if !saw_header {
            saw_header = true;
            // first field is the timestamp column name
            for field in split_fields(&buf).skip(1) {
                let edge = parse_f64(field, line_no, "bucket edge")?;
                if series.bounds.last().is_some_and(|&prev| edge <= prev) {
                    return Err(ParseCsvError {
                        line: line_no,
                        kind: ParseErrorKind::UnsortedBounds,
                    });
                }
                series.bounds.push(edge);
            }
            if series.bounds.len() < 2 {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount {
                        expected: 3,
                        got: series.bounds.len() + 1,
                    },
                });
            }
            continue;
        }

        let expected = series.bounds.len();
        let got = split_fields(&buf).count();
        if got != expected {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::BadColumnCount { expected, got },
            });
        }

        let mut fields = split_fields(&buf);
        let ts = parse_i64(fields.next().unwrap_or_default(), line_no, "timestamp")?;
        let row = fields
            .map(|f| parse_f64(f, line_no, "count"))
            .collect::<Result<Vec<f64>, _>>()?;

        series.timestamps.push(ts);
        series.counts.push(row);
    }

    if !saw_header {
        return Err(ParseCsvError {
            line: 0,
            kind: ParseErrorKind::MissingHeader,
        });
    }
    Ok(series)
}

pub fn read_heatmap_csv_from_path(path: &str) -> Result<HeatmapSeries, ParseCsvError> {
    if path == "-" {
        read_heatmap_csv(std::io::stdin())
    } else {
        use std::fs::File;
        read_heatmap_csv(File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
