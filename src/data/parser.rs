use std::io::{self, Read, Write};

use super::error::ParseError;
use super::model::{Field, ProductCatalog, ProductRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse catalog CSV held in memory.
pub fn parse_str(text: &str) -> Result<ProductCatalog, ParseError> {
    parse_reader(text.as_bytes())
}

/// Parse catalog CSV from any byte stream.
///
/// Layout: the first row holds the column names, every following
/// non-blank row becomes one [`ProductRecord`]. Fields may be quoted to
/// carry commas, doubled quotes or newlines. Short rows are padded with
/// empty cells; surplus cells beyond the header are ignored.
pub fn parse_reader<R: Read>(input: R) -> Result<ProductCatalog, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(QuoteTracker::new(input));

    let columns: Vec<String> = reader
        .headers()
        .map_err(ParseError::from_csv)?
        .iter()
        .enumerate()
        .map(|(i, h)| {
            if i == 0 {
                h.trim_start_matches('\u{feff}').to_string()
            } else {
                h.to_string()
            }
        })
        .collect();

    let slots: Vec<Slot> = columns
        .iter()
        .map(|h| match Field::from_header(h) {
            Some(field) => Slot::Known(field),
            None => Slot::Extra(h.clone()),
        })
        .collect();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(ParseError::from_csv)?;
        if is_blank_line(&row) {
            continue;
        }

        let mut record = ProductRecord::default();
        for (idx, slot) in slots.iter().enumerate() {
            let value = row.get(idx).unwrap_or("").to_string();
            match slot {
                Slot::Known(field) => record.set(*field, value),
                Slot::Extra(name) => {
                    record.extra.insert(name.clone(), value);
                }
            }
        }
        records.push(record);
    }

    reader.get_ref().finish()?;

    Ok(ProductCatalog::from_records(columns, records))
}

/// Write records as catalog CSV with the canonical header.
pub fn write_records<W: Write>(output: W, records: &[ProductRecord]) -> csv::Result<()> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(Field::ALL.iter().map(|f| f.header()))?;
    for record in records {
        writer.write_record(Field::ALL.iter().map(|f| record.get(*f)))?;
    }
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

enum Slot {
    Known(Field),
    Extra(String),
}

/// A line with no data: the csv reader already drops truly empty lines,
/// so what is left is a single whitespace-only cell.
fn is_blank_line(row: &csv::StringRecord) -> bool {
    row.len() == 1 && row.get(0).is_some_and(|c| c.trim().is_empty())
}

// -- Quote tracking --

/// Where the scanner is relative to CSV field boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    FieldStart,
    Unquoted,
    Quoted,
    /// Saw a `"` inside a quoted field: either an escape or the closing quote.
    QuoteInQuoted,
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Pass-through reader that follows the quoting state of the bytes the
/// csv reader consumes. The csv crate accepts an unterminated quote at
/// end of input as if it were closed; this lets the parser reject it.
struct QuoteTracker<R> {
    inner: R,
    state: QuoteState,
    line: u64,
    open_line: u64,
    /// Leading BOM bytes matched so far; `None` once past the BOM.
    bom_seen: Option<usize>,
}

impl<R: Read> QuoteTracker<R> {
    fn new(inner: R) -> Self {
        QuoteTracker {
            inner,
            state: QuoteState::FieldStart,
            line: 1,
            open_line: 0,
            bom_seen: Some(0),
        }
    }

    fn observe(&mut self, bytes: &[u8]) {
        use QuoteState::*;
        for &b in bytes {
            // The csv reader strips a leading BOM, so it is not field content.
            if let Some(seen) = self.bom_seen {
                if UTF8_BOM[seen] == b {
                    self.bom_seen = (seen + 1 < UTF8_BOM.len()).then_some(seen + 1);
                    continue;
                }
                self.bom_seen = None;
                if seen > 0 {
                    self.state = Unquoted;
                }
            }
            if b == b'\n' {
                self.line += 1;
            }
            self.state = match (self.state, b) {
                (FieldStart, b'"') => {
                    self.open_line = self.line;
                    Quoted
                }
                (FieldStart | Unquoted, b',' | b'\n' | b'\r') => FieldStart,
                (FieldStart | Unquoted, _) => Unquoted,
                (Quoted, b'"') => QuoteInQuoted,
                (Quoted, _) => Quoted,
                (QuoteInQuoted, b'"') => Quoted,
                (QuoteInQuoted, b',' | b'\n' | b'\r') => FieldStart,
                (QuoteInQuoted, _) => Unquoted,
            };
        }
    }

    /// Fails if the input ended inside a quoted field.
    fn finish(&self) -> Result<(), ParseError> {
        if self.state == QuoteState::Quoted {
            return Err(ParseError::UnterminatedQuote {
                line: self.open_line,
            });
        }
        Ok(())
    }
}

impl<R: Read> Read for QuoteTracker<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.observe(&buf[..n]);
        Ok(n)
    }
}
