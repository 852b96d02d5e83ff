use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use super::model::ProductRecord;

/// Write records as a pretty-printed JSON array keyed by CSV header names.
pub fn write_json<W: Write>(writer: W, records: &[&ProductRecord]) -> Result<()> {
    serde_json::to_writer_pretty(writer, records).context("serializing products to JSON")
}

/// Export records to a JSON file, replacing it if it exists.
pub fn export_json_file(path: &Path, records: &[&ProductRecord]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_json(&mut out, records)?;
    out.flush()
        .with_context(|| format!("writing {}", path.display()))
}
