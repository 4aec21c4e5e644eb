//! Output serialization for bundle results.
//!
//! Serializes the entry sequence as a JSON array of objects with `filename`,
//! `directory`, and `content` fields, in the order the bundler produced them.
//! An empty sequence serializes as `[]`.

use crate::error::BundleError;
use crate::types::Entry;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serializes the entries to a JSON string.
pub fn to_json(entries: &[Entry], pretty: bool) -> Result<String, BundleError> {
    let json = if pretty {
        serde_json::to_string_pretty(entries)?
    } else {
        serde_json::to_string(entries)?
    };
    Ok(json)
}

/// Serializes the entries and writes them to a file, with a trailing newline.
pub fn write_to_file(
    entries: &[Entry],
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), BundleError> {
    let path = path.as_ref();
    let json = to_json(entries, pretty)?;
    let file = File::create(path).map_err(|e| BundleError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .and_then(|()| writer.write_all(b"\n"))
        .and_then(|()| writer.flush())
        .map_err(|e| BundleError::io(path, e))?;
    Ok(())
}
