use serde::{Deserialize, Serialize};
use std::path::Path;

/// One text file captured by the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Base name of the file, with no directory component.
    pub filename: String,
    /// Directory of the file relative to the scan root, `.` for files directly
    /// under the root.
    pub directory: String,
    /// The full contents of the file.
    ///
    /// Bytes are carried through as-is, with invalid UTF-8 sequences replaced;
    /// no charset detection or conversion is applied.
    pub content: String,
}

impl Entry {
    /// Builds an entry from a root-relative path and the file's content.
    pub(crate) fn from_relative(rel: &Path, content: String) -> Self {
        let filename = rel
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let directory = match rel.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.to_string_lossy().into_owned()
            }
            _ => String::from("."),
        };
        Self {
            filename,
            directory,
            content,
        }
    }
}
