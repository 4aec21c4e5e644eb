use crate::error::BundleError;
use crate::options::BundleOptions;
use crate::types::Entry;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

/// How much of a file is inspected for the null-byte binary heuristic.
const SNIFF_LEN: u64 = 8 * 1024;

/// Outcome of filtering a single walk entry.
///
/// `PruneSubtree` stops descent into a directory entirely; `SkipEntry` drops a
/// single file while the walk continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkDecision {
    Keep,
    SkipEntry,
    PruneSubtree,
}

/// Compiles ignore patterns into a matcher with single-segment glob semantics:
/// `*` and `?` never cross a path separator, and there is no recursive `**`.
pub fn compile_patterns(patterns: &[String]) -> Result<GlobSet, BundleError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| {
                BundleError::Pattern(format!("invalid ignore pattern '{}': {}", pattern, e))
            })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| BundleError::Pattern(format!("failed to build glob set: {}", e)))
}

/// Applies the exclusion rules to a root-relative path, in fixed order: the
/// hidden-name filter first, then the ignore globs. First match wins.
pub fn evaluate_entry(rel: &Path, is_dir: bool, ignore: &GlobSet) -> WalkDecision {
    let hidden = rel
        .file_name()
        .map(|name| name.to_string_lossy().starts_with('.'))
        .unwrap_or(false);
    if hidden || ignore.is_match(rel) {
        if is_dir {
            return WalkDecision::PruneSubtree;
        }
        return WalkDecision::SkipEntry;
    }
    WalkDecision::Keep
}

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(options: &BundleOptions) -> Result<Self, BundleError> {
        let matcher = compile_patterns(&options.ignore_patterns)?;
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));
        let root = options.root.clone();
        builder.filter_entry(move |entry| {
            let rel = match entry.path().strip_prefix(&root) {
                Ok(rel) => rel,
                Err(_) => return true,
            };
            // The root itself is always descended into.
            if rel.as_os_str().is_empty() {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            evaluate_entry(rel, is_dir, &matcher) == WalkDecision::Keep
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<ignore::DirEntry, ignore::Error>> {
        self.inner
    }
}

/// Sniffs the first 8 KiB for a null byte, then reads the rest of the file.
///
/// Returns `None` for binary files. The sniffed prefix is reused as the start
/// of the content buffer, so the file is read exactly once.
fn read_text_content(path: &Path) -> std::io::Result<Option<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(SNIFF_LEN as usize);
    reader.by_ref().take(SNIFF_LEN).read_to_end(&mut bytes)?;
    if bytes.contains(&0) {
        return Ok(None);
    }
    reader.read_to_end(&mut bytes)?;
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Walks `options.root` and returns an entry for every text file that passes
/// the hidden-name and ignore-glob filters.
///
/// Only a failure to access the root itself is an error; unreadable entries,
/// vanished files, and binary files are skipped and the walk continues.
pub fn bundle(options: BundleOptions) -> Result<Vec<Entry>, BundleError> {
    tracing::debug!("starting bundle with root: {}", options.root.display());
    let meta = fs::metadata(&options.root).map_err(|e| BundleError::RootAccess {
        path: options.root.clone(),
        source: e,
    })?;
    if meta.is_dir() {
        fs::read_dir(&options.root).map_err(|e| BundleError::RootAccess {
            path: options.root.clone(),
            source: e,
        })?;
    }
    let walker = Walker::new(&options)?;
    let mut entries = Vec::new();
    for result in walker.into_iter() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                tracing::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let rel = match entry.path().strip_prefix(&options.root) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            _ => continue,
        };
        match read_text_content(entry.path()) {
            Ok(Some(content)) => entries.push(Entry::from_relative(&rel, content)),
            Ok(None) => {
                tracing::debug!("binary file detected: {}", rel.display());
            }
            Err(e) => {
                tracing::debug!("read failed for {}: {}", rel.display(), e);
            }
        }
    }
    Ok(entries)
}
