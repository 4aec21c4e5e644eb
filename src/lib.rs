//! # Dirbundle
//!
//! `dirbundle` is a library for recursively walking a directory tree and collecting the
//! contents of every text file into a flat sequence of entries, ready to be serialized
//! as a single JSON document.
//!
//! The walk skips hidden files and directories (base name starting with `.`), paths
//! matching user-supplied glob patterns, and files that look binary (a `0x00` byte in
//! the first 8 KiB). Directories that match a filter are pruned whole; nothing beneath
//! them is visited. Entries are produced depth-first, in lexicographic file-name order
//! within each directory, so repeated runs over an unmodified tree yield identical
//! output.
//!
//! # Example
//!
//! ```no_run
//! use dirbundle::{BundleBuilder, bundle};
//!
//! let options = BundleBuilder::new(".")
//!     .ignore_patterns(vec!["*.log".into(), "target".into()])
//!     .build();
//!
//! let entries = bundle(options).expect("failed to bundle directory");
//!
//! for entry in &entries {
//!     println!("{}/{} ({} bytes)", entry.directory, entry.filename, entry.content.len());
//! }
//! ```

mod engine;
mod error;
mod options;
mod types;

pub mod config;
pub mod output;

pub use engine::{WalkDecision, bundle, compile_patterns, evaluate_entry};
pub use error::BundleError;
pub use options::{BundleBuilder, BundleOptions};
pub use types::Entry;
