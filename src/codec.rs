//! Tag encoding in file names
//!
//! A file's tags live in a bracketed suffix on its base name, placed before
//! the extension:
//!
//! ```text
//! report.[draft urgent].pdf
//! ^^^^^^ ^^^^^^^^^^^^^^ ^^^^
//! normalized  tags      extension
//! ```
//!
//! Everything in this module is pure string manipulation. No filesystem
//! access happens here; see [`crate::resolve`] for the I/O side.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Opening marker of the tag suffix
pub const SUFFIX_OPEN: &str = ".[";
/// Closing marker of the tag suffix
pub const SUFFIX_CLOSE: &str = "]";
/// Separator between tags inside the suffix
pub const TAG_SEPARATOR: &str = " ";

// Contents may not contain brackets, which pins the match to the last group.
static SUFFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.\[([^\[\]]*)\]$").expect("tag suffix regex is valid")
});

/// A path split into directory, base name and extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileInfo {
    /// Parent directory, `.` when the path has none
    pub directory: PathBuf,
    /// Extension including the leading dot, or empty
    pub extension: String,
    /// Final path segment without the extension
    pub base_name: String,
}

impl FileInfo {
    /// File name (base name plus extension)
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }

    /// Rebuild the full path from the parts
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.directory.join(self.file_name())
    }

    /// Path of a sibling file sharing this directory and extension
    #[must_use]
    pub fn sibling(&self, base_name: &str) -> PathBuf {
        self.directory.join(format!("{base_name}{}", self.extension))
    }
}

/// A [`FileInfo`] together with the tags decoded from its base name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaggedFileInfo {
    #[serde(flatten)]
    pub file: FileInfo,
    pub tags: Vec<String>,
    pub normalized_base_name: String,
}

impl TaggedFileInfo {
    /// Build a record from a split path, decoding any tag suffix
    #[must_use]
    pub fn from_file_info(file: FileInfo) -> Self {
        let DecodedTags {
            tags,
            normalized_base_name,
        } = decode_tags(&file.base_name);
        Self {
            file,
            tags,
            normalized_base_name,
        }
    }

    /// Replace the tag list, keeping `base_name` in sync with the new tags.
    #[must_use]
    pub fn with_tags(self, tags: Vec<String>) -> Self {
        let base_name = compose(&self.normalized_base_name, &tags);
        Self {
            file: FileInfo {
                base_name,
                ..self.file
            },
            tags,
            normalized_base_name: self.normalized_base_name,
        }
    }

    /// Whether the record carries at least one tag
    #[must_use]
    pub fn is_tagged(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// Result of decoding a base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTags {
    pub tags: Vec<String>,
    pub normalized_base_name: String,
}

/// Split a path into directory, base name and extension.
///
/// The extension runs from the last `.` of the final segment. Names starting
/// with a dot and no other dot (`.bashrc`) have no extension, and neither does
/// a name whose trailing `.[...]` is a well-formed tag suffix, so that
/// `notes.[todo]` keeps its tags.
#[must_use]
pub fn split(path: &Path) -> FileInfo {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (base_name, extension) = split_extension(&name);
    FileInfo {
        directory,
        extension: extension.to_string(),
        base_name: base_name.to_string(),
    }
}

fn split_extension(name: &str) -> (&str, &str) {
    if decode_suffix(name).is_some() {
        return (name, "");
    }
    match name.rfind('.') {
        Some(idx) if idx > 0 => name.split_at(idx),
        _ => (name, ""),
    }
}

/// Decode the tag suffix of a base name.
///
/// A missing or malformed suffix (`x.[]`, `x.[a  b]`) yields no tags and the
/// base name unchanged.
#[must_use]
pub fn decode_tags(base_name: &str) -> DecodedTags {
    match decode_suffix(base_name) {
        Some((normalized, tags)) => DecodedTags {
            tags,
            normalized_base_name: normalized.to_string(),
        },
        None => DecodedTags {
            tags: Vec::new(),
            normalized_base_name: base_name.to_string(),
        },
    }
}

fn decode_suffix(base_name: &str) -> Option<(&str, Vec<String>)> {
    let caps = SUFFIX_RE.captures(base_name)?;
    let whole = caps.get(0)?;
    let inner = caps.get(1)?.as_str();

    let tags: Vec<String> = inner.split(TAG_SEPARATOR).map(str::to_string).collect();
    if tags.iter().any(String::is_empty) {
        return None;
    }
    Some((&base_name[..whole.start()], tags))
}

/// Encode tags as a suffix; no tags encode to the empty string.
#[must_use]
pub fn encode_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return String::new();
    }
    format!("{SUFFIX_OPEN}{}{SUFFIX_CLOSE}", tags.join(TAG_SEPARATOR))
}

/// Append the encoded tags to a normalized base name
#[must_use]
pub fn compose(normalized_base_name: &str, tags: &[String]) -> String {
    format!("{normalized_base_name}{}", encode_tags(tags))
}

/// Split a path and decode its tags in one step
#[must_use]
pub fn parse(path: &Path) -> TaggedFileInfo {
    TaggedFileInfo::from_file_info(split(path))
}
