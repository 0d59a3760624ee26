//! Serde types for the server's JSON payloads.

use serde::{Deserialize, Serialize};

/// Metadata for one library, as returned by `GET /api2/repos/`.
///
/// A library is the server's top-level storage container, the rough
/// equivalent of a drive or bucket. The `id` is an opaque token, unique
/// among libraries and stable for the library's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    /// Last-modified time in epoch seconds.
    #[serde(default)]
    pub mtime: i64,
    #[serde(default)]
    pub encrypted: bool,
}

/// Kind of a directory listing item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DirentKind {
    Dir,
    File,
}

/// One item of a directory listing, as returned by
/// `GET /api2/repos/{id}/dir/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dirent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DirentKind,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mtime: i64,
}

impl Dirent {
    pub fn is_dir(&self) -> bool {
        self.kind == DirentKind::Dir
    }
}

/// Response body of `POST /api2/auth-token/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}
