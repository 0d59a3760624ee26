//! Result types of the facade operations.

use serde::{Deserialize, Serialize};

use seafront_api::{Dirent, DirentKind, LibraryInfo};

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A library or a directory.
    Collection,
    File,
}

/// One entry of a [`list`](crate::SeafrontClient::list) result, keyed in
/// the returned map by its full unified path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Entry {
    pub display_name: String,
    pub id: String,
    pub kind: EntryKind,
    pub size: u64,
    /// Last-modified time in epoch seconds.
    pub mtime: i64,
    pub encrypted: bool,
}

impl From<&LibraryInfo> for Entry {
    fn from(lib: &LibraryInfo) -> Self {
        Entry {
            display_name: lib.name.clone(),
            id: lib.id.clone(),
            kind: EntryKind::Collection,
            size: lib.size,
            mtime: lib.mtime,
            encrypted: lib.encrypted,
        }
    }
}

impl From<&Dirent> for Entry {
    fn from(item: &Dirent) -> Self {
        Entry {
            display_name: item.name.clone(),
            id: item.id.clone(),
            kind: match item.kind {
                DirentKind::Dir => EntryKind::Collection,
                DirentKind::File => EntryKind::File,
            },
            size: item.size,
            mtime: item.mtime,
            // Only whole libraries carry the encrypted flag.
            encrypted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_library() {
        let lib = LibraryInfo {
            id: "L1".to_string(),
            name: "Docs".to_string(),
            size: 100,
            mtime: 1436251356,
            encrypted: true,
        };

        let entry = Entry::from(&lib);
        assert_eq!(entry.display_name, "Docs");
        assert_eq!(entry.kind, EntryKind::Collection);
        assert!(entry.encrypted);
    }

    #[test]
    fn test_entry_from_dirent() {
        let item = Dirent {
            id: "a1".to_string(),
            name: "notes.txt".to_string(),
            kind: DirentKind::File,
            size: 421,
            mtime: 1436251356,
        };

        let entry = Entry::from(&item);
        assert_eq!(entry.kind, EntryKind::File);
        assert!(!entry.encrypted);
    }
}
