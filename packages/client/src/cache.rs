//! Process-lifetime cache of library metadata.
//!
//! Every operation that touches a library needs its metadata, and fetching
//! the library list for each call would cost a network round trip per
//! operation. The cache holds the last-seen [`LibraryInfo`] per library id;
//! it is populated by an explicit refresh (or by listing root, which
//! refreshes as a documented side effect) and is never refreshed
//! implicitly on lookup.
//!
//! Staleness is explicit: every refresh bumps a generation counter, and
//! lookups return the record together with the generation at which it was
//! last written. Entries for libraries that have been removed on the
//! server are never purged; a stale record stays until the process exits.

use std::collections::HashMap;

use seafront_api::LibraryInfo;

/// A cache lookup result: the record plus the generation stamp at which it
/// was last refreshed.
#[derive(Debug, Clone, Copy)]
pub struct CachedLibrary<'a> {
    pub info: &'a LibraryInfo,
    pub generation: u64,
}

/// Mapping from library id to its last-seen metadata.
#[derive(Debug, Default)]
pub struct LibraryCache {
    entries: HashMap<String, Entry>,
    generation: u64,
}

#[derive(Debug)]
struct Entry {
    info: LibraryInfo,
    generation: u64,
}

impl LibraryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current generation. Starts at zero and increases by one per
    /// [`insert_all`](Self::insert_all) call.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Overwrite or insert a record for every library in `libs`.
    ///
    /// Entries not named in `libs` are left untouched, so records for
    /// libraries removed on the server survive the refresh.
    pub fn insert_all(&mut self, libs: impl IntoIterator<Item = LibraryInfo>) {
        self.generation += 1;
        for info in libs {
            self.entries.insert(
                info.id.clone(),
                Entry {
                    info,
                    generation: self.generation,
                },
            );
        }
    }

    /// Look up a library by id. Never performs I/O; callers must refresh
    /// first (directly or via a root listing) before relying on freshness.
    pub fn get(&self, id: &str) -> Option<CachedLibrary<'_>> {
        self.entries.get(id).map(|entry| CachedLibrary {
            info: &entry.info,
            generation: entry.generation,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
