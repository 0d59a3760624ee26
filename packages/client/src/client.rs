//! The client facade over the unified path space.
//!
//! Every public operation follows the same shape: split the unified path
//! through [`path`](crate::path), turn the library id into cached metadata
//! through the [`LibraryCache`], then delegate to the endpoint group that
//! owns the wire call. Path decomposition lives in one resolver so all
//! operations agree on the semantics - in particular that the stripped
//! path of a library root is always `"/"`, never an empty string.

use std::collections::BTreeMap;

use seafront_api::LibraryInfo;

use crate::cache::LibraryCache;
use crate::error::Error;
use crate::path;
use crate::resource::{DirectoryResource, FileResource, LibraryResource, MultiResource};
use crate::session::Session;
use crate::types::Entry;

/// Blocking client over one authenticated [`Session`].
///
/// Operations are single-shot synchronous calls; multi-item operations
/// are not transactional, and embedders running on several threads must
/// serialize access themselves.
pub struct SeafrontClient {
    libraries: LibraryCache,
    library: LibraryResource,
    directory: DirectoryResource,
    file: FileResource,
    multi: MultiResource,
}

impl SeafrontClient {
    /// Build a client from an authenticated session.
    ///
    /// Fails with [`Error::NotAuthenticated`] if the session holds no
    /// token. The library cache starts empty; call
    /// [`refresh_libraries`](Self::refresh_libraries) or list the root
    /// before operating inside a library.
    pub fn new(session: &Session) -> Result<Self, Error> {
        let transport = session.transport()?;

        Ok(Self {
            libraries: LibraryCache::new(),
            library: LibraryResource::new(transport.clone()),
            directory: DirectoryResource::new(transport.clone()),
            file: FileResource::new(transport.clone()),
            multi: MultiResource::new(transport),
        })
    }

    /// The library cache, for inspecting freshness via its generation
    /// stamp.
    pub fn cache(&self) -> &LibraryCache {
        &self.libraries
    }

    /// Fetch the library list and fold it into the cache.
    ///
    /// Existing entries are overwritten, new ones added; entries for
    /// libraries removed on the server are not purged.
    pub fn refresh_libraries(&mut self) -> Result<(), Error> {
        let libs = self.library.list()?;
        self.libraries.insert_all(libs);
        Ok(())
    }

    /// List `path`, returning entries keyed by their full unified path.
    ///
    /// Listing the root returns one collection entry per library, keyed
    /// `/{library-id}`, and refreshes the library cache as a side effect -
    /// it is the listing counterpart of
    /// [`refresh_libraries`](Self::refresh_libraries). Any other path
    /// lists a directory inside its library.
    pub fn list(&mut self, unified: &str) -> Result<BTreeMap<String, Entry>, Error> {
        if path::library_id(unified).is_none() {
            let libs = self.library.list()?;

            let entries = libs
                .iter()
                .map(|lib| (format!("/{}", lib.id), Entry::from(lib)))
                .collect();

            self.libraries.insert_all(libs);
            return Ok(entries);
        }

        let lib = self.cached_library(unified)?;
        let dir = stripped(unified)?;

        let items = self.directory.list(lib, dir)?;
        let prefix = listing_prefix(&lib.id, dir);

        Ok(items
            .iter()
            .map(|item| (format!("{}{}", prefix, item.name), Entry::from(item)))
            .collect())
    }

    /// Create a directory named `name` under `path`. At the root this
    /// creates a whole library instead.
    pub fn mkdir(&self, unified: &str, name: &str) -> Result<(), Error> {
        match path::library_id(unified) {
            None => self.library.create(name),
            Some(_) => {
                let lib = self.cached_library(unified)?;
                self.directory.create(lib, name, stripped(unified)?, false)
            }
        }
    }

    /// Rename the directory at `path`. The root cannot be renamed.
    pub fn rename_dir(&self, unified: &str, new_name: &str) -> Result<(), Error> {
        let lib = self.cached_library(unified)?;
        self.directory.rename(lib, stripped(unified)?, new_name)
    }

    /// Rename the file at `path`. The root cannot be renamed.
    pub fn rename_file(&self, unified: &str, new_name: &str) -> Result<(), Error> {
        let lib = self.cached_library(unified)?;
        self.file.rename(lib, stripped(unified)?, new_name)
    }

    /// Remove the object at `path`.
    ///
    /// A path that resolves to a library root deletes the library itself;
    /// anything deeper goes through the batch-delete endpoint. The root
    /// cannot be removed.
    pub fn remove(&self, unified: &str) -> Result<(), Error> {
        let id = path::library_id(unified)
            .ok_or_else(|| Error::invalid_path(unified, "cannot remove the root"))?;
        let target = stripped(unified)?;

        if target == "/" {
            // Deleting a library needs only its id, not cached metadata.
            self.library.delete(id)
        } else {
            let lib = self.cached_library(unified)?;
            self.multi.delete(lib, &[target])
        }
    }

    /// Move `src_paths` into the directory at `dst_path`.
    ///
    /// The source library is taken from the first source path; the
    /// remaining paths are passed through without checking that they
    /// share it.
    pub fn move_items(&self, src_paths: &[&str], dst_path: &str) -> Result<(), Error> {
        let (src_lib, sources, dst_lib, dst_dir) = self.resolve_batch(src_paths, dst_path)?;
        self.multi.move_items(src_lib, &sources, dst_lib, dst_dir)
    }

    /// Copy `src_paths` into the directory at `dst_path`.
    ///
    /// Source-library derivation matches [`move_items`](Self::move_items).
    pub fn copy_items(&self, src_paths: &[&str], dst_path: &str) -> Result<(), Error> {
        let (src_lib, sources, dst_lib, dst_dir) = self.resolve_batch(src_paths, dst_path)?;
        self.multi.copy_items(src_lib, &sources, dst_lib, dst_dir)
    }

    /// Upload a local file into the directory at `path`, stored under
    /// `dest_name` when given, the local file's name otherwise.
    pub fn upload(
        &self,
        unified: &str,
        local: &std::path::Path,
        dest_name: Option<&str>,
    ) -> Result<(), Error> {
        let lib = self.cached_library(unified)?;
        self.file.upload(lib, local, stripped(unified)?, dest_name)
    }

    /// Download the file at `path` into the local file `local`.
    pub fn download(&self, unified: &str, local: &std::path::Path) -> Result<(), Error> {
        let lib = self.cached_library(unified)?;
        self.file.download(lib, stripped(unified)?, local)
    }

    /// Resolve the owning library of a unified path from the cache.
    ///
    /// Never fetches: an unknown library is a
    /// [`LibraryNotCached`](Error::LibraryNotCached) failure, and the
    /// caller is expected to have refreshed first.
    fn cached_library(&self, unified: &str) -> Result<&LibraryInfo, Error> {
        let id = path::library_id(unified)
            .ok_or_else(|| Error::invalid_path(unified, "expected /{library-id}/..."))?;

        self.libraries
            .get(id)
            .map(|hit| hit.info)
            .ok_or_else(|| Error::LibraryNotCached {
                library: id.to_string(),
            })
    }

    fn resolve_batch<'a>(
        &self,
        src_paths: &[&'a str],
        dst_path: &'a str,
    ) -> Result<(&LibraryInfo, Vec<&'a str>, &LibraryInfo, &'a str), Error> {
        let first = src_paths
            .first()
            .ok_or_else(|| Error::invalid_path("", "no source paths given"))?;

        let src_lib = self.cached_library(first)?;
        let sources = src_paths
            .iter()
            .map(|p| stripped(p))
            .collect::<Result<Vec<_>, _>>()?;

        let dst_lib = self.cached_library(dst_path)?;
        let dst_dir = stripped(dst_path)?;

        Ok((src_lib, sources, dst_lib, dst_dir))
    }
}

fn stripped(unified: &str) -> Result<&str, Error> {
    path::strip_library(unified)
        .ok_or_else(|| Error::invalid_path(unified, "expected /{library-id}/..."))
}

/// Key prefix for a directory listing: `/{library-id}` plus the directory
/// unless it is the library root, with a single trailing slash either way.
fn listing_prefix(library_id: &str, dir: &str) -> String {
    if dir == "/" {
        format!("/{}/", library_id)
    } else {
        format!("/{}{}/", library_id, dir.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_prefix_at_library_root() {
        assert_eq!(listing_prefix("L1", "/"), "/L1/");
    }

    #[test]
    fn test_listing_prefix_nested() {
        assert_eq!(listing_prefix("L1", "/a/b"), "/L1/a/b/");
    }
}
