//! Batch operations: delete, move, copy of several paths in one call.
//!
//! The `fileops` endpoints take one parent directory plus the bare names
//! of the items, `:`-joined. The parent is derived from the first path;
//! callers are responsible for passing paths that share it.

use seafront_api::LibraryInfo;

use crate::error::Error;
use crate::transport::HttpTransport;

/// `POST /api2/repos/{id}/fileops/{delete|move|copy}/`.
#[derive(Debug, Clone)]
pub struct MultiResource {
    transport: HttpTransport,
}

impl MultiResource {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Delete several in-library paths in one call.
    pub fn delete(&self, library: &LibraryInfo, paths: &[&str]) -> Result<(), Error> {
        let (parent, names) = batch(paths)?;

        self.transport.post_form(
            &format!("api2/repos/{}/fileops/delete/", library.id),
            &[("p", parent)],
            &[("file_names", &names)],
        )?;
        Ok(())
    }

    /// Move several paths from `src` into `dst_dir` of `dst`.
    pub fn move_items(
        &self,
        src: &LibraryInfo,
        paths: &[&str],
        dst: &LibraryInfo,
        dst_dir: &str,
    ) -> Result<(), Error> {
        self.fileop("move", src, paths, dst, dst_dir)
    }

    /// Copy several paths from `src` into `dst_dir` of `dst`.
    pub fn copy_items(
        &self,
        src: &LibraryInfo,
        paths: &[&str],
        dst: &LibraryInfo,
        dst_dir: &str,
    ) -> Result<(), Error> {
        self.fileop("copy", src, paths, dst, dst_dir)
    }

    fn fileop(
        &self,
        op: &str,
        src: &LibraryInfo,
        paths: &[&str],
        dst: &LibraryInfo,
        dst_dir: &str,
    ) -> Result<(), Error> {
        let (parent, names) = batch(paths)?;

        self.transport.post_form(
            &format!("api2/repos/{}/fileops/{}/", src.id, op),
            &[("p", parent)],
            &[
                ("dst_repo", &dst.id),
                ("dst_dir", dst_dir),
                ("file_names", &names),
            ],
        )?;
        Ok(())
    }
}

/// Split a batch of in-library paths into the shared parent directory and
/// the `:`-joined item names. The parent comes from the first path.
fn batch<'a>(paths: &[&'a str]) -> Result<(&'a str, String), Error> {
    let first = paths
        .first()
        .ok_or_else(|| Error::invalid_path("", "no paths given"))?;

    let (parent, _) = split_parent(first)?;

    let mut names = Vec::with_capacity(paths.len());
    for path in paths {
        let (_, name) = split_parent(path)?;
        names.push(name);
    }

    Ok((parent, names.join(":")))
}

/// Split an in-library path into its parent directory and final name.
fn split_parent(path: &str) -> Result<(&str, &str), Error> {
    let idx = path
        .rfind('/')
        .ok_or_else(|| Error::invalid_path(path, "expected an in-library path"))?;

    let name = &path[idx + 1..];
    if name.is_empty() {
        return Err(Error::invalid_path(path, "path has no item name"));
    }

    let parent = if idx == 0 { "/" } else { &path[..idx] };
    Ok((parent, name))
}
