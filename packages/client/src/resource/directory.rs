//! Directory endpoints inside a library.

use seafront_api::{Dirent, LibraryInfo};

use crate::error::Error;
use crate::transport::HttpTransport;

/// `GET/POST /api2/repos/{id}/dir/`.
#[derive(Debug, Clone)]
pub struct DirectoryResource {
    transport: HttpTransport,
}

impl DirectoryResource {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    fn endpoint(library: &LibraryInfo) -> String {
        format!("api2/repos/{}/dir/", library.id)
    }

    /// List the entries of an in-library directory. `path` is the
    /// in-library path; `"/"` means the library root.
    pub fn list(&self, library: &LibraryInfo, path: &str) -> Result<Vec<Dirent>, Error> {
        self.transport
            .get_json(&Self::endpoint(library), &[("p", path)])
    }

    /// Create directory `name` under `parent`.
    ///
    /// With `recursive` set, missing components of `parent` are created
    /// first, one level at a time.
    pub fn create(
        &self,
        library: &LibraryInfo,
        name: &str,
        parent: &str,
        recursive: bool,
    ) -> Result<(), Error> {
        if recursive {
            self.ensure_dir(library, parent)?;
        }

        self.mkdir(library, &join_dir(parent, name))
    }

    /// Rename the directory at `path` to `new_name` (same parent).
    pub fn rename(
        &self,
        library: &LibraryInfo,
        path: &str,
        new_name: &str,
    ) -> Result<(), Error> {
        self.transport.post_form(
            &Self::endpoint(library),
            &[("p", path)],
            &[("operation", "rename"), ("newname", new_name)],
        )?;
        Ok(())
    }

    fn mkdir(&self, library: &LibraryInfo, path: &str) -> Result<(), Error> {
        self.transport.post_form(
            &Self::endpoint(library),
            &[("p", path)],
            &[("operation", "mkdir")],
        )?;
        Ok(())
    }

    /// Walk the components of `path`, creating each level that a listing
    /// of its parent does not already show.
    fn ensure_dir(&self, library: &LibraryInfo, path: &str) -> Result<(), Error> {
        let mut current = String::new();

        for component in path.split('/').filter(|c| !c.is_empty()) {
            let parent = if current.is_empty() { "/" } else { current.as_str() };

            let exists = self
                .list(library, parent)?
                .iter()
                .any(|item| item.is_dir() && item.name == component);

            let full = join_dir(parent, component);
            if !exists {
                self.mkdir(library, &full)?;
            }
            current = full;
        }

        Ok(())
    }
}

/// Join a directory and a child name into an in-library path.
fn join_dir(parent: &str, name: &str) -> String {
    if parent == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}
