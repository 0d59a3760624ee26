//! File endpoints: rename, upload, download.
//!
//! Transfers are two-step: the API hands out a one-shot absolute URL
//! (`upload-link`, or the download link returned by the file endpoint) and
//! the payload moves over a second request against that URL.

use std::fs::File;
use std::io;
use std::path::Path;

use reqwest::blocking::multipart::{Form, Part};

use seafront_api::LibraryInfo;

use crate::error::Error;
use crate::transport::HttpTransport;

/// `POST /api2/repos/{id}/file/` and the upload/download link flows.
#[derive(Debug, Clone)]
pub struct FileResource {
    transport: HttpTransport,
}

impl FileResource {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    fn endpoint(library: &LibraryInfo) -> String {
        format!("api2/repos/{}/file/", library.id)
    }

    /// Rename the file at `path` to `new_name` (same directory).
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

    /// Upload a local file into `dest_dir`.
    ///
    /// Fetches an upload link for the library, then posts the file as a
    /// multipart form against it. The stored name is `dest_name` when
    /// given, the local file's name otherwise.
    pub fn upload(
        &self,
        library: &LibraryInfo,
        local: &Path,
        dest_dir: &str,
        dest_name: Option<&str>,
    ) -> Result<(), Error> {
        let link: String = self
            .transport
            .get_json(&format!("api2/repos/{}/upload-link/", library.id), &[])?;

        let file_name = match dest_name {
            Some(name) => name.to_string(),
            None => local
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    Error::invalid_path(&local.to_string_lossy(), "local path has no file name")
                })?,
        };

        let part = Part::file(local)?.file_name(file_name);
        let form = Form::new()
            .text("parent_dir", dest_dir.to_string())
            .part("file", part);

        self.transport.post_multipart(&link, form)?;
        Ok(())
    }

    /// Download the file at `path` into the local file `local`.
    ///
    /// Fetches the file's download link, then streams the body to disk.
    pub fn download(
        &self,
        library: &LibraryInfo,
        path: &str,
        local: &Path,
    ) -> Result<(), Error> {
        let link: String = self
            .transport
            .get_json(&Self::endpoint(library), &[("p", path)])?;

        let mut response = self.transport.get_absolute(&link)?;
        let mut file = File::create(local)?;
        io::copy(&mut response, &mut file)?;
        Ok(())
    }
}
