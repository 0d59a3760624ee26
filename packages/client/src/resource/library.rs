//! The library collection endpoints.

use seafront_api::LibraryInfo;

use crate::error::Error;
use crate::transport::HttpTransport;

/// `GET/POST /api2/repos/` and `DELETE /api2/repos/{id}/`.
#[derive(Debug, Clone)]
pub struct LibraryResource {
    transport: HttpTransport,
}

impl LibraryResource {
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// List every library visible to the session.
    pub fn list(&self) -> Result<Vec<LibraryInfo>, Error> {
        self.transport.get_json("api2/repos/", &[])
    }

    /// Create a library with the given name.
    pub fn create(&self, name: &str) -> Result<(), Error> {
        self.transport
            .post_form("api2/repos/", &[], &[("name", name)])?;
        Ok(())
    }

    /// Delete a whole library by id.
    pub fn delete(&self, id: &str) -> Result<(), Error> {
        self.transport
            .delete(&format!("api2/repos/{}/", id), &[])?;
        Ok(())
    }
}
