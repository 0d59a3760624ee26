//! Endpoint groups of the server's REST API.
//!
//! One struct per group, each owning a clone of the session transport:
//!
//! - [`LibraryResource`] - the library collection (`/api2/repos/`)
//! - [`DirectoryResource`] - directories inside a library
//! - [`FileResource`] - file rename, upload, download
//! - [`MultiResource`] - batch delete/move/copy within one library
//!
//! These are the wire collaborators the facade composes; they take
//! already-resolved library metadata and in-library paths, never unified
//! paths.

pub mod directory;
pub mod file;
pub mod library;
pub mod multi;

pub use directory::DirectoryResource;
pub use file::FileResource;
pub use library::LibraryResource;
pub use multi::MultiResource;
