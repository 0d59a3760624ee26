//! # seafront-client
//!
//! Blocking client mapping a unified path space onto the Seafile v2 REST
//! API.
//!
//! The server addresses everything in two parts - a library id plus an
//! in-library path - while this client exposes a single slash-separated
//! space: `/` is the set of all libraries, `/{library-id}` a library
//! root, `/{library-id}/sub/path` an object inside one. Splitting that
//! space is the job of the [`path`] module; resolved library ids are
//! turned into metadata through the process-lifetime [`cache`], populated
//! by an explicit refresh or by listing the root.
//!
//! ## Example
//!
//! ```ignore
//! use seafront_client::{SeafrontClient, Session};
//!
//! let mut session = Session::new("https://seacloud.example.com")?;
//! session.acquire_token("user@example.com", "secret")?;
//!
//! let mut client = SeafrontClient::new(&session)?;
//!
//! // Listing the root also fills the library cache.
//! for (path, entry) in client.list("/")? {
//!     println!("{} {}", path, entry.display_name);
//! }
//!
//! client.mkdir("/lib-id/docs", "reports")?;
//! client.upload("/lib-id/docs/reports", "local.pdf".as_ref(), None)?;
//! ```
//!
//! ## Operations
//!
//! [`SeafrontClient`] exposes list, mkdir, rename_dir, rename_file,
//! remove, move_items, copy_items, upload, and download, each a
//! single-shot blocking call. Failures come back as the tagged [`Error`]
//! enum; nothing is retried internally.

pub mod cache;
pub mod client;
pub mod error;
pub mod path;
pub mod resource;
pub mod session;
pub mod transport;
pub mod types;

pub use cache::{CachedLibrary, LibraryCache};
pub use client::SeafrontClient;
pub use error::Error;
pub use session::Session;
pub use transport::HttpTransport;
pub use types::{Entry, EntryKind};
