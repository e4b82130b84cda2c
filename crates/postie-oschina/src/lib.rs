//! OSChina draft management for postie.
//!
//! OSChina exposes no API for blog drafts. This crate reconstructs drafts
//! from the server-rendered list and edit pages and submits them back
//! through the same form endpoints the web editor uses:
//!
//! - [`OschinaClient::list_drafts`]: one page of draft summaries
//! - [`OschinaClient::get_draft_detail`]: full editable article from the edit page
//! - [`OschinaClient::save_draft`]: create or update a draft
//! - [`OschinaClient::publish_draft`]: publish a draft as an article
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), postie_oschina::OschinaError> {
//! use postie_oschina::OschinaClient;
//!
//! let client = OschinaClient::from_config(
//!     "https://my.oschina.net/u/1234567",
//!     "oscid=...",
//!     "postie",
//!     30,
//! );
//!
//! let page = client.list_drafts(1)?;
//! for draft in &page.drafts {
//!     let mut content = client.get_draft_detail(&draft.id)?;
//!     content.title.push_str(" (edited)");
//!     client.save_draft(&mut content)?;
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod extract;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod transport;
mod types;

pub use client::{CategorySource, OschinaClient};
pub use error::{ErrorKind, OschinaError};
#[cfg(any(test, feature = "mock"))]
pub use mock::{Call, Method, MockTransport};
pub use transport::{HttpTransport, Transport};
pub use types::{ArticleContent, ArticleType, Category, DraftPage, DraftSummary, SaveIntent};
