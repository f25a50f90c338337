//! # API crate — read-only access to the hosted literature store
//!
//! Everything the browser fetches goes through this crate. It knows the two
//! tables (`authors`, `contents`), the filters each view needs, and how a
//! route turns into requests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`DataClient`]: `reqwest` GET requests against `{url}/rest/v1/{table}` with the API key headers, and the [`Query`] builder |
//! | [`source`] | [`ContentSource`]: the four typed queries, implemented by [`DataClient`] |
//! | [`dispatch`] | [`load_view`]: fetches for one [`store::ViewRoute`] into [`store::ViewData`] |
//! | [`error`] | [`ApiError`] |

pub mod client;
pub mod dispatch;
pub mod error;
pub mod source;

pub use client::{DataClient, Query};
pub use dispatch::load_view;
pub use error::ApiError;
pub use source::ContentSource;
