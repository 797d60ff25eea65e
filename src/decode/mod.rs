//! Response decoder module
//!
//! Turns StackExchange response bodies into typed values.
//!
//! # Overview
//!
//! A search page decodes into [`PageResponse`]. A rejected request whose body
//! carries the StackExchange error envelope decodes into [`ApiErrorBody`] and
//! then into [`Error::Api`](crate::Error::Api).

mod decoders;
mod types;

pub use decoders::{classify_http_error, decode_page};
pub use types::{ApiErrorBody, PageResponse};
