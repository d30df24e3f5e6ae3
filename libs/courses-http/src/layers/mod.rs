//! Tower layers for the HTTP client stack
//!
//! - [`DefaultHeadersLayer`] - Fills in `User-Agent` and `Accept` when the caller left them out

mod default_headers;

pub use default_headers::{DefaultHeadersLayer, DefaultHeadersService};
