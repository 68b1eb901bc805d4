//! Remote roster service adapter.

mod dto;
mod http;

pub use http::HttpClientApi;
