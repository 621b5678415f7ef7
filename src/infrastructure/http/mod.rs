//! HTTP implementations of the license fetcher port

mod fetcher;

pub use fetcher::HttpFetcher;
