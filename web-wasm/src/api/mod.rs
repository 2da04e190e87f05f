//! ブラウザ側のAPI実装

pub mod fetch;

pub use fetch::FetchApi;
