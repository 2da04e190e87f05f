//! Spec Extractor CLI
//!
//! 抽出サービスのクライアント。状態遷移は `spec_extractor_common` にあり、
//! ここではHTTP実装と端末での表示を受け持つ。

pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod logging;
pub mod output;
pub mod runner;
pub mod shell;
