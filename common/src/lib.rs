//! Spec Extractor Common Library
//!
//! CLIとWeb(WASM)で共有される状態遷移とAPI契約

pub mod api;
pub mod error;
pub mod session;
pub mod state;
pub mod types;

pub use api::{
    encode_segment, file_name_from_disposition, ApiEndpoints, Download, DownloadTarget, Opener,
    SpecApi, DEFAULT_API_BASE,
};
pub use error::ApiError;
pub use session::{Action, Session};
pub use state::{filter_records, Effect, Mode, ViewState, ERROR_ENTRY_NAME};
pub use types::{spec_entries, DatabaseRecord, SpecEntry, SpecMap, DATE_PLACEHOLDER};
