//! リモートAPIの契約
//!
//! エンドポイント組み立てと `SpecApi` トレイト。
//! 実装はCLI（reqwest）とWeb（web-sys fetch）にそれぞれある。

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ApiError;
use crate::types::{DatabaseRecord, SpecMap};

/// パスセグメントでそのまま残す文字（RFC 3986 unreserved）
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// 既定のAPIベースURL
pub const DEFAULT_API_BASE: &str = "https://spec-extractor.onrender.com/api";

/// 一括ダウンロードの既定ファイル名
pub const ALL_RECORDS_FILE_NAME: &str = "All_Chassis_Specs.xlsx";

/// エンドポイント一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEndpoints {
    base: String,
}

impl Default for ApiEndpoints {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiEndpoints {
    pub fn new(base: &str) -> Self {
        Self { base: base.trim().trim_end_matches('/').to_string() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST /specs`
    pub fn specs(&self) -> String {
        format!("{}/specs", self.base)
    }

    /// `GET /database`
    pub fn database(&self) -> String {
        format!("{}/database", self.base)
    }

    /// `DELETE /delete/{model}`
    pub fn delete(&self, model: &str) -> String {
        format!("{}/delete/{}", self.base, encode_segment(model))
    }

    /// `GET /download/{model}`
    pub fn download_one(&self, model: &str) -> String {
        format!("{}/download/{}", self.base, encode_segment(model))
    }

    /// `GET /download-all`
    pub fn download_all(&self) -> String {
        format!("{}/download-all", self.base)
    }

    pub fn download(&self, target: &DownloadTarget) -> String {
        match target {
            DownloadTarget::One(model) => self.download_one(model),
            DownloadTarget::All => self.download_all(),
        }
    }
}

/// パスセグメント用のパーセントエンコード
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// ダウンロード対象
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadTarget {
    One(String),
    All,
}

impl DownloadTarget {
    /// サービスが付けるファイル名と同じ既定名
    pub fn default_file_name(&self) -> String {
        match self {
            DownloadTarget::One(model) => format!("{}.xlsx", model),
            DownloadTarget::All => ALL_RECORDS_FILE_NAME.to_string(),
        }
    }
}

/// 取得したファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// `Content-Disposition` ヘッダからファイル名を取り出す
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty() && !name.contains(['/', '\\']))
}

/// リモート操作の境界
///
/// リトライ・タイムアウト・認証なし。各呼び出しは独立。
#[allow(async_fn_in_trait)]
pub trait SpecApi {
    fn endpoints(&self) -> &ApiEndpoints;

    async fn extract(&self, url: &str) -> Result<SpecMap, ApiError>;

    async fn list_records(&self) -> Result<Vec<DatabaseRecord>, ApiError>;

    /// ボディは無視し、レスポンスが返れば成功
    async fn delete_record(&self, model: &str) -> Result<(), ApiError>;
}

/// ダウンロード先をユーザーに開く
///
/// ブラウザは新しいウィンドウで開き、CLIは取得してディスクに保存する。
#[allow(async_fn_in_trait)]
pub trait Opener {
    /// 開いた結果（保存先パスなど）
    type Opened;

    async fn open(&self, url: &str, target: &DownloadTarget) -> Self::Opened;
}
