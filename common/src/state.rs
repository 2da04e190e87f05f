//! 画面状態と遷移
//!
//! 状態はすべて `ViewState` に集約し、ユーザー操作とAPI応答ごとに
//! 1つの遷移メソッドを持つ。遷移は状態だけを書き換え、実行すべき
//! リモート操作を `Effect` として返す。

use crate::api::DownloadTarget;
use crate::error::ApiError;
use crate::types::{spec_entries, DatabaseRecord, SpecEntry, SpecMap};

/// 抽出失敗時の行名
pub const ERROR_ENTRY_NAME: &str = "Error";

/// 表示モード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Extraction,
    Database,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Extraction => "extraction",
            Mode::Database => "database",
        }
    }
}

/// 遷移が要求するリモート操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Extract { generation: u64, url: String },
    ListRecords { generation: u64 },
    DeleteRecord { model: String },
    /// ダウンロード先をユーザーに開く（状態変化なし）
    Open(DownloadTarget),
}

/// 画面状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub mode: Mode,
    pub url: String,
    pub spec_entries: Vec<SpecEntry>,
    pub extraction_in_flight: bool,
    pub database_records: Vec<DatabaseRecord>,
    pub search_term: String,
    /// 直近のDB操作の失敗（次のDB操作開始で消える）
    pub database_error: Option<String>,
    /// 最新の抽出リクエスト番号
    pub extract_generation: u64,
    /// 最新の一覧取得リクエスト番号
    pub list_generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    // =============================================
    // モード切替
    // =============================================

    /// モードを切り替える
    ///
    /// Databaseへ入るときだけ一覧を取り直す。既に同じモードなら何もしない。
    pub fn set_mode(&mut self, mode: Mode) -> Vec<Effect> {
        if self.mode == mode {
            tracing::debug!(mode = mode.as_str(), "mode already active");
            return vec![];
        }
        tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "mode changed");
        self.mode = mode;

        match mode {
            Mode::Database => {
                self.database_error = None;
                vec![self.refresh()]
            }
            Mode::Extraction => vec![],
        }
    }

    // =============================================
    // 抽出
    // =============================================

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into();
    }

    /// 抽出を開始する。空白のみのURLは何もしない。
    pub fn submit_extraction(&mut self) -> Option<Effect> {
        if self.url.trim().is_empty() {
            tracing::debug!("empty url, extraction skipped");
            return None;
        }
        self.extract_generation += 1;
        self.extraction_in_flight = true;
        tracing::debug!(generation = self.extract_generation, url = %self.url, "extraction started");

        Some(Effect::Extract {
            generation: self.extract_generation,
            url: self.url.clone(),
        })
    }

    /// 抽出の応答を反映する。古いリクエストの応答は捨てる。
    pub fn extraction_settled(&mut self, generation: u64, result: Result<SpecMap, ApiError>) {
        if generation != self.extract_generation {
            tracing::debug!(generation, latest = self.extract_generation, "stale extraction discarded");
            return;
        }
        self.extraction_in_flight = false;

        self.spec_entries = match result {
            Ok(map) => spec_entries(&map),
            Err(e) => {
                tracing::warn!(error = %e, "extraction failed");
                vec![error_entry(&e)]
            }
        };
    }

    // =============================================
    // データベース
    // =============================================

    /// 一覧を取り直す
    pub fn refresh(&mut self) -> Effect {
        self.list_generation += 1;
        Effect::ListRecords { generation: self.list_generation }
    }

    /// ユーザー操作による再取得（前回の失敗表示を消す）
    pub fn reload(&mut self) -> Effect {
        self.database_error = None;
        self.refresh()
    }

    /// 一覧の応答を反映する（差分なしで丸ごと置換）
    pub fn records_loaded(&mut self, generation: u64, result: Result<Vec<DatabaseRecord>, ApiError>) {
        if generation != self.list_generation {
            tracing::debug!(generation, latest = self.list_generation, "stale record list discarded");
            return;
        }
        match result {
            Ok(records) => {
                tracing::debug!(count = records.len(), "records loaded");
                self.database_records = records;
            }
            Err(e) => {
                tracing::warn!(error = %e, "record list failed");
                self.database_error = Some(format!("Could not load records: {}", e));
            }
        }
    }

    /// 検索語はそのまま保存（絞り込みは表示時）
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// 削除を要求する（確認なし・楽観的削除なし）
    pub fn delete_record(&mut self, model: &str) -> Effect {
        self.database_error = None;
        tracing::debug!(model, "delete requested");
        Effect::DeleteRecord { model: model.to_string() }
    }

    /// 削除の完了。成否に関わらず一覧を取り直す。
    pub fn delete_settled(&mut self, model: &str, result: Result<(), ApiError>) -> Effect {
        if let Err(e) = result {
            tracing::warn!(model, error = %e, "delete failed");
            self.database_error = Some(format!("Could not delete {}: {}", model, e));
        }
        self.refresh()
    }

    pub fn download_one(&self, model: &str) -> Effect {
        Effect::Open(DownloadTarget::One(model.to_string()))
    }

    pub fn download_all(&self) -> Effect {
        Effect::Open(DownloadTarget::All)
    }

    /// 検索語で絞り込んだレコード（毎回計算）
    pub fn filtered_records(&self) -> Vec<&DatabaseRecord> {
        filter_records(&self.database_records, &self.search_term)
    }
}

/// Modelに検索語を大文字小文字無視で含むレコード
pub fn filter_records<'a>(records: &'a [DatabaseRecord], term: &str) -> Vec<&'a DatabaseRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| r.model.to_lowercase().contains(&needle))
        .collect()
}

fn error_entry(error: &ApiError) -> SpecEntry {
    let message = error.to_string();
    let message = if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    };
    SpecEntry::new(ERROR_ENTRY_NAME, message)
}
