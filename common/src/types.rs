//! データモデルとAPIのワイヤ型
//!
//! - SpecEntry: 抽出結果の1行（名前, 値）
//! - DatabaseRecord: 保存済みレコード
//! - SpecMap: `/specs` が返すマップ（キー順を保持）

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `/specs` のレスポンス本体（名前 → 値）
///
/// serde_json の `preserve_order` によりレスポンスのキー順がそのまま残る。
pub type SpecMap = Map<String, Value>;

/// 抽出結果の1行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub name: String,
    pub value: String,
}

impl SpecEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// 日付が無いときの表示
pub const DATE_PLACEHOLDER: &str = "-";

/// 保存済みレコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRecord {
    /// 削除・ダウンロードのキー
    #[serde(rename = "Model")]
    pub model: String,

    #[serde(rename = "Date Scraped", default, skip_serializing_if = "Option::is_none")]
    pub date_scraped: Option<String>,

    /// 抽出元URL
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl DatabaseRecord {
    pub fn new(model: impl Into<String>, date_scraped: Option<&str>) -> Self {
        Self {
            model: model.into(),
            date_scraped: date_scraped.map(str::to_string),
            url: None,
        }
    }

    /// 表示用の日付（空・欠損は "-"）
    pub fn date_display(&self) -> &str {
        match self.date_scraped.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => DATE_PLACEHOLDER,
        }
    }
}

/// `POST /specs` のリクエスト
#[derive(Debug, Clone, Serialize)]
pub struct ExtractRequest<'a> {
    pub url: &'a str,
}

/// サービスが失敗時に返すボディ
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteErrorBody {
    pub error: String,
}

/// 値を表示用文字列に変換
pub fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// マップをレスポンスのキー順のまま SpecEntry 列に変換
pub fn spec_entries(map: &SpecMap) -> Vec<SpecEntry> {
    map.iter()
        .map(|(name, value)| SpecEntry::new(name.as_str(), value_to_display(value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_entries_keep_response_order() {
        let map: SpecMap = serde_json::from_str(r#"{"RAM":"32GB","CPU":"i9-13900K","Bays":4}"#).unwrap();
        let entries = spec_entries(&map);
        assert_eq!(
            entries,
            vec![
                SpecEntry::new("RAM", "32GB"),
                SpecEntry::new("CPU", "i9-13900K"),
                SpecEntry::new("Bays", "4"),
            ]
        );
    }

    #[test]
    fn test_value_to_display() {
        assert_eq!(value_to_display(&Value::from("1U")), "1U");
        assert_eq!(value_to_display(&Value::from(350)), "350");
        assert_eq!(value_to_display(&Value::from(2.5)), "2.5");
        assert_eq!(value_to_display(&Value::from(true)), "true");
        assert_eq!(value_to_display(&Value::Null), "null");
        assert_eq!(value_to_display(&serde_json::json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_record_deserialize_with_and_without_date() {
        let records: Vec<DatabaseRecord> = serde_json::from_str(
            r#"[{"Model":"B450M","Date Scraped":"2024-01-01","URL":"https://example.com/B450M"},{"Model":"Z790"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].model, "B450M");
        assert_eq!(records[0].date_display(), "2024-01-01");
        assert_eq!(records[0].url.as_deref(), Some("https://example.com/B450M"));
        assert_eq!(records[1].date_scraped, None);
        assert_eq!(records[1].date_display(), "-");
    }

    #[test]
    fn test_record_null_date_renders_placeholder() {
        let record: DatabaseRecord =
            serde_json::from_str(r#"{"Model":"R282","Date Scraped":null}"#).unwrap();
        assert_eq!(record.date_display(), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_extract_request_body() {
        let body = serde_json::to_string(&ExtractRequest { url: "https://example.com/x" }).unwrap();
        assert_eq!(body, r#"{"url":"https://example.com/x"}"#);
    }
}
