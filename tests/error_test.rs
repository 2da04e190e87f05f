//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use spec_extractor::config::Config;
use spec_extractor::download::read_first_sheet;
use spec_extractor::error::SpecExtractorError;
use spec_extractor_common::ApiError;
use tempfile::tempdir;

/// 壊れた設定ファイル
#[test]
fn test_load_broken_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, SpecExtractorError::JsonParse(_)));
}

/// 存在しないワークブック
#[test]
fn test_read_missing_workbook() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = read_first_sheet(&dir.path().join("missing.xlsx"));
    assert!(matches!(result, Err(SpecExtractorError::Workbook(_))));
}

/// SpecExtractorErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        SpecExtractorError::Config("テスト設定エラー".to_string()),
        SpecExtractorError::Api(ApiError::Network("Failed to fetch".to_string())),
        SpecExtractorError::Prompt("interrupted".to_string()),
        SpecExtractorError::Workbook("broken.xlsx".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// APIエラーからの変換
#[test]
fn test_api_error_conversion() {
    let err: SpecExtractorError = ApiError::from_status(404, r#"{"error":"Model not found"}"#).into();

    assert!(matches!(err, SpecExtractorError::Api(ApiError::Status { status: 404, .. })));
    let display = format!("{}", err);
    assert!(display.contains("Model not found"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SpecExtractorError = io_err.into();

    assert!(matches!(err, SpecExtractorError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: SpecExtractorError = json_err.into();

    assert!(matches!(err, SpecExtractorError::JsonParse(_)));
}

/// 空のAPIベースURLは設定できない
#[test]
fn test_empty_api_base_rejected() {
    let mut config = Config::default();
    let err = config.set_api_base("   ".to_string()).unwrap_err();
    assert!(matches!(err, SpecExtractorError::Config(_)));
}
