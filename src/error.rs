use spec_extractor_common::ApiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecExtractorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("API呼び出しエラー: {0}")]
    Api(#[from] ApiError),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("Excel読み込みエラー: {0}")]
    Workbook(String),
}

impl From<dialoguer::Error> for SpecExtractorError {
    fn from(e: dialoguer::Error) -> Self {
        SpecExtractorError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpecExtractorError>;
