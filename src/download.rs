//! ダウンロードしたファイルの保存と確認表示

use crate::error::{Result, SpecExtractorError};
use calamine::{open_workbook, Reader, Xlsx};
use spec_extractor_common::Download;
use std::path::{Path, PathBuf};

/// 保存先ディレクトリにファイルを書き出す
pub fn save_download(download: &Download, dir: &Path) -> Result<PathBuf> {
    let file_name = Path::new(&download.file_name)
        .file_name()
        .ok_or_else(|| SpecExtractorError::Config(format!("不正なファイル名: {}", download.file_name)))?;

    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, &download.bytes)?;
    tracing::debug!(path = %path.display(), bytes = download.bytes.len(), "download saved");
    Ok(path)
}

/// 先頭シートを文字列の行として読む
pub fn read_first_sheet(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| SpecExtractorError::Workbook(format!("{}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| SpecExtractorError::Workbook("シートがありません".into()))?
        .map_err(|e| SpecExtractorError::Workbook(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect())
}
