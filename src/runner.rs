//! サブコマンドとシェルが共有する処理
//!
//! 状態の変更はすべて `Session::dispatch` 経由で行い、
//! ここでは結果を端末向けの文字列にするだけ。

use crate::client::SaveToDir;
use crate::download::read_first_sheet;
use crate::error::Result;
use crate::output::{record_table, spec_table};
use indicatif::{ProgressBar, ProgressStyle};
use spec_extractor_common::{Action, Mode, Session, SpecApi, ViewState};
use std::path::{Path, PathBuf};

/// CLIのセッション
pub type CliSession<A> = Session<A, SaveToDir>;
use std::time::Duration;

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// 抽出画面の表示
pub fn extraction_view(state: &ViewState) -> String {
    spec_table(&state.spec_entries)
}

/// データベース画面の表示（失敗があれば先頭に出す）
pub fn database_view(state: &ViewState) -> String {
    let table = record_table(&state.filtered_records());
    match &state.database_error {
        Some(err) => format!("⚠ {}\n{}", err, table),
        None => table,
    }
}

/// 現在のモードの画面
pub fn current_view(state: &ViewState) -> String {
    match state.mode {
        Mode::Extraction => extraction_view(state),
        Mode::Database => database_view(state),
    }
}

/// URLから仕様を抽出して表にする
pub async fn extract<A: SpecApi>(session: &mut CliSession<A>, url: &str) -> String {
    session.dispatch(Action::SetMode(Mode::Extraction)).await;
    session.dispatch(Action::SetUrl(url.to_string())).await;

    let pb = spinner("Fetching specs...");
    session.dispatch(Action::Extract).await;
    pb.finish_and_clear();

    extraction_view(session.state())
}

/// 一覧を取得して（必要なら絞り込んで）表にする
pub async fn list<A: SpecApi>(session: &mut CliSession<A>, search: Option<&str>) -> String {
    if session.state().mode == Mode::Database {
        session.dispatch(Action::Refresh).await;
    } else {
        session.dispatch(Action::SetMode(Mode::Database)).await;
    }
    if let Some(term) = search {
        session.dispatch(Action::SetSearch(term.to_string())).await;
    }
    database_view(session.state())
}

/// 削除して取り直した一覧を返す
pub async fn delete<A: SpecApi>(session: &mut CliSession<A>, model: &str) -> String {
    session.dispatch(Action::Delete(model.to_string())).await;
    database_view(session.state())
}

/// ダウンロード操作を実行して保存したパスを返す
pub async fn download<A: SpecApi>(session: &mut CliSession<A>, action: Action) -> Result<Vec<PathBuf>> {
    let pb = spinner(&format!("Downloading to {}...", session.opener().dir().display()));
    let saved = session.dispatch(action).await;
    pb.finish_and_clear();

    saved.into_iter().collect()
}

/// 保存したワークブックの先頭シートをタブ区切りで返す
pub fn sheet_preview(path: &Path) -> Result<String> {
    let rows = read_first_sheet(path)?;
    Ok(rows
        .iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n"))
}
