//! 対話シェル
//!
//! 抽出モードとデータベースモードを切り替えながら操作する。
//! 入力の解釈は `parse_command` に分けてある。

use crate::error::Result;
use crate::runner;
use dialoguer::Input;
use crate::runner::CliSession;
use spec_extractor_common::{Action, Mode, SpecApi};

/// シェルへの入力
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    SwitchMode(Mode),
    Extract(String),
    Search(String),
    Refresh,
    Delete(String),
    Download(String),
    DownloadAll,
    Help,
    Quit,
}

pub const HELP: &str = "\
:e  抽出モード     :d  データベースモード     :q  終了     :h  ヘルプ
抽出モード:        URLを入力すると仕様を取得
データベースモード: 文字列で絞り込み / rm MODEL 削除 / get MODEL ダウンロード / all 一括ダウンロード / r 再取得";

/// 入力行をモードに応じて解釈する
pub fn parse_command(input: &str, mode: Mode) -> ShellCommand {
    let trimmed = input.trim();

    match trimmed {
        ":e" | ":extract" => return ShellCommand::SwitchMode(Mode::Extraction),
        ":d" | ":db" | ":database" => return ShellCommand::SwitchMode(Mode::Database),
        ":q" | ":quit" => return ShellCommand::Quit,
        ":h" | ":help" | "?" => return ShellCommand::Help,
        _ => {}
    }

    match mode {
        Mode::Extraction => ShellCommand::Extract(input.to_string()),
        Mode::Database => {
            let (head, rest) = match trimmed.split_once(char::is_whitespace) {
                Some((head, rest)) => (head, rest.trim()),
                None => (trimmed, ""),
            };
            match (head, rest) {
                ("r" | "refresh", "") => ShellCommand::Refresh,
                ("all", "") => ShellCommand::DownloadAll,
                ("rm" | "delete", "") | ("get", "") => ShellCommand::Help,
                ("rm" | "delete", model) => ShellCommand::Delete(model.to_string()),
                ("get", model) => ShellCommand::Download(model.to_string()),
                _ => ShellCommand::Search(input.to_string()),
            }
        }
    }
}

/// 対話ループ
pub async fn run<A: SpecApi>(session: &mut CliSession<A>) -> Result<()> {
    println!("🔍 Spec Extractor shell\n{}\n", HELP);

    loop {
        let mode = session.state().mode;
        let prompt = match mode {
            Mode::Extraction => "[extract] URL",
            Mode::Database => "[database] search",
        };
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        match parse_command(&input, mode) {
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{}", HELP),
            ShellCommand::SwitchMode(next) => {
                session.dispatch(Action::SetMode(next)).await;
                println!("{}", runner::current_view(session.state()));
            }
            ShellCommand::Extract(url) => {
                if url.trim().is_empty() {
                    continue;
                }
                println!("{}", runner::extract(session, &url).await);
            }
            ShellCommand::Search(term) => {
                session.dispatch(Action::SetSearch(term)).await;
                println!("{}", runner::database_view(session.state()));
            }
            ShellCommand::Refresh => {
                println!("{}", runner::list(session, None).await);
            }
            ShellCommand::Delete(model) => {
                println!("{}", runner::delete(session, &model).await);
            }
            ShellCommand::Download(model) => {
                report_download(runner::download(session, Action::DownloadOne(model)).await);
            }
            ShellCommand::DownloadAll => {
                report_download(runner::download(session, Action::DownloadAll).await);
            }
        }
    }

    Ok(())
}

fn report_download(result: Result<Vec<std::path::PathBuf>>) {
    match result {
        Ok(paths) => {
            for path in paths {
                println!("✔ 保存: {}", path.display());
            }
        }
        Err(e) => eprintln!("ダウンロード失敗: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_switches_in_any_mode() {
        for mode in [Mode::Extraction, Mode::Database] {
            assert_eq!(parse_command(":d", mode), ShellCommand::SwitchMode(Mode::Database));
            assert_eq!(parse_command(" :e ", mode), ShellCommand::SwitchMode(Mode::Extraction));
            assert_eq!(parse_command(":q", mode), ShellCommand::Quit);
            assert_eq!(parse_command("?", mode), ShellCommand::Help);
        }
    }

    #[test]
    fn test_extraction_input_is_url() {
        assert_eq!(
            parse_command("https://example.com/rm", Mode::Extraction),
            ShellCommand::Extract("https://example.com/rm".to_string())
        );
        assert_eq!(parse_command("", Mode::Extraction), ShellCommand::Extract(String::new()));
    }

    #[test]
    fn test_database_commands() {
        assert_eq!(parse_command("rm Z790", Mode::Database), ShellCommand::Delete("Z790".into()));
        assert_eq!(parse_command("delete  R282 Z93", Mode::Database), ShellCommand::Delete("R282 Z93".into()));
        assert_eq!(parse_command("get B450M", Mode::Database), ShellCommand::Download("B450M".into()));
        assert_eq!(parse_command("all", Mode::Database), ShellCommand::DownloadAll);
        assert_eq!(parse_command("r", Mode::Database), ShellCommand::Refresh);
        assert_eq!(parse_command("rm", Mode::Database), ShellCommand::Help);
    }

    #[test]
    fn test_database_free_text_is_search() {
        assert_eq!(parse_command("b450", Mode::Database), ShellCommand::Search("b450".into()));
        assert_eq!(parse_command("", Mode::Database), ShellCommand::Search(String::new()));
    }
}
