use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spec-extractor")]
#[command(about = "製品ページから仕様を抽出し、保存済みレコードを管理する", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// APIベースURL（環境変数・設定ファイルより優先）
    #[arg(long, global = true)]
    pub api_base: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// URLから仕様を抽出
    Extract {
        /// 製品ページのURL
        url: String,
    },

    /// 保存済みレコードを一覧表示
    List {
        /// Modelの部分一致（大文字小文字無視）
        #[arg(short, long)]
        search: Option<String>,
    },

    /// レコードを削除して一覧を再表示
    Delete {
        model: String,
    },

    /// 1件をXLSXでダウンロード
    Download {
        model: String,

        /// 保存先ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 保存後に内容を表示
        #[arg(long)]
        show: bool,
    },

    /// 全件をXLSXでダウンロード
    DownloadAll {
        /// 保存先ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 保存後に内容を表示
        #[arg(long)]
        show: bool,
    },

    /// 対話シェル
    Shell,

    /// 設定
    Config {
        /// APIベースURLを設定
        #[arg(long)]
        set_api_base: Option<String>,

        /// ダウンロード保存先を設定
        #[arg(long)]
        set_download_dir: Option<PathBuf>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
