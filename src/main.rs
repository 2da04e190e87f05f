use clap::Parser;
use spec_extractor::{cli, config, error, logging, runner, shell};
use spec_extractor::client::{HttpApi, SaveToDir};
use spec_extractor_common::{Action, Session};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = Config::load()?;
    let api_base = config.resolve_api_base(cli.api_base.as_deref());
    tracing::debug!(api_base = %api_base, "config loaded");

    let output = match &cli.command {
        Commands::Download { output, .. } | Commands::DownloadAll { output, .. } => output.clone(),
        _ => None,
    };
    let download_dir = config.resolve_download_dir(output.as_deref());
    let mut session = Session::new(HttpApi::new(&api_base), SaveToDir::new(download_dir));

    match cli.command {
        Commands::Extract { url } => {
            println!("{}", runner::extract(&mut session, &url).await);
        }

        Commands::List { search } => {
            println!("{}", runner::list(&mut session, search.as_deref()).await);
        }

        Commands::Delete { model } => {
            println!("{}", runner::delete(&mut session, &model).await);
        }

        Commands::Download { model, show, .. } => {
            let saved = runner::download(&mut session, Action::DownloadOne(model)).await?;
            print_saved(&saved, show)?;
        }

        Commands::DownloadAll { show, .. } => {
            let saved = runner::download(&mut session, Action::DownloadAll).await?;
            print_saved(&saved, show)?;
        }

        Commands::Shell => {
            shell::run(&mut session).await?;
        }

        Commands::Config { set_api_base, set_download_dir, show } => {
            if let Some(base) = set_api_base {
                config.set_api_base(base)?;
                println!("✔ APIベースURLを設定しました");
            }

            if let Some(dir) = set_download_dir {
                config.set_download_dir(dir)?;
                println!("✔ 保存先を設定しました");
            }

            if show {
                println!("設定:");
                println!("  ファイル: {}", Config::config_path()?.display());
                println!("  APIベースURL: {}", config.api_base);
                println!("  使用中のURL: {}", api_base);
                println!(
                    "  保存先: {}",
                    config.download_dir.as_deref().unwrap_or(Path::new(".")).display()
                );
            }
        }
    }

    Ok(())
}

fn print_saved(saved: &[PathBuf], show: bool) -> Result<()> {
    for path in saved {
        println!("✔ 保存: {}", path.display());
        if show {
            println!("{}", runner::sheet_preview(path)?);
        }
    }
    Ok(())
}
