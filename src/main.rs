use clap::Parser;
use cane_scan::{cli, client, config, detect, error};
use cli::{Cli, Commands};
use client::DetectClient;
use config::{validate_endpoint, Config};
use error::Result;
use indicatif::ProgressBar;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Detect { image, endpoint, timeout, json, raw } => {
            let endpoint = config.resolve_endpoint(endpoint.as_deref());
            validate_endpoint(&endpoint)?;
            let timeout = match timeout {
                Some(0) => None,
                Some(seconds) => Some(Duration::from_secs(seconds)),
                None => config.timeout_seconds.map(Duration::from_secs),
            };
            let client = DetectClient::new(endpoint, timeout)?;

            let mut session = detect::CliSession::new();
            detect::select(&mut session, &image)?;
            if let Some(preview) = session.preview() {
                log::info!("選択: {}", preview.display());
            }

            let spinner = ProgressBar::new_spinner();
            spinner.set_message(format!("検出中... ({})", client.endpoint()));
            spinner.enable_steady_tick(Duration::from_millis(100));

            if raw {
                let result = detect::submit_raw(&mut session, &client).await;
                spinner.finish_and_clear();
                let response = result?;
                println!("STATUS CODE: {}", response.status);
                println!("RAW RESPONSE:");
                println!("{}", response.body);
                // 終了コードのために分類だけ行う
                cane_scan_common::interpret_response(response.status, &response.body)?;
                return Ok(());
            }

            let result = detect::submit(&mut session, &client).await;
            spinner.finish_and_clear();
            let report = result?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("🚜 検出結果: {}\n", image.display());
                for (label, value) in report.rows() {
                    println!("  {:<14}{}", label, value);
                }
            }
            session.close_popup();
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut changed = false;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                changed = true;
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds);
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                match config.timeout_seconds {
                    Some(seconds) => println!("  タイムアウト: {}秒", seconds),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  実際の送信先: {}", config.resolve_endpoint(None));
            }
        }
    }

    Ok(())
}
