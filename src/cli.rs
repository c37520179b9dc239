use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cane-scan")]
#[command(about = "車両・サトウキビ検出APIに画像を送信して結果を表示", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 画像を検出APIに送信して結果を表示
    Detect {
        /// 画像ファイルのパス
        #[arg(required = true)]
        image: PathBuf,

        /// 検出APIのURL（省略時は環境変数/設定ファイル）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// タイムアウト秒数（0で無制限）
        #[arg(short, long)]
        timeout: Option<u64>,

        /// 表示結果をJSONで出力
        #[arg(long, conflicts_with = "raw")]
        json: bool,

        /// ステータスコードとレスポンス本文をそのまま出力
        #[arg(long)]
        raw: bool,
    },

    /// 設定を表示/編集
    Config {
        /// エンドポイントを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定（0で無制限）
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
