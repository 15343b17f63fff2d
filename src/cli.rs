use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardiorisk")]
#[command(about = "心血管リスク予測APIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 予測APIのURL（設定ファイル・環境変数より優先）
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 1人分のデータでリスク予測
    Predict {
        /// 入力値 (name=value)。複数指定可
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// 入力JSONファイル（フィールド名 → 値）
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 未入力の項目を対話式で入力
        #[arg(short = 'I', long)]
        interactive: bool,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// Excel/CSVファイルを一括予測
    Batch {
        /// アップロードするファイル (.xlsx / .csv)
        #[arg(required = true)]
        file: PathBuf,

        /// 全結果をExcelに保存
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// 一括アップロード用のExcelテンプレートを作成
    Template {
        /// 出力ファイル
        #[arg(short, long, default_value = "cardiorisk-template.xlsx")]
        output: PathBuf,
    },

    /// 入力項目の一覧を表示
    Fields,

    /// 予測APIの稼働確認
    Health,

    /// 設定を表示/編集
    Config {
        /// 予測APIのURLを保存
        #[arg(long)]
        set_api_url: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 結果の出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// 人が読む表示（デフォルト）
    #[default]
    Text,
    /// JSON
    Json,
}
