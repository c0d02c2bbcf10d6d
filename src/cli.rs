use clap::{Parser, Subcommand};
use smart_report_common::RowFilter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smart-report")]
#[command(about = "乾燥方式別の水分測定精度レポート・検索ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 全材料の集計レポート（Excel）を出力
    Report {
        /// 測定データ（xlsx/xls/csv、省略時は設定値）
        input: Option<PathBuf>,

        /// 出力ディレクトリ（省略時は設定値）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// シート名
        #[arg(long)]
        sheet: Option<String>,

        /// ew がこの値未満の行だけ集計
        #[arg(long)]
        max_ew: Option<f64>,

        /// ew = 0（未測定）の行を除外
        #[arg(long)]
        exclude_zero_ew: bool,

        /// 集計結果をJSONでも出力
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// 材料番号で方式別の結果を検索
    Lookup {
        /// 測定データ（xlsx/xls/csv、省略時は設定値）
        input: Option<PathBuf>,

        /// 材料番号（1件だけ検索して終了。スクリプトからはこちらを使う。省略時は対話モード）
        #[arg(short, long)]
        material: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定の入力ファイルを設定
        #[arg(long)]
        set_input: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// レポート用の行フィルタを組み立てる
pub fn row_filter(max_ew: Option<f64>, exclude_zero_ew: bool) -> RowFilter {
    RowFilter {
        max_ew,
        exclude_zero_ew,
    }
}
